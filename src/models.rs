// src/models.rs
use serde::{Deserialize, Serialize};

/// Whatever the server answers; no schema is assumed.
pub type SubmissionResponse = serde_json::Value;

/// Request body with the solution embedded as a JSON value.
#[derive(Serialize)]
pub struct InlineSubmission<'a, S: ?Sized> {
    pub problem_id: i64,
    pub solver: &'a str,
    pub solution: &'a S,
}

/// Request body with the solution re-encoded as a JSON string.
#[derive(Serialize)]
pub struct ContentsSubmission<'a> {
    pub problem_id: i64,
    pub solver: &'a str,
    pub contents: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
}

/// Solver output: one placement per musician, plus optional volumes.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Solution {
    pub placements: Vec<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<f64>>,
}

/// One row of `/api/solutions/show`, sent by the backend as a JSON array.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SolutionRow {
    pub id: i64,
    pub problem_id: i64,
    pub submission_id: String,
    pub solver: String,
    pub status: Option<String>,
    pub score: Option<i64>,
    pub ts: chrono::NaiveDateTime,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub submission_id: String,
}
