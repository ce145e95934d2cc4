// src/submitter.rs

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Instant;

use crate::config::{SubmitConfig, WireFormat};
use crate::errors::{Result, SubmitError};
use crate::models::{ContentsSubmission, InlineSubmission, SubmissionResponse};

/// Builds the HTTP client used for submissions.
/// Cookies set by the scoring site are kept and sent back on later requests.
pub fn http_client() -> Result<Client> {
    Ok(Client::builder().cookie_store(true).build()?)
}

/// Posts solutions to the configured scoring endpoint.
#[derive(Clone)]
pub struct SolutionSubmitter {
    client: Client,
    config: SubmitConfig,
}

impl SolutionSubmitter {
    /// Creates a new `SolutionSubmitter`.
    pub fn new(client: Client, config: SubmitConfig) -> Self {
        Self { client, config }
    }

    pub fn from_config(config: SubmitConfig) -> Result<Self> {
        Ok(Self::new(http_client()?, config))
    }

    /// The endpoint and wire format this submitter posts with.
    pub fn config(&self) -> &SubmitConfig {
        &self.config
    }

    /// Returns the exact JSON body `submit_solution` would send.
    pub fn build_body<S>(&self, problem_id: i64, solver: &str, solution: &S) -> Result<serde_json::Value>
    where
        S: Serialize + ?Sized,
    {
        let body = match self.config.wire_format {
            WireFormat::Inline => serde_json::to_value(InlineSubmission {
                problem_id,
                solver,
                solution,
            }),
            WireFormat::Contents => {
                let contents = serde_json::to_string(solution).map_err(SubmitError::Encode)?;
                serde_json::to_value(ContentsSubmission {
                    problem_id,
                    solver,
                    contents,
                })
            }
        };
        body.map_err(SubmitError::Encode)
    }

    /// Sends one solution and returns the decoded response body.
    ///
    /// The status code is not inspected: an error page with a JSON body
    /// resolves like any other response.
    pub async fn submit_solution<S>(
        &self,
        problem_id: i64,
        solver: &str,
        solution: &S,
    ) -> Result<SubmissionResponse>
    where
        S: Serialize + ?Sized,
    {
        let body = self.build_body(problem_id, solver, solution)?;
        let url = &self.config.endpoint_url;

        log::debug!("Submitting problem {} from solver '{}' to {}", problem_id, solver, url);

        let start = Instant::now();
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        log::debug!(
            "Submit response status: {} ({}ms)",
            resp.status(),
            start.elapsed().as_millis()
        );

        decode_json(resp).await
    }
}

/// Loads a solver output file as an opaque JSON payload.
pub fn read_solution_file(path: impl AsRef<Path>) -> Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(SubmitError::SolutionFile)
}

/// Reads the whole body and parses it as JSON.
pub(crate) async fn decode_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(SubmitError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Placement, Solution};
    use serde_json::json;

    fn submitter(wire_format: WireFormat) -> SolutionSubmitter {
        SolutionSubmitter::new(
            Client::new(),
            SubmitConfig {
                wire_format,
                ..SubmitConfig::default()
            },
        )
    }

    #[test]
    fn test_inline_body_keeps_solution_as_json() {
        let solution = json!({"placements": [{"x": 10.0, "y": 20.0}], "volumes": [1.0]});
        let body = submitter(WireFormat::Inline)
            .build_body(42, "garasubo", &solution)
            .unwrap();

        assert_eq!(
            body,
            json!({"problem_id": 42, "solver": "garasubo", "solution": solution})
        );
    }

    #[test]
    fn test_contents_body_stringifies_solution() {
        let solution = Solution {
            placements: vec![Placement { x: 1.5, y: -3.0 }],
            volumes: Some(vec![10.0]),
        };
        let body = submitter(WireFormat::Contents)
            .build_body(-7, "", &solution)
            .unwrap();

        assert_eq!(body["problem_id"], -7);
        assert_eq!(body["solver"], "");
        assert!(body.get("solution").is_none());

        let contents = body["contents"].as_str().unwrap();
        let decoded: Solution = serde_json::from_str(contents).unwrap();
        assert_eq!(decoded, solution);
    }

    #[test]
    fn test_from_config_keeps_config() {
        let config = SubmitConfig::local_backend();
        let submitter = SolutionSubmitter::from_config(config.clone()).unwrap();
        assert_eq!(submitter.config(), &config);
    }

    #[test]
    fn test_read_solution_file() {
        let dir = std::env::temp_dir().join(format!("submit-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let good = dir.join("good.json");
        std::fs::write(&good, r#"{"placements": [{"x": 1.0, "y": 2.0}]}"#).unwrap();
        let value = read_solution_file(&good).unwrap();
        assert_eq!(value["placements"][0]["y"], 2.0);

        let bad = dir.join("bad.json");
        std::fs::write(&bad, "placements: oops").unwrap();
        let err = read_solution_file(&bad).unwrap_err();
        assert!(matches!(err, SubmitError::SolutionFile(_)), "got {:?}", err);
        assert!(err.to_string().starts_with("Solution file is not valid JSON"));

        let err = read_solution_file(dir.join("missing.json")).unwrap_err();
        assert!(matches!(err, SubmitError::FileRead(_)));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unserializable_solution_is_encode_error() {
        let mut bad = std::collections::HashMap::new();
        bad.insert((1, 2), "tuple keys are not valid JSON object keys");

        for format in [WireFormat::Inline, WireFormat::Contents] {
            let err = submitter(format).build_body(1, "s", &bad).unwrap_err();
            assert!(matches!(err, SubmitError::Encode(_)));
        }
    }
}
