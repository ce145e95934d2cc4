// src/backend.rs

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::errors::{Result, SubmitError};
use crate::models::{SolutionRow, SubmitReceipt};
use crate::submitter::decode_json;

/// Client for the team backend that stores submissions and tracks their scores.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    pub async fn hello(&self) -> Result<serde_json::Value> {
        self.get("/api/hello", &[]).await
    }

    /// Latest solutions, best score first.
    pub async fn show(&self) -> Result<Vec<SolutionRow>> {
        self.get("/api/solutions/show", &[]).await
    }

    pub async fn solution(&self, id: i64) -> Result<serde_json::Value> {
        self.get("/api/solutions", &[("id", id.to_string())]).await
    }

    /// Uploads a solution file; the backend forwards it to the contest API.
    pub async fn submit_file(
        &self,
        problem_id: i64,
        solver: &str,
        contents: String,
    ) -> Result<SubmitReceipt> {
        let endpoint = "/api/solutions/submit";
        let file = Part::text(contents).file_name("solution.json");
        let form = Form::new().part("file", file);

        log::debug!("Uploading solution for problem {} from '{}'", problem_id, solver);

        let resp = self
            .client
            .post(self.url(endpoint))
            .query(&[("id", problem_id.to_string()), ("solver", solver.to_string())])
            .multipart(form)
            .send()
            .await?;

        decode_logged(endpoint, resp).await
    }

    /// Asks the backend to poll the contest API for pending scores.
    pub async fn update_score(&self) -> Result<serde_json::Value> {
        let endpoint = "/api/solutions/update_score";
        let resp = self.client.post(self.url(endpoint)).send().await?;
        decode_logged(endpoint, resp).await
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T> {
        let resp = self
            .client
            .get(self.url(endpoint))
            .header(CONTENT_TYPE, "application/json")
            .query(query)
            .send()
            .await?;
        decode_logged(endpoint, resp).await
    }
}

async fn decode_logged<T: DeserializeOwned>(endpoint: &str, resp: Response) -> Result<T> {
    let status = resp.status();
    decode_json(resp).await.inspect_err(|e| {
        if let SubmitError::Decode(source) = e {
            log::error!(
                "failed to decode response from {} (status {}): {}",
                endpoint,
                status,
                source
            );
        }
    })
}
