// src/config.rs
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use crate::errors::{Result, SubmitError};

pub const NEGAINOIDO_SUBMIT_URL: &str = "https://icfpc2023.negainoido.com/api/submit_json";
pub const LOCAL_SUBMIT_URL: &str = "http://localhost:8080/api/solutions/submit_json";
pub const LOCAL_BACKEND_URL: &str = "http://localhost:8080";

/// How the solution is embedded in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    /// `{"problem_id", "solver", "solution": <json>}`
    #[default]
    Inline,
    /// `{"problem_id", "solver", "contents": "<json string>"}`
    Contents,
}

impl FromStr for WireFormat {
    type Err = SubmitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(WireFormat::Inline),
            "contents" => Ok(WireFormat::Contents),
            other => Err(SubmitError::Config(format!(
                "unknown wire format '{}', expected 'inline' or 'contents'",
                other
            ))),
        }
    }
}

/// Where and how solutions are submitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitConfig {
    /// Full URL the submission is POSTed to.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    #[serde(default)]
    pub wire_format: WireFormat,

    /// Base URL of the team backend used by `BackendClient`.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

fn default_endpoint_url() -> String {
    NEGAINOIDO_SUBMIT_URL.to_string()
}

fn default_backend_url() -> String {
    LOCAL_BACKEND_URL.to_string()
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self::negainoido()
    }
}

impl SubmitConfig {
    /// The public scoring site, solution embedded inline.
    pub fn negainoido() -> Self {
        Self {
            endpoint_url: NEGAINOIDO_SUBMIT_URL.to_string(),
            wire_format: WireFormat::Inline,
            backend_url: LOCAL_BACKEND_URL.to_string(),
        }
    }

    /// The local backend, solution sent as a JSON string under `contents`.
    pub fn local_backend() -> Self {
        Self {
            endpoint_url: LOCAL_SUBMIT_URL.to_string(),
            wire_format: WireFormat::Contents,
            backend_url: LOCAL_BACKEND_URL.to_string(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint_url = lookup("SUBMIT_ENDPOINT_URL").unwrap_or_else(default_endpoint_url);
        let wire_format = match lookup("SUBMIT_WIRE_FORMAT") {
            Some(raw) => raw.parse()?,
            None => WireFormat::default(),
        };
        let backend_url = lookup("SUBMIT_BACKEND_URL").unwrap_or_else(default_backend_url);

        if endpoint_url.trim().is_empty() {
            return Err(SubmitError::Config(
                "SUBMIT_ENDPOINT_URL is set but empty".to_string(),
            ));
        }

        Ok(SubmitConfig { endpoint_url, wire_format, backend_url })
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
