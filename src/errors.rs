// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Solution file is not valid JSON: {0}")]
    SolutionFile(#[source] serde_json::Error),

    #[error("Failed to encode solution as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SubmitError>;
