// src/lib.rs
pub mod backend;
pub mod config;
pub mod errors;
pub mod models;
pub mod submitter;

pub use backend::BackendClient;
pub use config::{SubmitConfig, WireFormat};
pub use errors::{Result, SubmitError};
pub use submitter::SolutionSubmitter;
