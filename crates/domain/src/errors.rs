//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SalesDigest
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SalesDigestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    /// A source dataset could not be retrieved; fatal for the run.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A single outbound report could not be delivered.
    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for SalesDigest operations
pub type Result<T> = std::result::Result<T, SalesDigestError>;
