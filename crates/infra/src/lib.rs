//! # SalesDigest Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client and error conversions
//! - Configuration loading (file + environment)
//! - External service integrations (ERP integration API, messaging API)
//! - Logging setup
//!
//! ## Architecture
//! - Implements traits defined in `salesdigest-core`
//! - Contains all "impure" code (network, files, environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::{AccessTokenProvider, ErpClient, MessagingClient, PasswordGrantAuth};
pub use observability::{init_logging, with_startup_logging, LogGuard};
