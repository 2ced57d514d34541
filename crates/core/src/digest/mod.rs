//! Digest run orchestration

pub mod ports;
pub mod service;

pub use service::{ConnectivityReport, DigestService, PreparedDigest};
