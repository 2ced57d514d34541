//! HTTP client shared by the ERP and messaging adapters

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
