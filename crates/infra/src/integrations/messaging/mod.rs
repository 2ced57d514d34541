//! Messaging API adapter
//!
//! Sends rendered reports with `POST <api_url>` and a JSON
//! `{"number", "body"}` payload. Only HTTP 200 counts as delivered.

pub mod client;

pub use client::MessagingClient;
