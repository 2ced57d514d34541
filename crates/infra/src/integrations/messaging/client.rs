//! Messaging API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use salesdigest_core::ReportSender;
use salesdigest_domain::{MessagingConfig, Result, SalesDigestError};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::http::HttpClient;

const PROBE_TIMEOUT_SECS: u64 = 10;

/// Client for the messaging API's send endpoint
pub struct MessagingClient {
    api_url: String,
    token: String,
    http_client: HttpClient,
    probe_client: HttpClient,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    number: &'a str,
    body: &'a str,
}

impl MessagingClient {
    /// # Errors
    /// Returns `SalesDigestError::Config` when the token is missing.
    pub fn new(config: &MessagingConfig) -> Result<Self> {
        let token = config
            .token
            .clone()
            .ok_or_else(|| SalesDigestError::Config("messaging.token is not set".into()))?;

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Self::with_http_client(config.api_url.clone(), token, http_client)
    }

    pub fn with_http_client(
        api_url: String,
        token: String,
        http_client: HttpClient,
    ) -> Result<Self> {
        let probe_client =
            HttpClient::builder().timeout(Duration::from_secs(PROBE_TIMEOUT_SECS)).build()?;

        Ok(Self { api_url, token, http_client, probe_client })
    }

    /// Probe target: the API URL with its trailing `/send` segment removed.
    fn probe_url(&self) -> &str {
        let trimmed = self.api_url.trim_end_matches('/');
        trimmed.strip_suffix("/send").unwrap_or(trimmed)
    }
}

#[async_trait]
impl ReportSender for MessagingClient {
    async fn send(&self, channel: &str, text: &str) -> Result<()> {
        let payload = SendMessageRequest { number: channel, body: text };
        let request = self
            .http_client
            .request(Method::POST, &self.api_url)
            .bearer_auth(&self.token)
            .json(&payload);

        debug!(channel, chars = text.chars().count(), "Sending message");
        let response = self
            .http_client
            .send(request)
            .await
            .map_err(|e| SalesDigestError::Delivery(format!("{channel}: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(SalesDigestError::Delivery(format!(
                "{channel}: HTTP {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        info!(channel, "Message accepted by messaging API");
        Ok(())
    }

    async fn check_connection(&self) -> Result<bool> {
        let url = self.probe_url();
        let request = self.probe_client.request(Method::GET, url).bearer_auth(&self.token);

        match self.probe_client.send(request).await {
            Ok(response) => {
                let status = response.status();
                let reachable = matches!(status, StatusCode::OK | StatusCode::NOT_FOUND);
                debug!(url, status = status.as_u16(), reachable, "Messaging API probe");
                Ok(reachable)
            }
            Err(SalesDigestError::Network(msg)) => {
                warn!(url, error = %msg, "Messaging API probe failed: network error");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
