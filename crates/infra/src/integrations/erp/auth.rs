//! ERP OAuth2 password-grant authentication

use async_trait::async_trait;
use reqwest::Method;
use salesdigest_domain::{Result, SalesDigestError};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::http::HttpClient;

/// Provides bearer tokens for the ERP integration API.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Retrieve a bearer token, acquiring one if none is held yet.
    async fn access_token(&self) -> Result<String>;
}

/// Password-grant token source for `{base}/oauth/token`.
///
/// The first successful token is kept and reused for every later call.
pub struct PasswordGrantAuth {
    http_client: HttpClient,
    token_url: String,
    authorization: String,
    username: String,
    password: String,
    token: Mutex<Option<String>>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

impl PasswordGrantAuth {
    /// # Arguments
    /// * `base_url` - ERP API base URL (the token endpoint is appended)
    /// * `authorization` - value for the token request's `Authorization` header
    pub fn new(
        http_client: HttpClient,
        base_url: &str,
        authorization: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            token_url: format!("{}/oauth/token", base_url.trim_end_matches('/')),
            authorization: authorization.into(),
            username: username.into(),
            password: password.into(),
            token: Mutex::new(None),
        }
    }

    async fn request_token(&self) -> Result<String> {
        let form = [
            ("grant_type", "password"),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ];
        let request = self
            .http_client
            .request(Method::POST, &self.token_url)
            .header("Authorization", &self.authorization)
            .form(&form);

        let response = self
            .http_client
            .send(request)
            .await
            .map_err(|e| SalesDigestError::Auth(format!("Token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SalesDigestError::Auth(format!(
                "Token request rejected (HTTP {}): {}",
                status.as_u16(),
                body.trim()
            )));
        }

        let payload: TokenResponse = response
            .json()
            .await
            .map_err(|e| SalesDigestError::Auth(format!("Invalid token response: {e}")))?;

        payload
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| SalesDigestError::Auth("Token response missing access_token".into()))
    }
}

#[async_trait]
impl AccessTokenProvider for PasswordGrantAuth {
    async fn access_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            debug!("Reusing cached ERP access token");
            return Ok(token.clone());
        }

        let token = self.request_token().await?;
        info!("ERP access token acquired");
        *cached = Some(token.clone());
        Ok(token)
    }
}
