//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use salesdigest_domain::SalesDigestError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SalesDigestError);

impl From<InfraError> for SalesDigestError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SalesDigestError> for InfraError {
    fn from(value: SalesDigestError) -> Self {
        Self(value)
    }
}

trait IntoSalesDigestError {
    fn into_salesdigest(self) -> SalesDigestError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SalesDigestError */
/* -------------------------------------------------------------------------- */

impl IntoSalesDigestError for HttpError {
    fn into_salesdigest(self) -> SalesDigestError {
        if self.is_timeout() {
            return SalesDigestError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return SalesDigestError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return SalesDigestError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return SalesDigestError::Network(format!("invalid HTTP response body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => SalesDigestError::Auth(message),
                400..=499 => SalesDigestError::InvalidInput(message),
                _ => SalesDigestError::Network(message),
            };
        }

        SalesDigestError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_salesdigest())
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn status_error(status: StatusCode) -> HttpError {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err()
    }

    #[tokio::test]
    async fn http_status_401_maps_to_auth_error() {
        let mapped: SalesDigestError =
            InfraError::from(status_error(StatusCode::UNAUTHORIZED).await).into();

        match mapped {
            SalesDigestError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_status_503_maps_to_network_error() {
        let mapped: SalesDigestError =
            InfraError::from(status_error(StatusCode::SERVICE_UNAVAILABLE).await).into();

        assert!(matches!(mapped, SalesDigestError::Network(msg) if msg.contains("503")));
    }

    #[tokio::test]
    async fn refused_connection_maps_to_network_error() {
        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get("http://127.0.0.1:9").send().await.unwrap_err();

        let mapped: SalesDigestError = InfraError::from(error).into();

        assert!(matches!(mapped, SalesDigestError::Network(_)));
    }
}
