//! ERP integration client for the sales, agent and business unit datasets

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use salesdigest_core::SalesDataSource;
use salesdigest_domain::{
    AgentRecord, BusinessUnitRecord, ErpConfig, ReportDate, Result, SalesDigestError, SalesRecord,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use super::auth::{AccessTokenProvider, PasswordGrantAuth};
use crate::http::HttpClient;

const SALES_RESOURCE: &str = "pedido";
const AGENTS_RESOURCE: &str = "representante";
const BUSINESS_UNITS_RESOURCE: &str = "empresa";

const SALES_FIELDS: &[&str] = &[
    "CDEMPRESA",
    "CDREPRESENTANTE",
    "CDUSUARIOEMISSAO",
    "FLORIGEMPEDIDO",
    "CDTIPOPAGAMENTO",
    "DTEMISSAO",
    "VLTOTALPEDIDO",
    "VLVOLUMEPEDIDO",
    "FLCONTROLEERP",
];
const AGENT_FIELDS: &[&str] = &["CDEMPRESA", "CDREPRESENTANTE", "NMREPRESENTANTE", "FLATIVO"];
const BUSINESS_UNIT_FIELDS: &[&str] = &["CDEMPRESA", "NMEMPRESA", "NMEMPRESACURTO"];

/// Client for `{base}/integration/v1/fetch/*`
pub struct ErpClient {
    base_url: String,
    http_client: HttpClient,
    access_token_provider: Arc<dyn AccessTokenProvider>,
}

/// Body of every fetch call: the columns wanted and equality filters.
#[derive(Debug, Serialize)]
struct FetchRequest<'a> {
    fields: &'a [&'a str],
    filters: BTreeMap<&'a str, String>,
}

impl ErpClient {
    /// Create a client that authenticates with the configured password grant.
    ///
    /// # Errors
    /// Returns `SalesDigestError::Config` when a credential is missing, or
    /// the HTTP client cannot be built.
    pub fn new(config: &ErpConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let required = |name: &str, value: &Option<String>| {
            value.clone().ok_or_else(|| SalesDigestError::Config(format!("erp.{name} is not set")))
        };
        let auth = PasswordGrantAuth::new(
            http_client.clone(),
            &config.base_url,
            required("authorization", &config.authorization)?,
            required("username", &config.username)?,
            required("password", &config.password)?,
        );

        Ok(Self::with_token_provider(config.base_url.clone(), http_client, Arc::new(auth)))
    }

    /// Create a client with a custom token provider.
    pub fn with_token_provider(
        base_url: String,
        http_client: HttpClient,
        access_token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            access_token_provider,
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &str,
        request: &FetchRequest<'_>,
    ) -> Result<Vec<T>> {
        let token = self.access_token_provider.access_token().await?;
        let endpoint = format!("{}/integration/v1/fetch/{}", self.base_url, resource);

        debug!(resource, filters = ?request.filters, "Fetching ERP dataset");
        let builder = self
            .http_client
            .request(Method::POST, &endpoint)
            .bearer_auth(token)
            .json(request);

        let response = self
            .http_client
            .send(builder)
            .await
            .map_err(|e| SalesDigestError::Fetch(format!("{resource}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SalesDigestError::Fetch(format!(
                "{resource}: HTTP {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        let records: Vec<T> = response
            .json()
            .await
            .map_err(|e| SalesDigestError::Fetch(format!("{resource}: invalid payload: {e}")))?;

        info!(resource, records = records.len(), "ERP dataset fetched");
        Ok(records)
    }
}

#[async_trait]
impl SalesDataSource for ErpClient {
    async fn authenticate(&self) -> Result<()> {
        self.access_token_provider.access_token().await.map(|_| ())
    }

    async fn fetch_sales(&self, date: &ReportDate) -> Result<Vec<SalesRecord>> {
        let request = FetchRequest {
            fields: SALES_FIELDS,
            filters: BTreeMap::from([("DTEMISSAO", date.to_string())]),
        };
        self.fetch(SALES_RESOURCE, &request).await
    }

    async fn fetch_agents(&self) -> Result<Vec<AgentRecord>> {
        let request = FetchRequest {
            fields: AGENT_FIELDS,
            filters: BTreeMap::from([
                ("FLATIVO", "S".to_string()),
                ("FLTIPOCADASTRO", "R".to_string()),
            ]),
        };
        self.fetch(AGENTS_RESOURCE, &request).await
    }

    async fn fetch_business_units(&self) -> Result<Vec<BusinessUnitRecord>> {
        let request = FetchRequest {
            fields: BUSINESS_UNIT_FIELDS,
            filters: BTreeMap::from([("FLATIVO", "S".to_string())]),
        };
        self.fetch(BUSINESS_UNITS_RESOURCE, &request).await
    }
}
