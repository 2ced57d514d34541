//! Configuration structures
//!
//! The shape mirrors the config file (JSON or TOML). Secrets are usually left
//! out of the file and supplied through the environment; see the infra
//! loader for the override rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ERP_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL,
    DEFAULT_MESSAGING_URL, DEFAULT_REGION_TABLE,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub erp: ErpConfig,
    #[serde(default)]
    pub messaging: MessagingConfig,
    /// Business unit short code -> region code.
    #[serde(default = "default_region_table")]
    pub regions: BTreeMap<String, String>,
    /// Region code -> delivery destination.
    #[serde(default)]
    pub destinations: BTreeMap<String, Destination>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            erp: ErpConfig::default(),
            messaging: MessagingConfig::default(),
            regions: default_region_table(),
            destinations: BTreeMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Names of required secrets that are still unset.
    pub fn missing_secrets(&self) -> Vec<&'static str> {
        let checks = [
            ("erp.authorization", &self.erp.authorization),
            ("erp.username", &self.erp.username),
            ("erp.password", &self.erp.password),
            ("messaging.token", &self.messaging.token),
        ];

        checks
            .into_iter()
            .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
            .map(|(name, _)| name)
            .collect()
    }
}

/// ERP integration API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErpConfig {
    #[serde(default = "default_erp_base_url")]
    pub base_url: String,
    /// Value sent verbatim in the `Authorization` header of the token request.
    #[serde(default)]
    pub authorization: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ErpConfig {
    fn default() -> Self {
        Self {
            base_url: default_erp_base_url(),
            authorization: None,
            username: None,
            password: None,
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Messaging API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingConfig {
    #[serde(default = "default_messaging_url")]
    pub api_url: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            api_url: default_messaging_url(),
            token: None,
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Where a region's report is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Channel identifier understood by the messaging API (e.g. a phone
    /// number or group id).
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Destination {
    /// Display name for the report header, `Grupo <REGION>` when unset.
    pub fn display_name(&self, region: &str) -> String {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => format!("Grupo {region}"),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file path; `None` logs to stdout only.
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { file: default_log_file(), level: default_log_level() }
    }
}

fn default_region_table() -> BTreeMap<String, String> {
    DEFAULT_REGION_TABLE
        .iter()
        .map(|(short_code, region)| ((*short_code).to_string(), (*region).to_string()))
        .collect()
}

fn default_erp_base_url() -> String {
    DEFAULT_ERP_BASE_URL.to_string()
}

fn default_messaging_url() -> String {
    DEFAULT_MESSAGING_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_log_file() -> Option<String> {
    Some(DEFAULT_LOG_FILE.to_string())
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
