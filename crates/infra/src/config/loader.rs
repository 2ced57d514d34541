//! Configuration loader
//!
//! Loads application configuration from a config file, then lets environment
//! variables override individual settings.
//!
//! ## Loading Strategy
//! 1. Load `.env` from the working directory (if present)
//! 2. Read the explicit config file, or probe the standard locations
//! 3. Fall back to built-in defaults when no file exists
//! 4. Apply environment overrides
//! 5. Reject the configuration if any required secret is still missing
//!
//! ## Environment Variables
//! - `SALESDIGEST_API_BASE_URL`: ERP integration API base URL
//! - `SALESDIGEST_API_AUTHORIZATION`: `Authorization` header for the token request
//! - `SALESDIGEST_API_USERNAME`: ERP API user
//! - `SALESDIGEST_API_PASSWORD`: ERP API password
//! - `SALESDIGEST_MESSAGING_URL`: messaging API send endpoint
//! - `SALESDIGEST_MESSAGING_TOKEN`: messaging API bearer token
//! - `SALESDIGEST_LOG_FILE`: log file path (empty disables file logging)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./salesdigest.json` or `./salesdigest.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use salesdigest_domain::{Config, Result, SalesDigestError};

pub const ENV_API_BASE_URL: &str = "SALESDIGEST_API_BASE_URL";
pub const ENV_API_AUTHORIZATION: &str = "SALESDIGEST_API_AUTHORIZATION";
pub const ENV_API_USERNAME: &str = "SALESDIGEST_API_USERNAME";
pub const ENV_API_PASSWORD: &str = "SALESDIGEST_API_PASSWORD";
pub const ENV_MESSAGING_URL: &str = "SALESDIGEST_MESSAGING_URL";
pub const ENV_MESSAGING_TOKEN: &str = "SALESDIGEST_MESSAGING_TOKEN";
pub const ENV_LOG_FILE: &str = "SALESDIGEST_LOG_FILE";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["config.json", "config.toml", "salesdigest.json", "salesdigest.toml"];

/// Load configuration for a run
///
/// Reads `path` when given, otherwise the first probed config file, or the
/// defaults when nothing is found. Environment overrides are applied last.
///
/// # Errors
/// Returns `SalesDigestError::Config` if:
/// - The explicit file does not exist or cannot be parsed
/// - A required secret is missing after all sources were applied
pub fn load(path: Option<PathBuf>) -> Result<Config> {
    report_dotenv(dotenvy::dotenv());

    let mut config = match path.or_else(probe_config_paths) {
        Some(path) => load_from_file(&path)?,
        None => {
            tracing::info!("No config file found, using defaults and environment");
            Config::default()
        }
    };

    apply_env_overrides(&mut config);
    validate(&config)?;

    tracing::info!(
        erp = %config.erp.base_url,
        messaging = %config.messaging.api_url,
        regions = config.regions.len(),
        destinations = config.destinations.len(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Log the outcome of loading `.env`; a missing file is not worth a line.
fn report_dotenv(result: dotenvy::Result<PathBuf>) {
    match result {
        Ok(env_path) => tracing::debug!(path = %env_path.display(), "Loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "Ignoring unreadable .env file"),
    }
}

/// Load configuration from a file
///
/// Supports both JSON and TOML formats (detected by file extension).
/// No environment overrides or secret checks are applied here.
///
/// # Errors
/// Returns `SalesDigestError::Config` if the file does not exist, cannot be
/// read, or its format is invalid.
pub fn load_from_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(SalesDigestError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| SalesDigestError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, path)
}

/// Override file values with any `SALESDIGEST_*` variables that are set.
pub fn apply_env_overrides(config: &mut Config) {
    if let Some(url) = env_var(ENV_API_BASE_URL) {
        config.erp.base_url = url;
    }
    if let Some(authorization) = env_var(ENV_API_AUTHORIZATION) {
        config.erp.authorization = Some(authorization);
    }
    if let Some(username) = env_var(ENV_API_USERNAME) {
        config.erp.username = Some(username);
    }
    if let Some(password) = env_var(ENV_API_PASSWORD) {
        config.erp.password = Some(password);
    }
    if let Some(url) = env_var(ENV_MESSAGING_URL) {
        config.messaging.api_url = url;
    }
    if let Some(token) = env_var(ENV_MESSAGING_TOKEN) {
        config.messaging.token = Some(token);
    }

    // Present-but-empty disables file logging.
    if let Ok(file) = std::env::var(ENV_LOG_FILE) {
        let file = file.trim();
        config.logging.file = (!file.is_empty()).then(|| file.to_string());
    }
}

/// Check that every required secret is present
///
/// # Errors
/// Returns one `SalesDigestError::Config` naming all missing settings.
pub fn validate(config: &Config) -> Result<()> {
    let missing = config.missing_secrets();
    if missing.is_empty() {
        return Ok(());
    }

    Err(SalesDigestError::Config(format!(
        "Missing required settings: {} (set them in the config file or via {}, {}, {}, {})",
        missing.join(", "),
        ENV_API_AUTHORIZATION,
        ENV_API_USERNAME,
        ENV_API_PASSWORD,
        ENV_MESSAGING_TOKEN,
    )))
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `SalesDigestError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SalesDigestError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SalesDigestError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(SalesDigestError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the working directory, its parents (up to 2 levels) and the
/// executable's directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| {
            let mut candidates: Vec<PathBuf> =
                CONFIG_FILE_NAMES.iter().map(|name| root.join(name)).collect();
            candidates.extend(["..", "../.."].iter().flat_map(|up| {
                [root.join(up).join("config.json"), root.join(up).join("config.toml")]
            }));
            candidates
        })
        .find(|path| path.is_file())
}

/// Non-empty, trimmed environment variable.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
