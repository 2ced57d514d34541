//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Date format used by the ERP filters and by report headers (`DD/MM/YYYY`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Region assigned to business units whose short code has no mapping.
pub const UNKNOWN_REGION: &str = "UNKNOWN";

/// Built-in business unit short code -> region table.
pub const DEFAULT_REGION_TABLE: &[(&str, &str)] = &[
    ("LSO", "CE"),
    ("LFO", "CE"),
    ("LTE", "PI"),
    ("LTI", "PI"),
    ("LSU", "MA"),
    ("LCA", "PB"),
    ("LPA", "RN"),
    ("LIM", "MA"),
];

// Endpoint defaults
pub const DEFAULT_ERP_BASE_URL: &str = "http://localhost:8087/ws";
pub const DEFAULT_MESSAGING_URL: &str = "http://localhost:8080/api/messages/send";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// Logging defaults
pub const DEFAULT_LOG_FILE: &str = "salesdigest.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
