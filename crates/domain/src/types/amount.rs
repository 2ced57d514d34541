//! Loosely typed monetary and volume fields.

use serde::{Deserialize, Serialize};

/// A value or volume field exactly as the ERP returned it.
///
/// The integration API is inconsistent about numeric columns: the same field
/// can arrive as a JSON number, as text (sometimes with an `R$` prefix), or
/// as something else entirely. Interpretation is left to the aggregation
/// stage; this type only preserves what was received. JSON `null` and absent
/// fields are represented by `Option::None` on the owning record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Flag(bool),
    Text(String),
    Other(serde_json::Value),
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
