//! Region codes and region-decorated business units.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::records::BusinessUnitRecord;
use crate::constants::UNKNOWN_REGION;

/// Two-letter geographic code (e.g. `CE`), or the `UNKNOWN` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCode(String);

impl RegionCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The sentinel assigned to business units without a region mapping.
    pub fn unknown() -> Self {
        Self(UNKNOWN_REGION.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_REGION
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A business unit together with the region resolved for it.
///
/// Built once per run, right after the units are fetched; the fetched
/// record is kept untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedBusinessUnit {
    pub unit: BusinessUnitRecord,
    pub region: RegionCode,
}

impl DecoratedBusinessUnit {
    pub fn new(unit: BusinessUnitRecord, region: RegionCode) -> Self {
        Self { unit, region }
    }

    pub fn business_unit_code(&self) -> Option<&str> {
        self.unit.business_unit_code.as_deref()
    }

    /// Short code, or an empty string when the ERP sent none.
    pub fn short_code(&self) -> &str {
        self.unit.short_code.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sentinel_is_detected() {
        assert!(RegionCode::unknown().is_unknown());
        assert!(!RegionCode::from("CE").is_unknown());
        assert_eq!(RegionCode::unknown().as_str(), "UNKNOWN");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&RegionCode::from("PI")).unwrap();
        assert_eq!(json, "\"PI\"");
    }
}
