//! Derived, in-memory sale views produced during a digest run.

use serde::{Deserialize, Serialize};

use super::amount::RawAmount;
use super::region::RegionCode;

/// A sale matched to both its agent and its business unit.
///
/// Value and volume are carried unparsed; coercion happens at aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedSale {
    pub business_unit_short_code: String,
    pub agent_display_name: String,
    pub value: Option<RawAmount>,
    pub volume: Option<RawAmount>,
    pub issue_date: String,
    pub region: RegionCode,
    pub business_unit_code: String,
    pub agent_code: String,
}

/// Running totals for one agent inside one region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentAggregate {
    pub total_value: f64,
    pub total_volume: f64,
    pub order_count: u32,
}

impl AgentAggregate {
    /// Add one order's (already coerced) value and volume.
    pub fn record(&mut self, value: f64, volume: f64) {
        self.total_value += value;
        self.total_volume += volume;
        self.order_count += 1;
    }
}
