//! Per-region delivery outcomes and the end-of-run tally.

use serde::{Deserialize, Serialize};

use super::region::RegionCode;
use super::report_date::ReportDate;
use crate::impl_domain_status_display;

/// Result of one outbound report send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

impl_domain_status_display!(DeliveryStatus {
    Sent => "sent",
    Failed => "failed",
});

/// Outcome of delivering one region's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    pub region: RegionCode,
    pub destination: String,
    pub status: DeliveryStatus,
    pub error: Option<String>,
}

impl DeliveryOutcome {
    pub fn sent(region: RegionCode, destination: impl Into<String>) -> Self {
        Self { region, destination: destination.into(), status: DeliveryStatus::Sent, error: None }
    }

    pub fn failed(
        region: RegionCode,
        destination: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            region,
            destination: destination.into(),
            status: DeliveryStatus::Failed,
            error: Some(error.into()),
        }
    }

    pub fn is_sent(&self) -> bool {
        self.status == DeliveryStatus::Sent
    }
}

/// Summary of a complete digest run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub report_date: ReportDate,
    pub sales_fetched: usize,
    pub sales_joined: usize,
    /// Regions for which a report was rendered (the unknown region excluded).
    pub regions_reported: Vec<RegionCode>,
    /// Regions that had a report but no configured destination.
    pub regions_skipped: Vec<RegionCode>,
    pub deliveries: Vec<DeliveryOutcome>,
}

impl RunSummary {
    pub fn sent_count(&self) -> usize {
        self.deliveries.iter().filter(|outcome| outcome.is_sent()).count()
    }

    /// A run succeeds only when every attempted delivery was sent.
    pub fn is_success(&self) -> bool {
        self.deliveries.iter().all(DeliveryOutcome::is_sent)
    }
}
