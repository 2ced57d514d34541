//! Port interfaces for the digest run
//!
//! These traits define the boundaries between the core pipeline and the
//! ERP / messaging infrastructure implementations.

use async_trait::async_trait;
use salesdigest_domain::{AgentRecord, BusinessUnitRecord, ReportDate, Result, SalesRecord};

/// Source of the three ERP datasets a run needs.
#[async_trait]
pub trait SalesDataSource: Send + Sync {
    /// Acquire (or renew) the credentials used by the fetch calls.
    async fn authenticate(&self) -> Result<()>;

    /// Sales issued on `date`.
    async fn fetch_sales(&self, date: &ReportDate) -> Result<Vec<SalesRecord>>;

    /// Active sales representatives.
    async fn fetch_agents(&self) -> Result<Vec<AgentRecord>>;

    /// Active business units.
    async fn fetch_business_units(&self) -> Result<Vec<BusinessUnitRecord>>;
}

/// Outbound channel for rendered reports.
#[async_trait]
pub trait ReportSender: Send + Sync {
    /// Send `text` to `channel`. One attempt, no retry.
    async fn send(&self, channel: &str, text: &str) -> Result<()>;

    /// Lightweight reachability probe. `Ok(false)` means unreachable.
    async fn check_connection(&self) -> Result<bool>;
}
