//! Domain types and models
//!
//! Raw ERP records live in [`records`]; everything derived during a digest run
//! (decorated units, joined sales, per-agent aggregates, delivery outcomes)
//! lives in the sibling modules.

pub mod amount;
pub mod delivery;
pub mod records;
pub mod region;
pub mod report_date;
pub mod sale;

pub use amount::RawAmount;
pub use delivery::{DeliveryOutcome, DeliveryStatus, RunSummary};
pub use records::{AgentRecord, BusinessUnitRecord, SalesRecord};
pub use region::{DecoratedBusinessUnit, RegionCode};
pub use report_date::ReportDate;
pub use sale::{AgentAggregate, JoinedSale};
