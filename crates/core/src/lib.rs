//! # SalesDigest Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The join / group / aggregate / format pipeline
//! - Port/adapter interfaces (traits) for the ERP and messaging collaborators
//! - The digest service that orchestrates one run
//!
//! ## Architecture Principles
//! - Only depends on `salesdigest-domain`
//! - No HTTP, file or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod digest;
pub mod pipeline;

// Re-export specific items to avoid ambiguity
pub use digest::ports::{ReportSender, SalesDataSource};
pub use digest::{ConnectivityReport, DigestService, PreparedDigest};
pub use pipeline::aggregation::{aggregate, coerce_value, coerce_volume};
pub use pipeline::grouping::{group_by_region, RegionBuckets};
pub use pipeline::join::join_records;
pub use pipeline::region::RegionResolver;
pub use pipeline::report::{abbreviate_name, format_region_report};
pub use pipeline::{build_region_reports, RegionReport};
