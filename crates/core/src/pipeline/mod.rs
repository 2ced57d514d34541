//! The join -> group -> aggregate -> format pipeline.
//!
//! Every stage is pure and synchronous; the digest service feeds it data that
//! has already been fetched.

pub mod aggregation;
pub mod grouping;
pub mod join;
pub mod region;
pub mod report;

use salesdigest_domain::RegionCode;
use tracing::{debug, info};

use self::aggregation::aggregate;
use self::grouping::RegionBuckets;
use self::report::format_region_report;

/// A rendered report for one known region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionReport {
    pub region: RegionCode,
    pub sales_count: usize,
    pub text: String,
}

/// Aggregate and render every known region.
///
/// The unknown region is skipped; reports follow bucket order.
pub fn build_region_reports(buckets: &RegionBuckets) -> Vec<RegionReport> {
    let reports: Vec<RegionReport> = buckets
        .iter()
        .filter(|(region, sales)| {
            if region.is_unknown() {
                debug!(sales = sales.len(), "Skipping sales without a known region");
                return false;
            }
            true
        })
        .map(|(region, sales)| {
            let text = format_region_report(&aggregate(sales));
            info!(region = %region, sales = sales.len(), "Report generated");
            RegionReport { region: region.clone(), sales_count: sales.len(), text }
        })
        .collect();

    reports
}
