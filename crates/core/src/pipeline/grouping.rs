//! Stable partition of joined sales by region.

use std::collections::HashMap;

use salesdigest_domain::{JoinedSale, RegionCode};
use tracing::info;

/// Joined sales partitioned by region.
///
/// Regions iterate in the order they were first seen; each bucket keeps the
/// relative order of its sales. The unknown region is kept here and filtered
/// out by callers that render or deliver reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionBuckets {
    buckets: Vec<(RegionCode, Vec<JoinedSale>)>,
}

impl RegionBuckets {
    /// Sales for one region, if any were grouped under it.
    pub fn get(&self, region: &RegionCode) -> Option<&[JoinedSale]> {
        self.buckets
            .iter()
            .find(|(code, _)| code == region)
            .map(|(_, sales)| sales.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RegionCode, &[JoinedSale])> {
        self.buckets.iter().map(|(region, sales)| (region, sales.as_slice()))
    }

    pub fn regions(&self) -> impl Iterator<Item = &RegionCode> {
        self.buckets.iter().map(|(region, _)| region)
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of sales across all buckets.
    pub fn total_sales(&self) -> usize {
        self.buckets.iter().map(|(_, sales)| sales.len()).sum()
    }
}

/// Group joined sales by their region. No sale is dropped.
pub fn group_by_region(joined: Vec<JoinedSale>) -> RegionBuckets {
    let mut positions: HashMap<RegionCode, usize> = HashMap::new();
    let mut buckets: Vec<(RegionCode, Vec<JoinedSale>)> = Vec::new();

    for sale in joined {
        let index = *positions.entry(sale.region.clone()).or_insert_with(|| {
            buckets.push((sale.region.clone(), Vec::new()));
            buckets.len() - 1
        });
        buckets[index].1.push(sale);
    }

    info!(regions = buckets.len(), "Sales grouped by region");
    RegionBuckets { buckets }
}
