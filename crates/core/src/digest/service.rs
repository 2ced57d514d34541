//! Digest service - core business logic
//!
//! One run: authenticate, fetch the three datasets concurrently, decorate
//! business units with their region, then join, group, aggregate and format
//! in memory before handing one report per region to the sender.

use std::collections::BTreeMap;
use std::sync::Arc;

use salesdigest_domain::{
    AgentRecord, BusinessUnitRecord, DeliveryOutcome, Destination, RegionCode, ReportDate,
    Result, RunSummary, SalesRecord,
};
use tracing::{error, info, instrument, warn};

use super::ports::{ReportSender, SalesDataSource};
use crate::pipeline::grouping::group_by_region;
use crate::pipeline::join::join_records;
use crate::pipeline::region::RegionResolver;
use crate::pipeline::report::{no_sales_notice, with_header};
use crate::pipeline::{build_region_reports, RegionReport};

/// Regional sales digest service
pub struct DigestService {
    source: Arc<dyn SalesDataSource>,
    sender: Arc<dyn ReportSender>,
    resolver: RegionResolver,
    destinations: BTreeMap<String, Destination>,
}

/// Outcome of a connectivity check against both collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectivityReport {
    pub authenticated: bool,
    pub sales: Option<usize>,
    pub agents: Option<usize>,
    pub business_units: Option<usize>,
    pub messaging_reachable: bool,
}

impl ConnectivityReport {
    pub fn is_healthy(&self) -> bool {
        self.authenticated
            && self.sales.is_some()
            && self.agents.is_some()
            && self.business_units.is_some()
            && self.messaging_reachable
    }
}

/// Reports prepared from one set of fetched data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedDigest {
    pub sales_joined: usize,
    pub reports: Vec<RegionReport>,
}

impl DigestService {
    /// Create a new digest service without destinations.
    pub fn new(
        source: Arc<dyn SalesDataSource>,
        sender: Arc<dyn ReportSender>,
        resolver: RegionResolver,
    ) -> Self {
        Self { source, sender, resolver, destinations: BTreeMap::new() }
    }

    /// Replace the region -> destination table.
    pub fn with_destinations(mut self, destinations: BTreeMap<String, Destination>) -> Self {
        self.destinations = destinations;
        self
    }

    /// Add or replace a single region's destination.
    pub fn with_destination(mut self, region: impl Into<String>, destination: Destination) -> Self {
        self.destinations.insert(region.into(), destination);
        self
    }

    /// Execute a complete digest run for `date`.
    ///
    /// # Errors
    /// Returns the first authentication or fetch failure; nothing is
    /// delivered in that case. Delivery failures never surface here, they
    /// are recorded in the returned [`RunSummary`].
    #[instrument(skip(self), fields(date = %date))]
    pub async fn run(&self, date: &ReportDate) -> Result<RunSummary> {
        info!("Starting sales digest run");

        self.source.authenticate().await?;
        let (sales, agents, units) = tokio::try_join!(
            self.source.fetch_sales(date),
            self.source.fetch_agents(),
            self.source.fetch_business_units(),
        )?;
        info!(
            sales = sales.len(),
            agents = agents.len(),
            business_units = units.len(),
            "Source data fetched"
        );

        let sales_fetched = sales.len();
        let prepared = self.prepare(&sales, &agents, units);

        self.probe_sender().await;

        let mut deliveries = Vec::new();
        let mut regions_skipped = Vec::new();

        if prepared.sales_joined == 0 {
            warn!("No valid sales to report, notifying every destination");
            let notice = no_sales_notice();
            for region in self.destinations.keys() {
                let region = RegionCode::new(region.as_str());
                if let Some(outcome) = self.deliver(&region, &notice, date).await {
                    deliveries.push(outcome);
                }
            }
        } else {
            for report in &prepared.reports {
                match self.deliver(&report.region, &report.text, date).await {
                    Some(outcome) => deliveries.push(outcome),
                    None => regions_skipped.push(report.region.clone()),
                }
            }
        }

        let summary = RunSummary {
            report_date: *date,
            sales_fetched,
            sales_joined: prepared.sales_joined,
            regions_reported: prepared.reports.iter().map(|r| r.region.clone()).collect(),
            regions_skipped,
            deliveries,
        };
        log_summary(&summary);

        Ok(summary)
    }

    /// Run the pure pipeline over already fetched data.
    pub fn prepare(
        &self,
        sales: &[SalesRecord],
        agents: &[AgentRecord],
        units: Vec<BusinessUnitRecord>,
    ) -> PreparedDigest {
        let units = self.resolver.decorate(units);
        let joined = join_records(sales, agents, &units);
        let sales_joined = joined.len();

        if joined.is_empty() {
            return PreparedDigest { sales_joined, reports: Vec::new() };
        }

        let buckets = group_by_region(joined);
        PreparedDigest { sales_joined, reports: build_region_reports(&buckets) }
    }

    /// Exercise both collaborators without delivering anything.
    #[instrument(skip(self), fields(date = %date))]
    pub async fn check_connectivity(&self, date: &ReportDate) -> ConnectivityReport {
        let mut report = ConnectivityReport::default();

        match self.source.authenticate().await {
            Ok(()) => {
                report.authenticated = true;
                info!("ERP authentication: OK");

                report.sales = count_or_log("sales", self.source.fetch_sales(date).await);
                report.agents = count_or_log("agents", self.source.fetch_agents().await);
                report.business_units =
                    count_or_log("business_units", self.source.fetch_business_units().await);
            }
            Err(err) => error!(error = %err, "ERP authentication failed"),
        }

        report.messaging_reachable = match self.sender.check_connection().await {
            Ok(reachable) => reachable,
            Err(err) => {
                error!(error = %err, "Messaging connectivity check failed");
                false
            }
        };
        if report.messaging_reachable {
            info!("Messaging API: OK");
        } else {
            error!("Messaging API: unreachable");
        }

        report
    }

    async fn probe_sender(&self) {
        match self.sender.check_connection().await {
            Ok(true) => {}
            Ok(false) => warn!("Messaging API probe failed, attempting deliveries anyway"),
            Err(err) => {
                warn!(error = %err, "Messaging API probe errored, attempting deliveries anyway");
            }
        }
    }

    /// Deliver one region's text. `None` means no destination is configured.
    async fn deliver(
        &self,
        region: &RegionCode,
        body: &str,
        date: &ReportDate,
    ) -> Option<DeliveryOutcome> {
        let Some(destination) = self.destinations.get(region.as_str()) else {
            warn!(region = %region, "No destination configured for region, skipping");
            return None;
        };

        let channel = destination.channel.trim();
        if channel.is_empty() {
            error!(region = %region, "Destination has no channel configured");
            return Some(DeliveryOutcome::failed(
                region.clone(),
                channel,
                "destination channel is not configured",
            ));
        }

        let message = with_header(&destination.display_name(region.as_str()), date, body);
        match self.sender.send(channel, &message).await {
            Ok(()) => {
                info!(region = %region, channel, "Report delivered");
                Some(DeliveryOutcome::sent(region.clone(), channel))
            }
            Err(err) => {
                error!(region = %region, channel, error = %err, "Report delivery failed");
                Some(DeliveryOutcome::failed(region.clone(), channel, err.to_string()))
            }
        }
    }
}

fn count_or_log<T>(dataset: &str, result: Result<Vec<T>>) -> Option<usize> {
    match result {
        Ok(records) => {
            info!(dataset, records = records.len(), "Fetch: OK");
            Some(records.len())
        }
        Err(err) => {
            error!(dataset, error = %err, "Fetch failed");
            None
        }
    }
}

fn log_summary(summary: &RunSummary) {
    for outcome in &summary.deliveries {
        info!(
            region = %outcome.region,
            channel = %outcome.destination,
            status = %outcome.status,
            error = outcome.error.as_deref().unwrap_or(""),
            "Delivery"
        );
    }

    info!(
        sales_fetched = summary.sales_fetched,
        sales_joined = summary.sales_joined,
        regions_reported = summary.regions_reported.len(),
        regions_skipped = summary.regions_skipped.len(),
        delivered = summary.sent_count(),
        attempted = summary.deliveries.len(),
        "Run summary"
    );

    if summary.is_success() {
        info!("Digest run completed successfully");
    } else {
        warn!("Digest run completed with delivery failures");
    }
}
