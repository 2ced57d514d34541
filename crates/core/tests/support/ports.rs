//! Mock port implementations for testing
//!
//! Provides an in-memory ERP source and a recording sender, enabling
//! deterministic run tests without network dependencies.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use salesdigest_core::{ReportSender, SalesDataSource};
use salesdigest_domain::{
    AgentRecord, BusinessUnitRecord, ReportDate, Result as DomainResult, SalesDigestError,
    SalesRecord,
};

/// In-memory mock for `SalesDataSource`.
///
/// Serves fixed datasets and can be told to fail one of the calls.
#[derive(Default, Clone)]
pub struct MockSalesDataSource {
    sales: Vec<SalesRecord>,
    agents: Vec<AgentRecord>,
    units: Vec<BusinessUnitRecord>,
    fail_auth: bool,
    fail_dataset: Option<&'static str>,
}

impl MockSalesDataSource {
    pub fn new(
        sales: Vec<SalesRecord>,
        agents: Vec<AgentRecord>,
        units: Vec<BusinessUnitRecord>,
    ) -> Self {
        Self { sales, agents, units, ..Self::default() }
    }

    pub fn failing_auth(mut self) -> Self {
        self.fail_auth = true;
        self
    }

    /// Make the named fetch (`sales`, `agents`, `business_units`) fail.
    pub fn failing_fetch(mut self, dataset: &'static str) -> Self {
        self.fail_dataset = Some(dataset);
        self
    }

    fn check(&self, dataset: &str) -> DomainResult<()> {
        if self.fail_dataset == Some(dataset) {
            return Err(SalesDigestError::Fetch(format!("{dataset}: HTTP 500")));
        }
        Ok(())
    }
}

#[async_trait]
impl SalesDataSource for MockSalesDataSource {
    async fn authenticate(&self) -> DomainResult<()> {
        if self.fail_auth {
            return Err(SalesDigestError::Auth("token request rejected".into()));
        }
        Ok(())
    }

    async fn fetch_sales(&self, _date: &ReportDate) -> DomainResult<Vec<SalesRecord>> {
        self.check("sales")?;
        Ok(self.sales.clone())
    }

    async fn fetch_agents(&self) -> DomainResult<Vec<AgentRecord>> {
        self.check("agents")?;
        Ok(self.agents.clone())
    }

    async fn fetch_business_units(&self) -> DomainResult<Vec<BusinessUnitRecord>> {
        self.check("business_units")?;
        Ok(self.units.clone())
    }
}

/// A message captured by [`RecordingSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub channel: String,
    pub text: String,
}

/// `ReportSender` that records every send and can reject given channels.
#[derive(Default, Clone)]
pub struct RecordingSender {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    rejected: HashSet<String>,
    reachable: bool,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self { reachable: true, ..Self::default() }
    }

    pub fn rejecting(mut self, channel: &str) -> Self {
        self.rejected.insert(channel.to_string());
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.reachable = false;
        self
    }

    /// Messages accepted so far, in send order.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportSender for RecordingSender {
    async fn send(&self, channel: &str, text: &str) -> DomainResult<()> {
        if self.rejected.contains(channel) {
            return Err(SalesDigestError::Delivery(format!("HTTP 500 for {channel}")));
        }
        self.sent
            .lock()
            .unwrap()
            .push(SentMessage { channel: channel.to_string(), text: text.to_string() });
        Ok(())
    }

    async fn check_connection(&self) -> DomainResult<bool> {
        Ok(self.reachable)
    }
}
