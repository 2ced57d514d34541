//! Application context - dependency injection container

use std::sync::Arc;

use salesdigest_core::{DigestService, RegionResolver};
use salesdigest_domain::{Config, Result};
use salesdigest_infra::{ErpClient, MessagingClient};
use tracing::{info, warn};

/// Application context - holds the configured digest service
pub struct AppContext {
    pub digest: DigestService,
}

impl AppContext {
    /// Wire the ERP and messaging adapters into a [`DigestService`].
    ///
    /// # Errors
    /// Returns `SalesDigestError::Config` when a client cannot be built from
    /// the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let source = Arc::new(ErpClient::new(&config.erp)?);
        let sender = Arc::new(MessagingClient::new(&config.messaging)?);
        let resolver = RegionResolver::new(config.regions.clone());

        let mapped_regions: Vec<&String> = config.regions.values().collect();
        for region in config.destinations.keys() {
            if !mapped_regions.contains(&region) {
                warn!(region = %region, "Destination configured for a region no business unit maps to");
            }
        }
        info!(destinations = config.destinations.len(), "Application context initialised");

        let digest = DigestService::new(source, sender, resolver)
            .with_destinations(config.destinations.clone());

        Ok(Self { digest })
    }
}
