//! Application state management

use std::sync::Arc;

use veranda_core::{Config, Result};
use veranda_store::LeadRepository;

use crate::notifier::{LeadNotifier, LogNotifier};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Lead collections, backed by the JSON data file
    pub repository: Arc<LeadRepository>,
    /// New-lead notification sink
    pub notifier: Arc<dyn LeadNotifier>,
}

impl AppState {
    /// Create new application state, opening the lead repository
    ///
    /// # Errors
    ///
    /// Returns an error if the leads data file exists but cannot be read
    /// or parsed.
    pub fn new(config: Config) -> Result<Self> {
        let repository = Arc::new(LeadRepository::open(config.storage.leads_path())?);

        Ok(Self {
            config,
            repository,
            notifier: Arc::new(LogNotifier),
        })
    }

    /// Replace the notification sink
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn LeadNotifier>) -> Self {
        self.notifier = notifier;
        self
    }
}
