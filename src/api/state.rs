//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::store::PayrollRepository;

/// Shared application state.
///
/// Contains the engine configuration and the repository implementation
/// shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<EngineConfig>,
    repo: Arc<dyn PayrollRepository>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: EngineConfig, repo: Arc<dyn PayrollRepository>) -> Self {
        Self {
            config: Arc::new(config),
            repo,
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the repository.
    pub fn repo(&self) -> &dyn PayrollRepository {
        self.repo.as_ref()
    }
}
