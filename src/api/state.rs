//! Application state for the attendance compliance API.

use std::sync::Arc;

use crate::config::{ConfigLoader, WorkPolicy};

/// Shared application state.
///
/// Holds the loaded policy configuration, which is immutable for the life
/// of the server.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Shorthand for the loaded work policy.
    pub fn policy(&self) -> &WorkPolicy {
        self.config.policy()
    }
}
