//! Application state management

use std::sync::Arc;

use crate::config::Config;

/// Shared application state
///
/// Carries the startup configuration only. Term lists and documents are
/// request-local; nothing mutable is shared across requests.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
