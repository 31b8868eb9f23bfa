//! Application state for the Compliance Validation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RulesLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded rule configuration.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rule configuration.
    rules: Arc<RulesLoader>,
}

impl AppState {
    /// Creates a new application state with the given rules loader.
    pub fn new(rules: RulesLoader) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Returns a reference to the rules loader.
    pub fn rules(&self) -> &RulesLoader {
        &self.rules
    }
}
