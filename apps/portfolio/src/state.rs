use std::sync::Arc;

use crate::config::Config;
use crate::portfolio::Portfolio;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Site content, parsed once at startup and never mutated.
    pub portfolio: Arc<Portfolio>,
    pub config: Config,
}

impl AppState {
    pub fn new(portfolio: Portfolio, config: Config) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
            config,
        }
    }
}
