//! Application state for the web layer.

use std::sync::Arc;

use crate::trip::TripOrchestrator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The trip pipeline orchestrator.
    pub orchestrator: Arc<TripOrchestrator>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(orchestrator: TripOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}
