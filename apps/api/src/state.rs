use std::sync::Arc;

use crate::analysis::dispatcher::AnalysisDispatcher;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<AnalysisDispatcher>,
    pub config: Config,
}
