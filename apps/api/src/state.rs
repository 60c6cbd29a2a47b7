use std::sync::Arc;

use crate::reconstruction::pipeline::Pipeline;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data: every request builds its own prompt and report.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}
