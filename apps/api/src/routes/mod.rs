pub mod index;

use axum::{routing::get, Router};

use crate::state::AppState;

/// One route: GET renders the empty form, POST runs the pipeline.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::handle_form).post(index::handle_reconstruct))
        .with_state(state)
}
