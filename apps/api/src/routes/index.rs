//! Axum handlers for the index page.

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::render::{render_page, PageView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FragmentForm {
    /// May be empty, but must be present.
    pub fragment: Option<String>,
}

/// GET /
pub async fn handle_form() -> Html<String> {
    Html(render_page(&PageView::default()))
}

/// POST /
///
/// Runs the full pipeline on the submitted fragment. Failures, including an
/// undecodable form body, render the page in its error state via
/// `AppError`'s `IntoResponse`.
pub async fn handle_reconstruct(
    State(state): State<AppState>,
    form: Result<Form<FragmentForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(form) = form.map_err(|rejection| {
        AppError::Validation(format!("could not read the submitted form: {rejection}"))
    })?;

    let fragment = form
        .fragment
        .ok_or_else(|| AppError::Validation("fragment is required".to_string()))?;

    let report = state.pipeline.process(&fragment).await?;
    info!("Rendered report with {} links", report.links.len());

    Ok(Html(render_page(&PageView {
        fragment: Some(&fragment),
        report: Some(&report),
        error: None,
    })))
}
