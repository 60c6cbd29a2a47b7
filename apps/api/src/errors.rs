use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::render::{render_page, PageView};
use crate::search_client::SearchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`;
/// the response is the index page rendered in its error state.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Completion service error: {0}")]
    CompletionService(#[from] LlmError),

    #[error("Search service error: {0}")]
    SearchService(#[from] SearchError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Status code and the short message shown to the user.
    /// Upstream details stay in the logs.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The service is not configured correctly".to_string(),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::CompletionService(e) => {
                tracing::error!("Completion service error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The language model could not reconstruct this fragment".to_string(),
                )
            }
            AppError::SearchService(e) => {
                tracing::error!("Search service error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The search service failed while looking up context".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let page = render_page(&PageView {
            error: Some(&message),
            ..PageView::default()
        });
        (status, Html(page)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request_with_message() {
        let err = AppError::Validation("fragment is required".to_string());
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "fragment is required");
    }

    #[test]
    fn test_search_failure_maps_to_bad_gateway() {
        let err = AppError::SearchService(SearchError::Api {
            status: 500,
            message: "backend exploded".to_string(),
        });
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(!message.contains("backend exploded"));
    }

    #[test]
    fn test_completion_failure_display_includes_cause() {
        let err = AppError::from(LlmError::EmptyContent);
        assert!(err.to_string().contains("empty content"));
    }

    #[test]
    fn test_configuration_error_is_internal() {
        let (status, _) = AppError::Configuration("no key".into()).status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
