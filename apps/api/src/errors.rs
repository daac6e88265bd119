use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::dispatcher::AnalysisError;
use crate::document::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant becomes an inline error message; none takes the process down.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Analysis(e) => {
                let (status, code) = match e {
                    AnalysisError::MissingInput(_) => (StatusCode::BAD_REQUEST, "MISSING_INPUT"),
                    AnalysisError::Extraction(ExtractError::UnsupportedFormat { .. }) => {
                        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "UNSUPPORTED_FORMAT")
                    }
                    AnalysisError::Extraction(ExtractError::DecodeFailure(_)) => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "DECODE_FAILURE")
                    }
                    AnalysisError::Extraction(ExtractError::Malformed { .. }) => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "MALFORMED_DOCUMENT")
                    }
                    AnalysisError::EmptyExtraction => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_EXTRACTION")
                    }
                    AnalysisError::Generation(err) => {
                        tracing::error!("Generation service error: {err}");
                        (StatusCode::BAD_GATEWAY, "GENERATION_FAILED")
                    }
                    AnalysisError::ExtractionTask(err) => {
                        tracing::error!("Extraction task error: {err}");
                        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                    }
                };
                (status, code, e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
