//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;

use crate::analysis::dispatcher::AnalysisResult;
use crate::analysis::mode::{AnalysisMode, UnknownMode};
use crate::document::UploadedDocument;
use crate::errors::AppError;
use crate::state::AppState;

pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
pub struct ModeSummary {
    pub mode: AnalysisMode,
    pub title: &'static str,
    pub action: &'static str,
}

/// GET /api/v1/analyses/modes
pub async fn handle_list_modes() -> Json<Vec<ModeSummary>> {
    Json(
        AnalysisMode::ALL
            .into_iter()
            .map(|mode| ModeSummary {
                mode,
                title: mode.title(),
                action: mode.action_label(),
            })
            .collect(),
    )
}

/// POST /api/v1/analyses/:mode
///
/// Multipart form with a `job_description` text field and a `resume` file.
/// The resume part's `Content-Type` is trusted as its declared media type.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mode: AnalysisMode = mode
        .parse()
        .map_err(|e: UnknownMode| AppError::NotFound(e.to_string()))?;

    let mut job_description: Option<String> = None;
    let mut document: Option<UploadedDocument> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            JOB_DESCRIPTION_FIELD => {
                job_description = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read job description: {e}"))
                })?);
            }
            RESUME_FIELD => {
                let file_name = field.file_name().map(str::to_string);
                let media_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read resume: {e}")))?;
                // A file input left empty still submits a part with no name and no bytes.
                if bytes.is_empty() && file_name.as_deref().unwrap_or_default().is_empty() {
                    continue;
                }
                document = Some(UploadedDocument {
                    bytes,
                    media_type,
                    file_name,
                });
            }
            _ => {
                // Unknown fields are ignored, but must still be read in full.
                field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read field '{name}': {e}"))
                })?;
            }
        }
    }

    let result = state
        .dispatcher
        .analyze(mode, document, job_description.as_deref())
        .await?;

    Ok(Json(result))
}
