//! Analysis Dispatcher: extract → build prompt → call generation service → return text.
//!
//! Holds only immutable startup state, so one instance serves every request.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::mode::AnalysisMode;
use crate::analysis::template::{PromptCatalog, TemplateError};
use crate::config::Config;
use crate::document::{extract_text, ExtractError, UploadedDocument};
use crate::llm_client::{LlmError, TextGenerator};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Please upload the candidate resume and provide a job description (missing: {0})")]
    MissingInput(String),

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error("No text could be extracted from the uploaded resume")]
    EmptyExtraction,

    #[error("Generation service failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Text extraction task failed: {0}")]
    ExtractionTask(String),
}

/// The generation service's output, returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub mode: AnalysisMode,
    pub title: &'static str,
    pub result: String,
}

pub struct AnalysisDispatcher {
    generator: Arc<dyn TextGenerator>,
    prompts: PromptCatalog,
    model: String,
    timeout: Duration,
}

impl AnalysisDispatcher {
    /// Validates the prompt templates; fails if any is malformed.
    pub fn new(config: &Config, generator: Arc<dyn TextGenerator>) -> Result<Self, TemplateError> {
        Ok(Self {
            generator,
            prompts: PromptCatalog::new()?,
            model: config.gemini_model.clone(),
            timeout: config.generation_timeout,
        })
    }

    pub async fn analyze(
        &self,
        mode: AnalysisMode,
        document: Option<UploadedDocument>,
        job_description: Option<&str>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let job_description = job_description.filter(|jd| !jd.trim().is_empty());
        let (document, job_description) = match (document, job_description) {
            (Some(document), Some(jd)) => (document, jd),
            (document, jd) => {
                let missing: Vec<&str> = [
                    document.is_none().then_some("resume"),
                    jd.is_none().then_some("job_description"),
                ]
                .into_iter()
                .flatten()
                .collect();
                return Err(AnalysisError::MissingInput(missing.join(", ")));
            }
        };

        info!(
            %mode,
            media_type = document.media_type.as_deref().unwrap_or("<none>"),
            file_name = document.file_name.as_deref().unwrap_or("<unnamed>"),
            bytes = document.bytes.len(),
            "Extracting resume"
        );

        // Extraction is CPU-bound; keep it off the async workers.
        let resume_text = tokio::task::spawn_blocking(move || extract_text(&document))
            .await
            .map_err(|e| AnalysisError::ExtractionTask(e.to_string()))??;

        if resume_text.trim().is_empty() {
            warn!(%mode, "Resume yielded no extractable text");
            return Err(AnalysisError::EmptyExtraction);
        }

        let prompt = self.prompts.build(mode, &resume_text, job_description);
        info!(
            %mode,
            model = %self.model,
            resume_chars = resume_text.len(),
            prompt_chars = prompt.len(),
            "Calling generation service"
        );

        let result = tokio::time::timeout(self.timeout, self.generator.generate(&self.model, &prompt))
            .await
            .map_err(|_| LlmError::Timeout(self.timeout))?
            .map_err(|e| {
                warn!(%mode, "Generation failed: {e}");
                e
            })?;

        info!(%mode, result_chars = result.len(), "Analysis complete");

        Ok(AnalysisResult {
            mode,
            title: mode.title(),
            result,
        })
    }
}
