//! Prompt Builder: fixed templates with two named substitution slots.

use std::collections::HashMap;

use thiserror::Error;

use crate::analysis::mode::AnalysisMode;
use crate::analysis::prompts::{
    CANDIDATE_REVIEW_PROMPT, INTERVIEW_QUESTIONS_PROMPT, MISSING_KEYWORDS_PROMPT,
    SIMILARITY_SCORE_PROMPT,
};

pub const RESUME_PLACEHOLDER: &str = "{resume_text}";
pub const JOB_DESCRIPTION_PLACEHOLDER: &str = "{job_description}";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template must contain placeholder {placeholder} exactly once, found {found}")]
    PlaceholderCount {
        placeholder: &'static str,
        found: usize,
    },

    #[error("no template registered for mode {0}")]
    MissingMode(AnalysisMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Resume,
    JobDescription,
}

/// A template split once at its two placeholders.
///
/// Rendering writes the literal segments and the two values in a single pass,
/// so placeholder-like text inside a resume or job description is left alone.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    head: &'static str,
    first: Slot,
    middle: &'static str,
    second: Slot,
    tail: &'static str,
}

impl PromptTemplate {
    pub fn parse(template: &'static str) -> Result<Self, TemplateError> {
        let resume_at = find_once(template, RESUME_PLACEHOLDER)?;
        let jd_at = find_once(template, JOB_DESCRIPTION_PLACEHOLDER)?;

        let (first, first_at, first_len, second, second_at, second_len) = if resume_at < jd_at {
            (
                Slot::Resume,
                resume_at,
                RESUME_PLACEHOLDER.len(),
                Slot::JobDescription,
                jd_at,
                JOB_DESCRIPTION_PLACEHOLDER.len(),
            )
        } else {
            (
                Slot::JobDescription,
                jd_at,
                JOB_DESCRIPTION_PLACEHOLDER.len(),
                Slot::Resume,
                resume_at,
                RESUME_PLACEHOLDER.len(),
            )
        };

        Ok(Self {
            head: &template[..first_at],
            first,
            middle: &template[first_at + first_len..second_at],
            second,
            tail: &template[second_at + second_len..],
        })
    }

    /// Substitutes both values verbatim. No escaping, truncation or length limit.
    pub fn render(&self, resume_text: &str, job_description: &str) -> String {
        let value = |slot: Slot| match slot {
            Slot::Resume => resume_text,
            Slot::JobDescription => job_description,
        };

        let mut prompt = String::with_capacity(
            self.head.len()
                + self.middle.len()
                + self.tail.len()
                + resume_text.len()
                + job_description.len(),
        );
        prompt.push_str(self.head);
        prompt.push_str(value(self.first));
        prompt.push_str(self.middle);
        prompt.push_str(value(self.second));
        prompt.push_str(self.tail);
        prompt
    }
}

fn find_once(template: &str, placeholder: &'static str) -> Result<usize, TemplateError> {
    let found = template.matches(placeholder).count();
    if found != 1 {
        return Err(TemplateError::PlaceholderCount { placeholder, found });
    }
    template
        .find(placeholder)
        .ok_or(TemplateError::PlaceholderCount { placeholder, found })
}

/// One validated template per analysis mode. Built once at startup.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    templates: HashMap<AnalysisMode, PromptTemplate>,
}

impl PromptCatalog {
    /// Parses the built-in templates, failing if any is malformed.
    pub fn new() -> Result<Self, TemplateError> {
        Self::from_sources([
            (AnalysisMode::CandidateReview, CANDIDATE_REVIEW_PROMPT),
            (AnalysisMode::MissingKeywords, MISSING_KEYWORDS_PROMPT),
            (AnalysisMode::SimilarityScore, SIMILARITY_SCORE_PROMPT),
            (AnalysisMode::InterviewQuestions, INTERVIEW_QUESTIONS_PROMPT),
        ])
    }

    fn from_sources(
        sources: impl IntoIterator<Item = (AnalysisMode, &'static str)>,
    ) -> Result<Self, TemplateError> {
        let templates = sources
            .into_iter()
            .map(|(mode, source)| Ok((mode, PromptTemplate::parse(source)?)))
            .collect::<Result<HashMap<_, _>, TemplateError>>()?;

        if let Some(mode) = AnalysisMode::ALL
            .into_iter()
            .find(|mode| !templates.contains_key(mode))
        {
            return Err(TemplateError::MissingMode(mode));
        }

        Ok(Self { templates })
    }

    /// Builds the prompt for `mode`. Fresh string per call.
    pub fn build(&self, mode: AnalysisMode, resume_text: &str, job_description: &str) -> String {
        // Every mode is present: `from_sources` refuses an incomplete catalog.
        self.templates[&mode].render(resume_text, job_description)
    }
}
