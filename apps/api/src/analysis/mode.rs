use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four analyses a recruiter can request. Each is bound to one prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisMode {
    CandidateReview,
    MissingKeywords,
    SimilarityScore,
    InterviewQuestions,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 4] = [
        AnalysisMode::CandidateReview,
        AnalysisMode::MissingKeywords,
        AnalysisMode::SimilarityScore,
        AnalysisMode::InterviewQuestions,
    ];

    /// URL path segment, e.g. `missing-keywords`.
    pub fn slug(self) -> &'static str {
        match self {
            AnalysisMode::CandidateReview => "candidate-review",
            AnalysisMode::MissingKeywords => "missing-keywords",
            AnalysisMode::SimilarityScore => "similarity-score",
            AnalysisMode::InterviewQuestions => "interview-questions",
        }
    }

    /// Heading shown above the result.
    pub fn title(self) -> &'static str {
        match self {
            AnalysisMode::CandidateReview => "Candidate Review",
            AnalysisMode::MissingKeywords => "Missing Keywords",
            AnalysisMode::SimilarityScore => "Similarity Analysis",
            AnalysisMode::InterviewQuestions => {
                "Generated Interview Questions for Recruiters to Ask Candidates"
            }
        }
    }

    /// Label for the action that triggers this analysis.
    pub fn action_label(self) -> &'static str {
        match self {
            AnalysisMode::CandidateReview => "Review Candidate Details",
            AnalysisMode::MissingKeywords => "Identify Missing Keywords",
            AnalysisMode::SimilarityScore => "Similarity Analysis",
            AnalysisMode::InterviewQuestions => "Generate Interview Questions for Recruiters",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown analysis mode '{}'", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for AnalysisMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisMode::ALL
            .into_iter()
            .find(|mode| mode.slug() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}
