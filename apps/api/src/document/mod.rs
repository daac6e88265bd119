//! Document Extractor: turns an uploaded resume into plain text.
//!
//! The declared media type is trusted: it selects a `DocumentKind`, and each
//! supported kind maps to exactly one `TextExtractor`. No content sniffing.

use bytes::Bytes;
use thiserror::Error;

pub mod docx;
pub mod pdf;
pub mod plain;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PLAIN_TEXT_MEDIA_TYPE: &str = "text/plain";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type '{media_type}'. Please upload a PDF, Word document, or TXT file.")]
    UnsupportedFormat { media_type: String },

    #[error("Text file is not valid UTF-8: {0}")]
    DecodeFailure(#[from] std::string::FromUtf8Error),

    #[error("Could not read {format} document: {reason}")]
    Malformed { format: &'static str, reason: String },
}

/// A resume as submitted by the user. Lives for one request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Bytes,
    /// The media type the client declared for the upload, if any.
    pub media_type: Option<String>,
    /// Original file name, used for logging only.
    pub file_name: Option<String>,
}

impl UploadedDocument {
    #[cfg(test)]
    pub fn new(bytes: impl Into<Bytes>, media_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: Some(media_type.into()),
            file_name: None,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.media_type
            .as_deref()
            .map(DocumentKind::from_media_type)
            .unwrap_or_else(|| DocumentKind::Unsupported(String::new()))
    }
}

/// Tagged variant of the declared file type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
    Unsupported(String),
}

impl DocumentKind {
    /// Maps a declared media type to a kind. Parameters such as `; charset=utf-8`
    /// are ignored and the comparison is ASCII case-insensitive.
    pub fn from_media_type(media_type: &str) -> Self {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            PDF_MEDIA_TYPE => DocumentKind::Pdf,
            DOCX_MEDIA_TYPE => DocumentKind::Docx,
            PLAIN_TEXT_MEDIA_TYPE => DocumentKind::PlainText,
            _ => DocumentKind::Unsupported(media_type.to_string()),
        }
    }

    /// The extraction strategy for this kind, or `None` when unsupported.
    pub fn extractor(&self) -> Option<&'static dyn TextExtractor> {
        match self {
            DocumentKind::Pdf => Some(&PdfExtractor),
            DocumentKind::Docx => Some(&DocxExtractor),
            DocumentKind::PlainText => Some(&PlainTextExtractor),
            DocumentKind::Unsupported(_) => None,
        }
    }
}

/// A format-specific reader. Implementations hold no state.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;

    /// Human-readable format name, used in logs and error messages.
    fn name(&self) -> &'static str;
}

/// Extracts plain text from an uploaded document using its declared type.
pub fn extract_text(document: &UploadedDocument) -> Result<String, ExtractError> {
    let kind = document.kind();
    let extractor = kind.extractor().ok_or_else(|| ExtractError::UnsupportedFormat {
        media_type: match kind {
            DocumentKind::Unsupported(ref media_type) if !media_type.is_empty() => {
                media_type.clone()
            }
            _ => "<none>".to_string(),
        },
    })?;

    tracing::debug!(
        format = extractor.name(),
        bytes = document.bytes.len(),
        "Extracting resume text"
    );

    extractor.extract(&document.bytes)
}
