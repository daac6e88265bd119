use super::{ExtractError, TextExtractor};

/// Decodes the upload as UTF-8, verbatim. Invalid bytes are an error, never replaced.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    fn name(&self) -> &'static str {
        "plain text"
    }
}
