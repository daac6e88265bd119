use super::{ExtractError, TextExtractor};

/// Reads the text layer of a PDF, page by page. No OCR.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| {
            ExtractError::Malformed {
                format: self.name(),
                reason: e.to_string(),
            }
        })?;

        Ok(join_pages(pages))
    }

    fn name(&self) -> &'static str {
        "PDF"
    }
}

/// Concatenates page texts verbatim, in page order, with no separator between
/// pages. A page with no text layer contributes the empty string.
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    pages.into_iter().fold(String::new(), |mut text, page| {
        text.push_str(page.as_ref());
        text
    })
}
