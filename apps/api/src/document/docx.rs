use docx_rs::{DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild};

use super::{ExtractError, TextExtractor};

/// Reads body paragraph text from a DOCX archive.
/// Tables, headers/footers and embedded objects are skipped.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Malformed {
            format: self.name(),
            reason: e.to_string(),
        })?;

        let mut text = String::new();
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                push_paragraph_text(&mut text, paragraph);
                text.push('\n');
            }
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "DOCX"
    }
}

fn push_paragraph_text(text: &mut String, paragraph: &Paragraph) {
    push_children_text(text, &paragraph.children);
}

/// Walks runs, hyperlink runs and tracked insertions in document order.
fn push_children_text(text: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(text, run),
            ParagraphChild::Hyperlink(hyperlink) => push_children_text(text, &hyperlink.children),
            ParagraphChild::Insert(insert) => {
                for insert_child in &insert.children {
                    if let InsertChild::Run(run) = insert_child {
                        push_run_text(text, run);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run_text(text: &mut String, run: &Run) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}
