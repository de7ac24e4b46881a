use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use jdparse_core::ExtractError;

/// Extract all text from the document body, one line per paragraph. Tables
/// and other non-paragraph children are ignored.
pub(crate) fn extract_text(content: &[u8]) -> Result<String, ExtractError> {
    let doc = docx_rs::read_docx(content).map_err(|e| ExtractError::Parse(e.to_string()))?;

    let mut text = String::new();
    for child in doc.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for child in paragraph.children {
                if let ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let RunChild::Text(t) = child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }

    Ok(text)
}
