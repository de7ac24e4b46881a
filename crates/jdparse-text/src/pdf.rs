use jdparse_core::ExtractError;
use lopdf::Document;

/// Number of leading pages read from a PDF. Job postings fit comfortably in
/// the first pages and the text cap makes reading further pointless.
const MAX_PAGES: usize = 3;

/// Extract text from the first pages of a PDF. Pages yielding only
/// whitespace are skipped entirely; the rest are joined with a blank line.
pub(crate) fn extract_text(content: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(content).map_err(|e| ExtractError::Parse(e.to_string()))?;

    let pages = doc.get_pages();
    tracing::debug!(pages = pages.len(), "Loaded PDF");

    let mut parts: Vec<String> = Vec::new();
    for (&number, _) in pages.iter().take(MAX_PAGES) {
        let page_text = doc
            .extract_text(&[number])
            .map_err(|e| ExtractError::Parse(e.to_string()))?;
        if !page_text.trim().is_empty() {
            parts.push(page_text);
        }
    }

    Ok(parts.join("\n\n"))
}
