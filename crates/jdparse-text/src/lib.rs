mod cache;
mod clean;
mod docx;
mod pdf;

pub use cache::ExtractionCache;

use jdparse_core::{ContentKind, ExtractError};

/// Maximum number of characters kept after cleanup.
pub const MAX_TEXT_CHARS: usize = 3000;

/// Minimum cleaned length considered usable.
pub const MIN_TEXT_CHARS: usize = 50;

/// Extract cleaned plain text from raw file bytes. Pure function of
/// `(content, kind)`: callers may memoize on that pair (see
/// [`ExtractionCache`]).
pub fn extract(content: &[u8], kind: &ContentKind) -> Result<String, ExtractError> {
    let raw = match kind {
        ContentKind::Other(mime) => return Err(ExtractError::Unsupported(mime.clone())),
        _ if content.is_empty() => return Err(ExtractError::NoText),
        ContentKind::Pdf => pdf::extract_text(content)?,
        ContentKind::Docx => docx::extract_text(content)?,
        ContentKind::Text => {
            String::from_utf8(content.to_vec()).map_err(|e| ExtractError::Parse(e.to_string()))?
        }
    };

    if raw.trim().is_empty() {
        return Err(ExtractError::NoText);
    }

    let cleaned = clean::clean_text(&raw);
    if cleaned.chars().count() < MIN_TEXT_CHARS {
        return Err(ExtractError::TooShort);
    }

    Ok(cleaned)
}
