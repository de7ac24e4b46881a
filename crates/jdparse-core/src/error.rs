use thiserror::Error;

/// Why text extraction failed for one input unit. These become per-unit
/// result data, not propagated faults, so the variants are cloneable and the
/// display strings are the user-visible reasons.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("unsupported file type: {0}")]
    Unsupported(String),

    #[error("no text content found in file")]
    NoText,

    #[error("insufficient text content (less than 50 characters)")]
    TooShort,

    #[error("text extraction error: {0}")]
    Parse(String),
}
