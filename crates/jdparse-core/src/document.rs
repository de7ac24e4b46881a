use std::fmt;

/// Label used for text submitted directly instead of as a file.
pub const PASTED_TEXT_LABEL: &str = "pasted_text";

/// Declared content kind of an input unit, mapped from the MIME-like type
/// string the ingestion surface reports. Anything we cannot extract text
/// from stays as `Other` and is rejected by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Pdf,
    Docx,
    Text,
    Other(String),
}

impl ContentKind {
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "application/pdf" => Self::Pdf,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            | "application/msword" => Self::Docx,
            "text/plain" => Self::Text,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mime = match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Text => "text/plain",
            Self::Other(other) => other.as_str(),
        };
        f.write_str(mime)
    }
}

/// One file or pasted-text submission. Immutable once created.
#[derive(Debug, Clone)]
pub struct InputUnit {
    pub label: String,
    pub content: Vec<u8>,
    pub kind: ContentKind,
}

impl InputUnit {
    pub fn new(label: impl Into<String>, content: Vec<u8>, kind: ContentKind) -> Self {
        Self {
            label: label.into(),
            content,
            kind,
        }
    }
}
