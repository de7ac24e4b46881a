use once_cell::sync::Lazy;
use regex::Regex;

use crate::MAX_TEXT_CHARS;

static HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("valid regex"));
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Normalize extracted text: collapse runs of spaces/tabs to a single space,
/// collapse 3+ consecutive newlines to exactly two, trim, and truncate to the
/// first [`MAX_TEXT_CHARS`] characters.
pub(crate) fn clean_text(raw: &str) -> String {
    let collapsed = HORIZONTAL_WS.replace_all(raw, " ");
    let collapsed = EXCESS_NEWLINES.replace_all(&collapsed, "\n\n");
    collapsed.trim().chars().take(MAX_TEXT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_horizontal_whitespace() {
        assert_eq!(clean_text("a  \t b\tc"), "a b c");
    }

    #[test]
    fn collapses_excess_newlines_to_two() {
        assert_eq!(clean_text("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(clean_text("a\n\nb"), "a\n\nb");
        assert_eq!(clean_text("a\nb"), "a\nb");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(clean_text("  \n hello \n "), "hello");
    }

    #[test]
    fn truncates_to_the_character_cap() {
        let long = "x".repeat(MAX_TEXT_CHARS + 500);
        assert_eq!(clean_text(&long).chars().count(), MAX_TEXT_CHARS);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "ü".repeat(MAX_TEXT_CHARS + 10);
        assert_eq!(clean_text(&long).chars().count(), MAX_TEXT_CHARS);
    }
}
