use jdparse_core::{ContentKind, ExtractError};
use jdparse_text::{extract, ExtractionCache, MAX_TEXT_CHARS, MIN_TEXT_CHARS};

// ---------------------------------------------------------------------------
// Length contract: [50, 3000) preserved, >=3000 truncated, <50 rejected
// ---------------------------------------------------------------------------

#[test]
fn cleaned_length_contract_holds_across_the_range() {
    let exactly_min = "x".repeat(MIN_TEXT_CHARS);
    assert_eq!(
        extract(exactly_min.as_bytes(), &ContentKind::Text).unwrap(),
        exactly_min
    );

    let one_below = "x".repeat(MIN_TEXT_CHARS - 1);
    assert_eq!(
        extract(one_below.as_bytes(), &ContentKind::Text),
        Err(ExtractError::TooShort)
    );

    let mid = "x".repeat(1500);
    assert_eq!(extract(mid.as_bytes(), &ContentKind::Text).unwrap(), mid);

    let oversized = "x".repeat(MAX_TEXT_CHARS + 1);
    assert_eq!(
        extract(oversized.as_bytes(), &ContentKind::Text)
            .unwrap()
            .chars()
            .count(),
        MAX_TEXT_CHARS
    );
}

// ---------------------------------------------------------------------------
// Idempotence and memoization agree
// ---------------------------------------------------------------------------

#[test]
fn cache_and_direct_extraction_agree() {
    let posting = "Hiring a data engineer for the analytics platform. \
        Airflow, dbt and SQL required; Python preferred. Remote, EU timezones.";
    let cache = ExtractionCache::new();

    let direct = extract(posting.as_bytes(), &ContentKind::Text);
    let cached_miss = cache.get_or_extract(posting.as_bytes(), &ContentKind::Text);
    let cached_hit = cache.get_or_extract(posting.as_bytes(), &ContentKind::Text);

    assert_eq!(direct, cached_miss);
    assert_eq!(cached_miss, cached_hit);
}
