use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::mpsc;

use jdparse_core::{
    ContentKind, DocumentParser, InputUnit, ParseOutcome, PASTED_TEXT_LABEL,
};
use jdparse_pipeline::{BatchCoordinator, JobProcessor, ProgressEvent};

// ---------------------------------------------------------------------------
// Stub parsers
// ---------------------------------------------------------------------------

/// Returns a fixed structured result after a short delay, so elapsed times
/// are observable.
struct FixedParser;

#[async_trait]
impl DocumentParser for FixedParser {
    async fn parse(&self, _text: &str) -> ParseOutcome {
        tokio::time::sleep(Duration::from_millis(10)).await;
        ParseOutcome::parsed(json!({
            "title": "Backend Engineer",
            "JobType": "Full time",
            "SalaryOffered": {"MinAmount": "12 Lakhs", "MaxAmount": "17 Lakhs", "Currency": "INR"}
        }))
    }
}

/// Always reports the remote service as unavailable.
struct DownParser;

#[async_trait]
impl DocumentParser for DownParser {
    async fn parse(&self, _text: &str) -> ParseOutcome {
        ParseOutcome::failed("connection error - unable to reach API")
    }
}

fn coordinator(parser: impl DocumentParser + 'static, concurrency: usize) -> BatchCoordinator {
    BatchCoordinator::new(JobProcessor::new(Arc::new(parser)), concurrency)
}

const POSTING: &str = "We are hiring a Backend Engineer to own the billing platform. \
    Must have: Rust, PostgreSQL, 5+ years experience. Good to have: Kafka. \
    Location: Pune, India. CTC 12-17 LPA. No. of Positions: 2. Full time.";

fn posting_unit(label: &str) -> InputUnit {
    InputUnit::new(label, POSTING.as_bytes().to_vec(), ContentKind::Text)
}

// ---------------------------------------------------------------------------
// End-to-end scenario: one good text unit, one empty PDF
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mixed_batch_produces_one_result_per_unit() {
    let units = vec![
        InputUnit::new(
            PASTED_TEXT_LABEL,
            POSTING.as_bytes().to_vec(),
            ContentKind::Text,
        ),
        InputUnit::new("empty.pdf", Vec::new(), ContentKind::from_mime("application/pdf")),
    ];

    let report = coordinator(FixedParser, 3).run_batch(units, None).await;
    assert_eq!(report.results.len(), 2);

    let parsed = &report.results[PASTED_TEXT_LABEL];
    assert!(parsed.outcome.is_parsed());
    assert!(parsed.elapsed > Duration::ZERO);

    let failed = &report.results["empty.pdf"];
    assert_eq!(
        failed.outcome,
        ParseOutcome::failed("no text content found in file")
    );
    assert_eq!(failed.elapsed, Duration::ZERO);

    assert_eq!(report.parsed_count(), 1);
    assert_eq!(report.failed_count(), 1);
}

// ---------------------------------------------------------------------------
// Result-count invariant under total remote failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remote_outage_still_yields_every_result() {
    let units: Vec<InputUnit> = (0..6).map(|i| posting_unit(&format!("jd_{i}.txt"))).collect();
    let report = coordinator(DownParser, 3).run_batch(units, None).await;

    assert_eq!(report.results.len(), 6);
    assert_eq!(report.parsed_count(), 0);
    for result in report.results.values() {
        assert_eq!(
            result.outcome,
            ParseOutcome::failed("connection error - unable to reach API")
        );
    }
}

// ---------------------------------------------------------------------------
// Progress stream
// ---------------------------------------------------------------------------

#[tokio::test]
async fn progress_stream_covers_the_whole_batch() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let units: Vec<InputUnit> = (0..5).map(|i| posting_unit(&format!("jd_{i}.txt"))).collect();

    let report = coordinator(FixedParser, 2).run_batch(units, Some(tx)).await;
    assert_eq!(report.results.len(), 5);

    let mut events: Vec<ProgressEvent> = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }

    assert_eq!(events.len(), 5);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.completed, i + 1);
        assert_eq!(event.total, 5);
    }
    assert_eq!(events[4].message(), "processed 5/5 files");
    assert!((events[4].fraction() - 1.0).abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// Batch wall-clock timing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn report_includes_total_wall_clock_time() {
    let units = vec![posting_unit("a.txt"), posting_unit("b.txt")];
    let report = coordinator(FixedParser, 3).run_batch(units, None).await;

    assert!(report.elapsed >= Duration::from_millis(10));
    for result in report.results.values() {
        assert!(result.elapsed <= report.elapsed);
    }
}
