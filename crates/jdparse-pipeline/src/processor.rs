use std::sync::Arc;
use std::time::{Duration, Instant};

use jdparse_core::{DocumentParser, InputUnit, ParseOutcome, ProcessingResult};
use jdparse_text::ExtractionCache;

/// Processes one input unit: text extraction first, then the remote
/// structured parse. Extraction failures short-circuit -- the remote service
/// is never called and no timer is started. Every failure comes back as data
/// in the result; this type raises nothing of its own.
pub struct JobProcessor {
    parser: Arc<dyn DocumentParser>,
    cache: ExtractionCache,
}

impl JobProcessor {
    pub fn new(parser: Arc<dyn DocumentParser>) -> Self {
        Self {
            parser,
            cache: ExtractionCache::new(),
        }
    }

    pub async fn process(&self, unit: &InputUnit) -> ProcessingResult {
        let text = match self.cache.get_or_extract(&unit.content, &unit.kind) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(label = %unit.label, error = %e, "Text extraction failed");
                return ProcessingResult {
                    label: unit.label.clone(),
                    outcome: ParseOutcome::failed(e.to_string()),
                    elapsed: Duration::ZERO,
                };
            }
        };

        // The timer spans only the remote call, never extraction.
        let started = Instant::now();
        let outcome = self.parser.parse(&text).await;
        let elapsed = started.elapsed();

        tracing::debug!(
            label = %unit.label,
            parsed = outcome.is_parsed(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Unit processed"
        );

        ProcessingResult {
            label: unit.label.clone(),
            outcome,
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jdparse_core::ContentKind;
    use serde_json::json;

    const POSTING: &str = "Backend engineer role: build and operate the payments platform, \
        own reliability, mentor the team. Rust and PostgreSQL required.";

    struct StubParser;

    #[async_trait]
    impl DocumentParser for StubParser {
        async fn parse(&self, _text: &str) -> ParseOutcome {
            tokio::time::sleep(Duration::from_millis(5)).await;
            ParseOutcome::parsed(json!({"title": "Backend Engineer"}))
        }
    }

    /// Panics if the pipeline ever reaches the remote call.
    struct UnreachableParser;

    #[async_trait]
    impl DocumentParser for UnreachableParser {
        async fn parse(&self, _text: &str) -> ParseOutcome {
            panic!("remote parser must not be called when extraction fails");
        }
    }

    #[tokio::test]
    async fn successful_unit_times_the_remote_call() {
        let processor = JobProcessor::new(Arc::new(StubParser));
        let unit = InputUnit::new("jd.txt", POSTING.as_bytes().to_vec(), ContentKind::Text);

        let result = processor.process(&unit).await;
        assert_eq!(result.label, "jd.txt");
        assert!(result.outcome.is_parsed());
        assert!(result.elapsed > Duration::ZERO);
    }

    #[tokio::test]
    async fn extraction_failure_short_circuits() {
        let processor = JobProcessor::new(Arc::new(UnreachableParser));
        let unit = InputUnit::new("empty.pdf", Vec::new(), ContentKind::Pdf);

        let result = processor.process(&unit).await;
        assert_eq!(
            result.outcome,
            ParseOutcome::failed("no text content found in file")
        );
        assert_eq!(result.elapsed, Duration::ZERO);
    }

    #[tokio::test]
    async fn remote_failure_is_data_with_elapsed_time() {
        struct FailingParser;

        #[async_trait]
        impl DocumentParser for FailingParser {
            async fn parse(&self, _text: &str) -> ParseOutcome {
                ParseOutcome::failed("rate limit exceeded")
            }
        }

        let processor = JobProcessor::new(Arc::new(FailingParser));
        let unit = InputUnit::new("jd.txt", POSTING.as_bytes().to_vec(), ContentKind::Text);

        let result = processor.process(&unit).await;
        assert_eq!(result.outcome, ParseOutcome::failed("rate limit exceeded"));
    }
}
