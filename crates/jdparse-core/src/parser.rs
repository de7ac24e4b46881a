use async_trait::async_trait;

use crate::outcome::ParseOutcome;

/// Seam over the remote structured-extraction service. The real
/// implementation issues one HTTP call per invocation; tests drive the
/// pipeline with stubs. Implementations never return a Rust error -- every
/// failure mode is data in the outcome.
///
/// Callers guarantee `text` is at least 50 characters; implementations do not
/// re-validate length.
#[async_trait]
pub trait DocumentParser: Send + Sync {
    async fn parse(&self, text: &str) -> ParseOutcome;
}
