use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Result of the remote structured-extraction call for one unit. Failures
/// carry a short human-readable reason; decode failures additionally carry a
/// bounded excerpt of the raw model response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParseOutcome {
    Parsed {
        fields: serde_json::Value,
    },
    Failed {
        reason: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        raw_excerpt: Option<String>,
    },
}

impl ParseOutcome {
    pub fn parsed(fields: serde_json::Value) -> Self {
        Self::Parsed { fields }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
            raw_excerpt: None,
        }
    }

    pub fn failed_with_excerpt(reason: impl Into<String>, raw_excerpt: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
            raw_excerpt: Some(raw_excerpt.into()),
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed { .. })
    }
}

/// One unit's processing result. `elapsed` spans only the remote call and is
/// zero whenever extraction already failed.
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    pub label: String,
    pub outcome: ParseOutcome,
    pub elapsed: Duration,
}

/// Per-label results for one batch run. Keys are unique (last writer wins on
/// label collisions); insertion order is completion order.
pub type BatchResultMap = HashMap<String, ProcessingResult>;

/// Everything a batch run produced, plus its total wall-clock time.
#[derive(Debug)]
pub struct BatchReport {
    pub results: BatchResultMap,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn parsed_count(&self) -> usize {
        self.results
            .values()
            .filter(|r| r.outcome.is_parsed())
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.len() - self.parsed_count()
    }
}
