use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::outcome::{BatchReport, ParseOutcome, ProcessingResult};

// --- Health ---

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
    pub api_key_configured: bool,
}

// --- Parse ---

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitResult {
    pub label: String,
    pub outcome: ParseOutcome,
    pub elapsed_secs: f64,
    /// Filename offered when the client downloads this result as JSON.
    pub download_name: String,
}

impl From<&ProcessingResult> for UnitResult {
    fn from(result: &ProcessingResult) -> Self {
        Self {
            label: result.label.clone(),
            outcome: result.outcome.clone(),
            elapsed_secs: result.elapsed.as_secs_f64(),
            download_name: download_name(&result.label),
        }
    }
}

impl UnitResult {
    /// Indented JSON text for the per-item download.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.outcome)
    }
}

/// Export filename for one result: the label stem plus a fixed suffix.
fn download_name(label: &str) -> String {
    let stem = label.split('.').next().unwrap_or(label);
    format!("{stem}_parsed.json")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub parsed: usize,
    pub failed: usize,
    pub avg_secs: f64,
    pub total_secs: f64,
}

impl BatchSummary {
    pub fn from_report(report: &BatchReport) -> Self {
        let total = report.results.len();
        let parsed = report.parsed_count();
        let avg_secs = if total == 0 {
            0.0
        } else {
            report
                .results
                .values()
                .map(|r| r.elapsed.as_secs_f64())
                .sum::<f64>()
                / total as f64
        };
        Self {
            total,
            parsed,
            failed: total - parsed,
            avg_secs,
            total_secs: report.elapsed.as_secs_f64(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<UnitResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<BatchSummary>,
}

impl BatchResponse {
    pub fn from_report(report: &BatchReport) -> Self {
        let mut results: Vec<UnitResult> = report.results.values().map(UnitResult::from).collect();
        // The result map's order is completion order; sort for stable output.
        results.sort_by(|a, b| a.label.cmp(&b.label));
        let summary = (results.len() > 1).then(|| BatchSummary::from_report(report));
        Self { results, summary }
    }
}

// --- Runs ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BatchRunState {
    Running,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRunStatus {
    pub run_id: Uuid,
    pub source: String,
    pub status: BatchRunState,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub units: u64,
    pub parsed: u64,
    pub failed: u64,
    pub total_secs: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RunsResponse {
    pub runs: Vec<BatchRunStatus>,
}
