use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use jdparse_core::api_types::{
    BatchResponse, BatchRunState, BatchRunStatus, ParseTextRequest, RunsResponse,
};
use jdparse_core::{
    BatchReport, ContentKind, InputUnit, ParseOutcome, ProcessingResult, PASTED_TEXT_LABEL,
};
use jdparse_pipeline::ProgressEvent;

use crate::state::AppState;

/// Cap on retained run history entries.
const MAX_RUNS: usize = 100;

/// POST /api/parse/text — parse one pasted job description.
pub async fn parse_text(
    State(state): State<AppState>,
    Json(req): Json<ParseTextRequest>,
) -> impl IntoResponse {
    let text = req.text.trim();
    if text.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "please provide a non-empty job description"
            })),
        )
            .into_response();
    }

    let unit = InputUnit::new(
        PASTED_TEXT_LABEL,
        text.as_bytes().to_vec(),
        ContentKind::Text,
    );

    let run_id = register_run(&state, "pasted_text", 1).await;
    info!(run_id = %run_id, "Parsing pasted text");

    let report = state.coordinator.run_batch(vec![unit], None).await;
    finish_run(&state, run_id, &report).await;

    (StatusCode::OK, Json(BatchResponse::from_report(&report))).into_response()
}

/// POST /api/parse/files — parse a multipart batch of PDF/DOCX uploads.
/// Unreadable parts are reported per-label; they never abort the batch.
pub async fn parse_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut units = Vec::new();
    let mut unreadable: Vec<ProcessingResult> = Vec::new();

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let label = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("upload_{}", units.len() + unreadable.len() + 1));
                let kind = ContentKind::from_mime(field.content_type().unwrap_or(""));
                match field.bytes().await {
                    Ok(bytes) => units.push(InputUnit::new(label, bytes.to_vec(), kind)),
                    Err(e) => {
                        warn!(label = %label, error = %e, "Failed to read uploaded file");
                        unreadable.push(ProcessingResult {
                            label: label.clone(),
                            outcome: ParseOutcome::failed(format!("error reading file: {e}")),
                            elapsed: Duration::ZERO,
                        });
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({
                        "error": format!("invalid multipart payload: {e}")
                    })),
                )
                    .into_response();
            }
        }
    }

    if units.is_empty() && unreadable.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "no files provided" })),
        )
            .into_response();
    }

    let run_id = register_run(&state, "file_upload", units.len() + unreadable.len()).await;
    info!(run_id = %run_id, files = units.len(), "Processing uploaded files");

    // Progress goes to the log; the pipeline never touches response state.
    let (progress_tx, mut progress_rx) = tokio::sync::mpsc::unbounded_channel::<ProgressEvent>();
    tokio::spawn(async move {
        while let Some(event) = progress_rx.recv().await {
            info!(run_id = %run_id, fraction = event.fraction(), "{}", event.message());
        }
    });

    let mut report = state.coordinator.run_batch(units, Some(progress_tx)).await;
    for result in unreadable {
        report.results.insert(result.label.clone(), result);
    }

    finish_run(&state, run_id, &report).await;
    info!(
        run_id = %run_id,
        parsed = report.parsed_count(),
        failed = report.failed_count(),
        elapsed_secs = report.elapsed.as_secs_f64(),
        "Batch finished"
    );

    (StatusCode::OK, Json(BatchResponse::from_report(&report))).into_response()
}

/// GET /api/parse/runs — recent batch runs, oldest first.
pub async fn list_runs(State(state): State<AppState>) -> impl IntoResponse {
    let runs = state.runs.read().await.clone();
    (StatusCode::OK, Json(RunsResponse { runs }))
}

async fn register_run(state: &AppState, source: &str, units: usize) -> Uuid {
    let run_id = Uuid::new_v4();
    let mut runs = state.runs.write().await;
    runs.push(BatchRunStatus {
        run_id,
        source: source.to_string(),
        status: BatchRunState::Running,
        started_at: Utc::now(),
        finished_at: None,
        units: units as u64,
        parsed: 0,
        failed: 0,
        total_secs: None,
    });
    // Keep only the most recent entries to avoid unbounded growth
    if runs.len() > MAX_RUNS {
        let drain_count = runs.len() - MAX_RUNS;
        runs.drain(0..drain_count);
    }
    run_id
}

async fn finish_run(state: &AppState, run_id: Uuid, report: &BatchReport) {
    let mut runs = state.runs.write().await;
    if let Some(run) = runs.iter_mut().find(|r| r.run_id == run_id) {
        run.status = BatchRunState::Completed;
        run.finished_at = Some(Utc::now());
        run.parsed = report.parsed_count() as u64;
        run.failed = report.failed_count() as u64;
        run.total_secs = Some(report.elapsed.as_secs_f64());
    }
}
