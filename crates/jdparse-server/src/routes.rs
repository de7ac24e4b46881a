use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        // Health
        .route("/api/health", get(handlers::health::health_check))
        // Parsing
        .route("/api/parse/text", post(handlers::parse::parse_text))
        .route("/api/parse/files", post(handlers::parse::parse_files))
        .route("/api/parse/runs", get(handlers::parse::list_runs))
}
