use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod handlers;
mod routes;
mod state;

use jdparse_core::AppConfig;
use jdparse_llm::JdParserClient;
use jdparse_pipeline::{BatchCoordinator, JobProcessor};

use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("jdparse_server=info".parse().unwrap())
                .add_directive("jdparse_pipeline=info".parse().unwrap())
                .add_directive("jdparse_llm=info".parse().unwrap())
                .add_directive("jdparse_text=info".parse().unwrap()),
        )
        .init();

    let config = AppConfig::from_env();
    if config.api_key.is_empty() {
        tracing::warn!("MISTRAL_API_KEY is not set; parse requests will fail with an auth error");
    }
    let host = config.server_host.clone();
    let port = config.server_port;

    let parser = Arc::new(JdParserClient::new(&config));
    let coordinator = Arc::new(BatchCoordinator::new(
        JobProcessor::new(parser),
        config.max_concurrency,
    ));

    let state = AppState {
        config,
        coordinator,
        runs: Arc::new(tokio::sync::RwLock::new(Vec::new())),
    };

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{host}:{port}");
    tracing::info!("jdparse server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
