use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub request_timeout_secs: u64,
    pub max_concurrency: usize,
    pub server_host: String,
    pub server_port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("MISTRAL_API_URL")
                .unwrap_or_else(|_| "https://api.mistral.ai/v1/chat/completions".into()),
            api_key: std::env::var("MISTRAL_API_KEY").unwrap_or_default(),
            model: std::env::var("MISTRAL_MODEL").unwrap_or_else(|_| "mistral-small-latest".into()),
            request_timeout_secs: std::env::var("JDPARSE_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            max_concurrency: std::env::var("JDPARSE_MAX_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&c| c >= 1)
                .unwrap_or(3),
            server_host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}
