use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use jdparse_core::{AppConfig, DocumentParser, ParseOutcome};

use crate::prompt;

/// Maximum number of raw-response characters echoed back on decode failures.
const RAW_EXCERPT_CHARS: usize = 500;

const TEMPERATURE: f64 = 0.08;
const MAX_TOKENS: u32 = 4000;
const TOP_P: f64 = 0.9;

/// Client for the chat-completions endpoint that turns job-description text
/// into structured fields. One request per call; a failed attempt is terminal
/// for that call -- no retries, no response caching.
pub struct JdParserClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

// ── Chat-completions request/response types ────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

// ── Implementation ─────────────────────────────────────────────────────────

impl JdParserClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build reqwest client");

        Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    async fn call_api(&self, text: &str) -> ParseOutcome {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: prompt::SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt::build_user_prompt(text),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        };

        tracing::debug!(
            model = %self.model,
            text_len = text.len(),
            "Sending parse request"
        );

        let response = match self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return transport_failure(&e),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return transport_failure(&e),
        };

        let outcome = outcome_from_response(status, &body);
        if let ParseOutcome::Failed { reason, .. } = &outcome {
            tracing::warn!(status = status.as_u16(), reason = %reason, "Parse request failed");
        }
        outcome
    }
}

#[async_trait]
impl DocumentParser for JdParserClient {
    async fn parse(&self, text: &str) -> ParseOutcome {
        self.call_api(text).await
    }
}

// ── Response mapping ───────────────────────────────────────────────────────

/// Map a transport-level error to its failure reason.
fn transport_failure(error: &reqwest::Error) -> ParseOutcome {
    tracing::warn!(error = %error, "Parse request failed in transport");
    if error.is_timeout() {
        ParseOutcome::failed("request timeout - API took too long to respond")
    } else if error.is_connect() {
        ParseOutcome::failed("connection error - unable to reach API")
    } else {
        ParseOutcome::failed(format!("unexpected error: {error}"))
    }
}

/// Map an HTTP response to a per-unit outcome.
fn outcome_from_response(status: reqwest::StatusCode, body: &str) -> ParseOutcome {
    match status.as_u16() {
        200 => outcome_from_body(body),
        401 => ParseOutcome::failed("invalid API key"),
        429 => ParseOutcome::failed("rate limit exceeded"),
        code => ParseOutcome::failed(format!("API error {code}: {body}")),
    }
}

fn outcome_from_body(body: &str) -> ParseOutcome {
    let response: ChatResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) => return ParseOutcome::failed("invalid API response structure"),
    };

    let Some(choice) = response.choices.into_iter().next() else {
        return ParseOutcome::failed("invalid API response structure");
    };

    let content = strip_code_fences(choice.message.content.trim());
    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(fields) => ParseOutcome::parsed(fields),
        Err(e) => {
            let excerpt: String = content.chars().take(RAW_EXCERPT_CHARS).collect();
            ParseOutcome::failed_with_excerpt(format!("invalid JSON response: {e}"), excerpt)
        }
    }
}

/// Strip surrounding markdown code fences (```json ... ``` or bare ```)
/// that models emit despite instructions.
fn strip_code_fences(content: &str) -> String {
    let mut text = content.trim();
    if let Some(rest) = text.strip_prefix("```") {
        // Drop the fence line itself, including a language tag like "json".
        text = match rest.split_once('\n') {
            Some((_, body)) => body,
            None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
        };
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    text.trim().to_string()
}
