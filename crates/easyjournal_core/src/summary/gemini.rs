//! Generative Language API client.
//!
//! # Responsibility
//! - Implement [`TextGenerator`] over the `generateContent` REST endpoint.
//! - Frame user prompts with the reflective-assistant instruction.
//!
//! # Invariants
//! - The API key comes from [`SummaryConfig`]; nothing is compiled in.
//! - The client-side request timeout mirrors the configured summary timeout.

use super::{GenerationError, TextGenerator};
use crate::config::SummaryConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const SYSTEM_FRAMING: &str = "You are a supportive and empathetic AI assistant that helps users reflect on their journal entries. Provide warm, encouraging summaries that highlight patterns and growth. Keep the response under 200 words and focus on emotional insights and personal growth themes.\n\nUser's journal entries:\n";

const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// `reqwest`-backed Gemini text generator.
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    /// Builds a client from configuration.
    ///
    /// Fails with `NotConfigured` when the API key is empty.
    pub fn new(config: &SummaryConfig) -> Result<Self, GenerationError> {
        if config.api_key.trim().is_empty() {
            return Err(GenerationError::NotConfigured("GEMINI_API_KEY"));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let framed = format!("{SYSTEM_FRAMING}{prompt}");
        let body = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart {
                    text: framed.as_str(),
                }],
            }],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let payload = response
            .text()
            .await
            .map_err(|err| GenerationError::Transport(err.to_string()))?;
        extract_text(&payload)
    }
}

/// Joins the text parts of the first candidate.
fn extract_text(payload: &str) -> Result<String, GenerationError> {
    let parsed: GenerateResponse = serde_json::from_str(payload)
        .map_err(|err| GenerationError::MalformedResponse(err.to_string()))?;

    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenerationError::MalformedResponse(
            "response contained no text parts".to_string(),
        ));
    }
    Ok(text)
}
