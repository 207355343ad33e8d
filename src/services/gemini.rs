// src/services/gemini.rs
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// A single conversation turn in Gemini wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Content {
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// System instructions carry no role on the wire.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Concatenated text of all parts.
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ApiError {
    message: String,
    status: String,
}

#[derive(Debug, Error)]
pub enum GeminiError {
    /// Upstream returned HTTP 429 or a RESOURCE_EXHAUSTED error status.
    #[error("rate limited by upstream")]
    RateLimited,
    /// Generation did not finish normally: safety block, length cutoff, or
    /// no candidate at all ("Unknown").
    #[error("generation stopped: {reason}")]
    Blocked { reason: String },
    #[error("Gemini API error (HTTP {code}): {message}")]
    Api { code: u16, message: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Thin client for the `generateContent` endpoint. One call per chat turn,
/// no streaming, no retries.
///
/// Deliberately does not derive Debug so the API key cannot leak through
/// error or trace formatting.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, model)
    }

    /// Point the client at a different host. Used by tests to talk to a
    /// local stub server.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Run one chat turn: persona instruction, prior history, then the new
    /// prompt as the final user turn. Returns the candidate text, or `None`
    /// when generation finished normally but produced no text.
    pub async fn generate(
        &self,
        system_prompt: &str,
        mut history: Vec<Content>,
        prompt: &str,
    ) -> Result<Option<String>, GeminiError> {
        history.push(Content::new("user", prompt));
        let request = GenerateContentRequest {
            system_instruction: Content::system(system_prompt),
            contents: history,
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::classify_failure(status, response).await);
        }

        let body: GenerateContentResponse = response.json().await?;
        let Some(candidate) = body.candidates.into_iter().next() else {
            return Err(GeminiError::Blocked { reason: "Unknown".to_string() });
        };
        if let Some(reason) = candidate.finish_reason.as_deref() {
            if reason != "STOP" {
                return Err(GeminiError::Blocked { reason: reason.to_string() });
            }
        }

        let text = candidate
            .content
            .map(|c| c.text())
            .filter(|t| !t.is_empty());
        Ok(text)
    }

    /// Map a non-2xx reply to a typed error. Quota exhaustion is recognized
    /// by HTTP status or by the structured error status, never by substring
    /// matching on the message text.
    async fn classify_failure(status: StatusCode, response: reqwest::Response) -> GeminiError {
        let body = response.text().await.unwrap_or_default();
        let api_error = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_default();

        if status == StatusCode::TOO_MANY_REQUESTS || api_error.status == "RESOURCE_EXHAUSTED" {
            return GeminiError::RateLimited;
        }

        let message = if api_error.message.is_empty() {
            body
        } else {
            api_error.message
        };
        GeminiError::Api { code: status.as_u16(), message }
    }
}
