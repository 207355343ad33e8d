// src/message.rs
use serde::{Deserialize, Serialize};

use crate::services::gemini::Content;

#[derive(Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub history: Vec<HistoryMessage>,
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Deserialize)]
pub struct HistoryMessage {
    pub role: String,
    pub content: String,
}

impl HistoryMessage {
    /// Translate a client history entry into a Gemini conversation turn.
    /// The front end labels its own messages "bot"; Gemini calls that side
    /// "model". Every other role string is treated as the user.
    pub fn into_content(self) -> Content {
        let role = if self.role == "bot" { "model" } else { "user" };
        Content::new(role, self.content)
    }
}

#[derive(Serialize, Deserialize)]
pub struct GenerateResponse {
    pub reply: String,
}
