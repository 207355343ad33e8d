// src/persona.rs
use std::path::Path;

const PREAMBLE_ID: &str = "Kamu adalah Rani, asisten virtual yang ramah dan santai. \
Selalu jawab dalam Bahasa Indonesia dengan jelas dan sopan.\n\n";

const PREAMBLE_EN: &str = "You are Rani, a friendly and casual virtual assistant. \
Always answer in English, clearly and politely.\n\n";

const DEFAULT_BASE_PROMPT: &str = "You are Rani, a helpful AI assistant.";

/// The two persona instructions, assembled once at startup and read-only for
/// the life of the process.
#[derive(Debug, Clone)]
pub struct PersonaSet {
    id: String,
    en: String,
}

impl PersonaSet {
    /// Build both personas from the shared base prompt file. A missing file
    /// is not fatal; the built-in base prompt is used instead.
    pub fn load(path: &Path) -> Self {
        let base = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "base prompt file not found, using default");
                DEFAULT_BASE_PROMPT.to_string()
            }
        };
        Self::from_base(&base)
    }

    pub fn from_base(base: &str) -> Self {
        Self {
            id: format!("{PREAMBLE_ID}{base}"),
            en: format!("{PREAMBLE_EN}{base}"),
        }
    }

    /// Pick the persona for a request. Only the exact string "id" (or an
    /// absent field) selects the Indonesian persona; everything else falls
    /// through to English, matching the observed upstream behavior ("ID"
    /// gets the English persona).
    pub fn select(&self, lang: Option<&str>) -> &str {
        match lang {
            Some("id") | None => &self.id,
            Some(_) => &self.en,
        }
    }
}
