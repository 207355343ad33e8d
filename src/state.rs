// src/state.rs
use std::sync::Arc;

use crate::persona::PersonaSet;
use crate::services::gemini::GeminiClient;

pub type SharedState = Arc<AppState>;

/// Read-only after startup: the two persona strings and the upstream client.
/// Nothing here needs a lock.
pub struct AppState {
    pub personas: PersonaSet,
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(personas: PersonaSet, gemini: GeminiClient) -> Self {
        Self { personas, gemini }
    }
}
