// src/routes/generate.rs
use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{GenerateRequest, GenerateResponse, HistoryMessage},
    state::SharedState,
};

/// Returned as the reply when generation finishes normally but the
/// candidate carries no text. Kept as a 200 for front-end compatibility.
pub const NO_TEXT_REPLY: &str = "Error: Model did not output text.";

pub async fn generate_handler(
    State(state): State<SharedState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if payload.prompt.is_empty() {
        return Err(AppError::BadRequest("Prompt cannot be empty".to_string()));
    }

    let persona = state.personas.select(payload.lang.as_deref());
    let history = payload
        .history
        .into_iter()
        .map(HistoryMessage::into_content)
        .collect();

    let reply = state
        .gemini
        .generate(persona, history, &payload.prompt)
        .await?
        .unwrap_or_else(|| NO_TEXT_REPLY.to_string());

    Ok(Json(GenerateResponse { reply }))
}
