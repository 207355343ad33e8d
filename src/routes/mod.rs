// src/routes/mod.rs
pub mod generate;

use axum::{
    Router,
    routing::{get, post},
};
use generate::generate_handler;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/generate", post(generate_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
