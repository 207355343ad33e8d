use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use chat_relay::config::Config;
use chat_relay::persona::PersonaSet;
use chat_relay::routes;
use chat_relay::services::gemini::GeminiClient;
use chat_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let personas = PersonaSet::load(Path::new("system-prompt.txt"));
    let gemini = GeminiClient::new(config.api_key.clone(), config.model.clone());
    let state = Arc::new(AppState::new(personas, gemini));

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(model = %config.model, "chat relay listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
