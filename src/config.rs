// src/config.rs
use anyhow::Context;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment. The API key is the only
    /// required value; startup aborts without it.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key =
            std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not found in environment")?;

        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { api_key, model, port })
    }
}
