// src/services/mod.rs
pub mod gemini;
