//! Configuration module

use std::env;

use anyhow::Context;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the ONNX classifier artifact (sidecar at `<path>.json`)
    pub model_path: String,

    /// Generative API key. Required; never embedded in source.
    pub genai_api_key: String,

    /// Generative model identifier
    pub genai_model: String,

    /// Generative API base URL (overridable for testing)
    pub genai_base_url: String,

    /// Generative API request timeout
    pub genai_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "models/depression.onnx".to_string()),

            genai_api_key: env::var("GENAI_API_KEY")
                .context("GENAI_API_KEY must be set (the credential is injected, not embedded)")?,

            genai_model: env::var("GENAI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),

            genai_base_url: env::var("GENAI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),

            genai_timeout_seconds: env::var("GENAI_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
        })
    }
}
