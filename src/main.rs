//! Mindcheck Server
//!
//! Depression risk screening API: a 13-answer questionnaire is encoded into
//! the fixed feature vector a pre-trained classifier expects, the resulting
//! probability is tiered at a cutoff, and a hosted generative-language
//! service turns it into a human-readable suggestion. A second endpoint
//! offers a stateless supportive chat through the same service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     MINDCHECK SERVER                     │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌───────────┐   ┌────────────────────┐  │
//! │  │  API     │   │  Risk     │   │  Advisor Client    │  │
//! │  │  (Axum)  │──▶│  Scorer   │──▶│  (generateContent) │  │
//! │  │          │   │  (ONNX)   │   │                    │  │
//! │  └──────────┘   └───────────┘   └────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: collect, score, generate, respond. The classifier
//! artifact is loaded once at startup and is read-only afterwards.

mod config;
mod error;
mod handlers;
mod logic;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::advisor::{AdvisorClient, AdvisorConfig};
use logic::model::RiskModel;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mindcheck_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    tracing::info!("Mindcheck Server starting...");

    // Load the classifier artifact. A missing file or schema mismatch is
    // fatal here; the process must not come up without a working model.
    let model = RiskModel::load(&config.model_path)
        .with_context(|| format!("Failed to load classifier from {}", config.model_path))?;

    let advisor = AdvisorClient::new(AdvisorConfig {
        base_url: config.genai_base_url.clone(),
        api_key: config.genai_api_key.clone(),
        model: config.genai_model.clone(),
        timeout_seconds: config.genai_timeout_seconds,
    })
    .context("Failed to create advisor client")?;

    // Build application state
    let state = AppState {
        model: Arc::new(model),
        advisor: Arc::new(advisor),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<RiskModel>,
    pub advisor: Arc<AdvisorClient>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/model/status", get(handlers::status::model_status))
        .route("/api/v1/assess", post(handlers::assess::assess))
        .route("/api/v1/chat", post(handlers::chat::send))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
