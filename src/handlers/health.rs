//! Health check handler
//!
//! Liveness is tied to the classifier: the process refuses to start
//! without a loaded artifact, so a serving instance reports healthy.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::logic::model::EngineStatus;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    model_loaded: bool,
    version: &'static str,
    timestamp: i64,
}

impl HealthResponse {
    fn from_engine(engine: &EngineStatus) -> Self {
        Self {
            status: if engine.model_loaded {
                "healthy"
            } else {
                "degraded"
            },
            model_loaded: engine.model_loaded,
            version: env!("CARGO_PKG_VERSION"),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::from_engine(&state.model.status()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_status(model_loaded: bool) -> EngineStatus {
        EngineStatus {
            model_loaded,
            model_path: "models/depression.onnx".to_string(),
            feature_count: 13,
            threshold: 0.4,
            inference_count: 0,
            avg_latency_ms: 0.0,
        }
    }

    #[test]
    fn test_healthy_when_model_loaded() {
        let resp = HealthResponse::from_engine(&engine_status(true));
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["status"], "healthy");
        assert_eq!(value["model_loaded"], true);
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_degraded_without_model() {
        let resp = HealthResponse::from_engine(&engine_status(false));
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["status"], "degraded");
        assert_eq!(value["model_loaded"], false);
    }
}
