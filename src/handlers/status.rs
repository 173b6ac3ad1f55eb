//! Engine status handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::logic::model::EngineStatus;
use crate::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub engine: EngineStatus,
    pub advisor_model: String,
}

/// Report the loaded artifact, its schema, and inference metrics
pub async fn model_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        engine: state.model.status(),
        advisor_model: state.config.genai_model.clone(),
    })
}
