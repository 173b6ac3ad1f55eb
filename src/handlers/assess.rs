//! Assessment handler
//!
//! One button press on the form maps to one call here: validate, encode,
//! score, tier, then ask the advisor for a suggestion. A failed suggestion
//! call is downgraded to the static fallback; a failed prediction is not,
//! since it means the artifact and the feature schema disagree.

use axum::{extract::State, Json};
use validator::Validate;

use crate::logic::advisor;
use crate::logic::model::RiskTier;
use crate::models::{AssessmentRequest, RiskAssessment};
use crate::{AppResult, AppState};

pub async fn assess(
    State(state): State<AppState>,
    Json(req): Json<AssessmentRequest>,
) -> AppResult<Json<RiskAssessment>> {
    req.validate()?;

    let features = req.to_feature_vector();
    let probability = state.model.predict(&features)?;
    let tier = RiskTier::classify(probability, state.model.threshold());

    let suggestion = advisor::text_or_fallback(
        state.advisor.suggest(probability, tier).await,
        advisor::SUGGESTION_FALLBACK,
    );

    let assessment = RiskAssessment::new(probability, tier, suggestion);

    tracing::info!(
        "Assessment {}: probability {:.4}, tier {}",
        assessment.id,
        probability,
        tier.label()
    );

    Ok(Json(assessment))
}
