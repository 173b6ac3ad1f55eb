//! Chat handler
//!
//! Stateless by design: each turn is sent to the advisor on its own, with
//! no history attached, so replies cannot reference earlier turns.

use axum::{extract::State, Json};

use crate::logic::advisor;
use crate::models::{ChatRequest, ChatTurn};
use crate::{AppError, AppResult, AppState};

pub async fn send(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> AppResult<Json<ChatTurn>> {
    let (name, message) = req
        .validated()
        .map_err(AppError::ValidationError)?;

    let reply = advisor::text_or_fallback(
        state.advisor.chat_reply(name, message).await,
        advisor::CHAT_FALLBACK,
    );

    Ok(Json(ChatTurn {
        name: name.to_string(),
        message: message.to_string(),
        reply,
    }))
}
