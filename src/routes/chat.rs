// src/routes/chat.rs
use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, ResetRequest, ResetResponse},
    services::{metrics_manager::MetricsData, prompt, session_manager::MessageRole},
    state::SharedState,
};

/// Upper bound on a single chat message, in characters after trimming.
const MAX_TEXT_CHARS: usize = 2000;

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let text = payload.text.trim();

    if text.is_empty() {
        return Err(AppError::BadRequest(
            "Message text cannot be empty".to_string(),
        ));
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(AppError::BadRequest(format!(
            "Message text exceeds {MAX_TEXT_CHARS} characters"
        )));
    }

    let session_id = match &payload.session_id {
        Some(s) if !s.trim().is_empty() => state.sessions.ensure_session(s).await,
        _ => state.sessions.create_session().await,
    };

    let language = prompt::resolve_language(payload.language, text);
    state.metrics.record_language(language.code()).await;
    state.metrics.record_endpoint("/chat").await;

    let history = state
        .sessions
        .get_history(&session_id)
        .await
        .unwrap_or_default();

    let reply = match state.llm.complete(language, &history, text).await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::error!(error = %err, session_id = %session_id, "chat completion failed");
            return Err(AppError::Unavailable(
                "The assistant is unavailable right now. Please try again in a moment.",
            ));
        }
    };

    // History only advances once the provider has answered.
    state
        .sessions
        .append_message(&session_id, MessageRole::User, text)
        .await;
    state
        .sessions
        .append_message(&session_id, MessageRole::Assistant, &reply)
        .await;

    Ok(Json(ChatResponse { session_id, reply }))
}

pub async fn reset_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ResetRequest>,
) -> Json<ResetResponse> {
    state.sessions.clear_history(&payload.session_id).await;
    Json(ResetResponse {
        status: "success".to_string(),
        message: "Chat history cleared.".to_string(),
    })
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}
