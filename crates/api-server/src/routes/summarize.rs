//! Summary endpoint
//!
//! Reads the caller's open todos, asks the model for a digest, and posts
//! it to the caller's Slack webhook. The webhook call consumes the
//! generated text, so the two external calls run sequentially.

use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
use serde::Serialize;

use tl_core::todo::TodoRepository;

use crate::auth::resolve_user_identity;
use crate::state::AppState;

use super::todos::{bad_request, internal_error, unauthorized, RouteError};

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// POST /summarize - Summarize open todos to the caller's Slack webhook
async fn summarize(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SummarizeResponse>, RouteError> {
    let user_id = resolve_user_identity(&headers).map_err(unauthorized)?;

    // Configuration is checked before any store read or external call
    let webhook_url = state
        .profile_store()
        .get(user_id)
        .await
        .map_err(internal_error)?
        .and_then(|profile| profile.slack_webhook_url)
        .ok_or_else(|| {
            bad_request("Slack webhook URL not configured. Please add it in your profile settings.")
        })?;

    let todos = state
        .todo_store()
        .list_open(user_id)
        .await
        .map_err(internal_error)?;

    if todos.is_empty() {
        return Ok(Json(SummarizeResponse {
            success: None,
            message: "No pending todos to summarize".to_string(),
            summary: None,
        }));
    }

    let summary = state
        .summarizer()
        .summarize(&todos)
        .await
        .map_err(internal_error)?;

    state
        .notifier()
        .send_summary(&webhook_url, &summary)
        .await
        .map_err(internal_error)?;

    Ok(Json(SummarizeResponse {
        success: Some(true),
        message: "Todo summary sent to Slack successfully".to_string(),
        summary: Some(summary),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/summarize", post(summarize))
}
