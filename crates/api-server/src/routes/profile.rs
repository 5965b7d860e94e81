//! Profile endpoints
//!
//! Lets a user read and update their own settings, currently just the
//! Slack webhook URL used by the summary flow.

use axum::{extract::State, http::HeaderMap, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::resolve_user_identity;
use crate::state::AppState;

use super::todos::{internal_error, unauthorized, RouteError};

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub slack_webhook_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub slack_webhook_url: Option<String>,
}

/// GET /profile - Fetch the caller's profile
async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>, RouteError> {
    let user_id = resolve_user_identity(&headers).map_err(unauthorized)?;

    let slack_webhook_url = state
        .profile_store()
        .get(user_id)
        .await
        .map_err(internal_error)?
        .and_then(|profile| profile.slack_webhook_url);

    Ok(Json(ProfileResponse {
        user_id,
        slack_webhook_url,
    }))
}

/// PATCH /profile - Update the caller's profile
async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, RouteError> {
    let user_id = resolve_user_identity(&headers).map_err(unauthorized)?;

    let profile = state
        .profile_store()
        .set_webhook_url(user_id, req.slack_webhook_url)
        .await
        .map_err(internal_error)?;

    Ok(Json(ProfileResponse {
        user_id,
        slack_webhook_url: profile.slack_webhook_url,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).patch(update_profile))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::auth::issue_user_jwt;
    use crate::state::AppState;

    async fn build_state() -> (AppState, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let state = AppState::new(temp_dir.path().to_path_buf()).await.unwrap();
        (state, temp_dir)
    }

    fn bearer(user_id: Uuid) -> String {
        let (token, _) = issue_user_jwt(&user_id.to_string(), 1).unwrap();
        format!("Bearer {}", token)
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn profile_starts_empty_then_roundtrips() {
        let (state, _tmp) = build_state().await;
        let app = super::router().with_state(state);
        let user = Uuid::new_v4();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/profile")
                    .header("Authorization", bearer(user))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert!(payload["slack_webhook_url"].is_null());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/profile")
                    .header("Authorization", bearer(user))
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        json!({"slack_webhook_url": "https://hooks.slack.com/services/T0/B0/X"})
                            .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/profile")
                    .header("Authorization", bearer(user))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let payload = read_json(response).await;
        assert_eq!(
            payload["slack_webhook_url"],
            "https://hooks.slack.com/services/T0/B0/X"
        );
    }

    #[tokio::test]
    async fn empty_webhook_clears_field() {
        let (state, _tmp) = build_state().await;
        let app = super::router().with_state(state);
        let user = Uuid::new_v4();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/profile")
                    .header("Authorization", bearer(user))
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        json!({"slack_webhook_url": "https://hooks.slack.com/x"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/profile")
                    .header("Authorization", bearer(user))
                    .header("Content-Type", "application/json")
                    .body(Body::from(json!({"slack_webhook_url": ""}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let payload = read_json(response).await;
        assert!(payload["slack_webhook_url"].is_null());
    }

    #[tokio::test]
    async fn profile_requires_auth() {
        let (state, _tmp) = build_state().await;
        let app = super::router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/profile")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
