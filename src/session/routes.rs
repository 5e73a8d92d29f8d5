//! REST endpoints for signing in and out.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use tracing::warn;

use super::model::{LoginRequest, OnboardingAnswers, PERSONAS, ProfileInfo, persona};
use super::store::{SessionSnapshot, SessionStore};

/// Shared state for session routes.
#[derive(Clone)]
pub struct SessionRouteState {
    pub session: Arc<SessionStore>,
}

/// Where to go next, and the updated session.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    redirect_to: &'static str,
    session: SessionSnapshot,
}

async fn sign_in(session: &SessionStore, profile: ProfileInfo) -> Response {
    match session.set_profile(profile).await {
        Ok(home) => Json(SessionResponse {
            redirect_to: home.path(),
            session: session.snapshot().await,
        })
        .into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to persist profile");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

/// GET /api/session
async fn get_session(State(state): State<SessionRouteState>) -> impl IntoResponse {
    Json(state.session.snapshot().await)
}

/// GET /api/session/personas
async fn list_personas() -> impl IntoResponse {
    Json(PERSONAS)
}

/// POST /api/session/login
async fn login(
    State(state): State<SessionRouteState>,
    Json(request): Json<LoginRequest>,
) -> Response {
    if request.email.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": "Email is required"})),
        )
            .into_response();
    }
    sign_in(&state.session, request.into_profile()).await
}

/// POST /api/session/quick/{persona}
async fn quick_login(
    State(state): State<SessionRouteState>,
    Path(key): Path<String>,
) -> Response {
    match persona(&key) {
        Some(p) => sign_in(&state.session, p.profile()).await,
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("Unknown persona: {key}")})),
        )
            .into_response(),
    }
}

/// PUT /api/session/onboarding
///
/// Saves the questionnaire answers and points the client at the settings page.
async fn save_onboarding(
    State(state): State<SessionRouteState>,
    Json(answers): Json<OnboardingAnswers>,
) -> Response {
    match state.session.set_onboarding(answers).await {
        Ok(next) => Json(SessionResponse {
            redirect_to: next.path(),
            session: state.session.snapshot().await,
        })
        .into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to persist onboarding answers");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

/// POST /api/session/logout
///
/// The session is cleared even when the stored profile cannot be removed.
async fn logout(State(state): State<SessionRouteState>) -> impl IntoResponse {
    let persisted = state.session.logout().await.is_ok();
    Json(serde_json::json!({
        "status": "signed_out",
        "redirectTo": crate::navigation::RouteKey::Login.path(),
        "persisted": persisted,
    }))
}

/// Build the session REST routes.
pub fn session_routes(state: SessionRouteState) -> Router {
    Router::new()
        .route("/api/session", get(get_session))
        .route("/api/session/personas", get(list_personas))
        .route("/api/session/login", post(login))
        .route("/api/session/quick/{persona}", post(quick_login))
        .route("/api/session/onboarding", put(save_onboarding))
        .route("/api/session/logout", post(logout))
        .with_state(state)
}
