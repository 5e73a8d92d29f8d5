//! REST endpoints for vendor onboarding.
//!
//! `/api/vendor/onboarding/*` exposes the backend operations directly.
//! `/api/vendor/wizard/*` drives a server-held [`OnboardingWizard`] for the
//! active session. A wizard belongs to the sign-in that opened it; once the
//! user signs out or another user signs in it is discarded.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

use super::manager::OnboardingBackend;
use super::model::{DocumentKind, NotificationUpdate, ProfileUpdate, ServicesUpdate};
use super::state::WizardStep;
use super::wizard::{OnboardingWizard, WizardEntry, WizardView};
use crate::error::{OnboardingError, StoreError, WizardError};
use crate::navigation::RouteKey;
use crate::session::SessionStore;

/// A wizard together with the sign-in it was opened for.
pub struct OpenWizard {
    pub generation: u64,
    pub wizard: OnboardingWizard,
}

/// Shared state for onboarding routes.
#[derive(Clone)]
pub struct OnboardingRouteState {
    pub backend: Arc<dyn OnboardingBackend>,
    pub session: Arc<SessionStore>,
    /// The wizard opened by the current session, if any.
    pub wizard: Arc<Mutex<Option<OpenWizard>>>,
}

impl OnboardingRouteState {
    pub fn new(backend: Arc<dyn OnboardingBackend>, session: Arc<SessionStore>) -> Self {
        Self {
            backend,
            session,
            wizard: Arc::new(Mutex::new(None)),
        }
    }
}

/// Lock the wizard slot, first dropping a wizard left by an earlier sign-in.
async fn current_wizard(state: &OnboardingRouteState) -> MutexGuard<'_, Option<OpenWizard>> {
    let generation = state.session.generation().await;
    let active = state.session.is_active().await;
    let mut slot = state.wizard.lock().await;
    let stale = slot
        .as_ref()
        .is_some_and(|open| !active || open.generation != generation);
    if stale {
        info!("Discarding onboarding wizard from a previous session");
        *slot = None;
    }
    slot
}

fn error_body(status: StatusCode, message: String) -> Response {
    (status, Json(json!({"error": message}))).into_response()
}

fn onboarding_error(err: &OnboardingError) -> Response {
    match err {
        OnboardingError::ChecklistIncomplete { missing } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": err.to_string(), "missing": missing})),
        )
            .into_response(),
        OnboardingError::Store(StoreError::NotFound { .. }) => {
            error_body(StatusCode::NOT_FOUND, err.to_string())
        }
        OnboardingError::Store(_) => error_body(StatusCode::SERVICE_UNAVAILABLE, err.to_string()),
    }
}

fn wizard_error(err: &WizardError) -> Response {
    match err {
        WizardError::NotLoaded => error_body(StatusCode::CONFLICT, err.to_string()),
        WizardError::ChecklistIncomplete => {
            error_body(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
        WizardError::Save { source, .. } | WizardError::Upload { source, .. } => {
            onboarding_error(source)
        }
    }
}

fn parse_kind(raw: &str) -> Result<DocumentKind, Response> {
    raw.parse::<DocumentKind>()
        .map_err(|message| error_body(StatusCode::BAD_REQUEST, message))
}

// ── Backend stand-in ────────────────────────────────────────────────────

/// Turn a backend result into a JSON response carrying the full state.
macro_rules! state_response {
    ($call:expr) => {
        match $call.await {
            Ok(state) => Json(state).into_response(),
            Err(e) => onboarding_error(&e),
        }
    };
}

/// GET /api/vendor/onboarding
async fn get_state(State(state): State<OnboardingRouteState>) -> Response {
    state_response!(state.backend.fetch_state())
}

/// PUT /api/vendor/onboarding/profile
async fn put_profile(
    State(state): State<OnboardingRouteState>,
    Json(update): Json<ProfileUpdate>,
) -> Response {
    state_response!(state.backend.update_profile(update))
}

/// PUT /api/vendor/onboarding/services
async fn put_services(
    State(state): State<OnboardingRouteState>,
    Json(update): Json<ServicesUpdate>,
) -> Response {
    state_response!(state.backend.update_services(update))
}

/// POST /api/vendor/onboarding/documents/{kind}
async fn post_document(
    State(state): State<OnboardingRouteState>,
    Path(kind): Path<String>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    state_response!(state.backend.upload_document(kind))
}

/// PUT /api/vendor/onboarding/notifications
async fn put_notifications(
    State(state): State<OnboardingRouteState>,
    Json(update): Json<NotificationUpdate>,
) -> Response {
    state_response!(state.backend.update_notifications(update))
}

/// POST /api/vendor/onboarding/complete
///
/// 422 with the missing gates while the checklist is incomplete.
async fn post_complete(State(state): State<OnboardingRouteState>) -> Response {
    state_response!(state.backend.complete())
}

// ── Wizard ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(tag = "entry", rename_all = "snake_case")]
enum OpenResponse {
    Ready { view: WizardView },
    Redirect { to: &'static str },
}

fn not_open() -> Response {
    error_body(
        StatusCode::CONFLICT,
        "Onboarding wizard is not open".to_string(),
    )
}

/// POST /api/vendor/wizard/open
///
/// Opens a fresh wizard for the session's role, replacing any previous one.
async fn wizard_open(State(state): State<OnboardingRouteState>) -> Response {
    let mut slot = current_wizard(&state).await;
    *slot = None;
    if !state.session.is_active().await {
        return Json(OpenResponse::Redirect {
            to: RouteKey::Login.path(),
        })
        .into_response();
    }
    let generation = state.session.generation().await;
    let role = state.session.role().await;
    let mut wizard = OnboardingWizard::new(Arc::clone(&state.backend), role);
    match wizard.open().await {
        Ok(WizardEntry::Ready) => {
            let view = wizard.view();
            *slot = Some(OpenWizard { generation, wizard });
            Json(OpenResponse::Ready { view }).into_response()
        }
        Ok(WizardEntry::Redirect(route)) => {
            Json(OpenResponse::Redirect { to: route.path() }).into_response()
        }
        Err(e) => wizard_error(&e),
    }
}

/// GET /api/vendor/wizard
async fn wizard_view(State(state): State<OnboardingRouteState>) -> Response {
    match current_wizard(&state).await.as_ref() {
        Some(open) => Json(open.wizard.view()).into_response(),
        None => not_open(),
    }
}

/// POST /api/vendor/wizard/next
async fn wizard_next(State(state): State<OnboardingRouteState>) -> Response {
    match current_wizard(&state).await.as_mut().map(|open| &mut open.wizard) {
        Some(wizard) => {
            wizard.next();
            Json(wizard.view()).into_response()
        }
        None => not_open(),
    }
}

/// POST /api/vendor/wizard/back
async fn wizard_back(State(state): State<OnboardingRouteState>) -> Response {
    match current_wizard(&state).await.as_mut().map(|open| &mut open.wizard) {
        Some(wizard) => {
            wizard.back();
            Json(wizard.view()).into_response()
        }
        None => not_open(),
    }
}

/// POST /api/vendor/wizard/step/{step}
async fn wizard_go_to(
    State(state): State<OnboardingRouteState>,
    Path(step): Path<WizardStep>,
) -> Response {
    match current_wizard(&state).await.as_mut().map(|open| &mut open.wizard) {
        Some(wizard) => {
            wizard.go_to(step);
            Json(wizard.view()).into_response()
        }
        None => not_open(),
    }
}

/// Run one wizard save and answer with the refreshed view.
///
/// A failed save still leaves the error on the wizard for the next view.
macro_rules! wizard_save {
    ($state:expr, |$wizard:ident| $call:expr) => {{
        let mut guard = current_wizard(&$state).await;
        match guard.as_mut().map(|open| &mut open.wizard) {
            Some($wizard) => {
                let outcome = $call.await.map(|_| ());
                match outcome {
                    Ok(()) => Json($wizard.view()).into_response(),
                    Err(e) => wizard_error(&e),
                }
            }
            None => not_open(),
        }
    }};
}

async fn wizard_profile(
    State(state): State<OnboardingRouteState>,
    Json(update): Json<ProfileUpdate>,
) -> Response {
    wizard_save!(state, |wizard| wizard.save_profile(update))
}

async fn wizard_services(
    State(state): State<OnboardingRouteState>,
    Json(update): Json<ServicesUpdate>,
) -> Response {
    wizard_save!(state, |wizard| wizard.save_services(update))
}

async fn wizard_document(
    State(state): State<OnboardingRouteState>,
    Path(kind): Path<String>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    wizard_save!(state, |wizard| wizard.upload(kind))
}

async fn wizard_notifications(
    State(state): State<OnboardingRouteState>,
    Json(update): Json<NotificationUpdate>,
) -> Response {
    wizard_save!(state, |wizard| wizard.save_notifications(update))
}

/// POST /api/vendor/wizard/finish
///
/// Answers the path to navigate to once onboarding is complete.
async fn wizard_finish(State(state): State<OnboardingRouteState>) -> Response {
    let mut guard = current_wizard(&state).await;
    let Some(wizard) = guard.as_mut().map(|open| &mut open.wizard) else {
        return not_open();
    };
    match wizard.finish().await {
        Ok(route) => {
            let view = wizard.view();
            Json(json!({"redirectTo": route.path(), "view": view})).into_response()
        }
        Err(e) => wizard_error(&e),
    }
}

/// Build the onboarding REST routes.
pub fn onboarding_routes(state: OnboardingRouteState) -> Router {
    Router::new()
        .route("/api/vendor/onboarding", get(get_state))
        .route("/api/vendor/onboarding/profile", put(put_profile))
        .route("/api/vendor/onboarding/services", put(put_services))
        .route("/api/vendor/onboarding/documents/{kind}", post(post_document))
        .route("/api/vendor/onboarding/notifications", put(put_notifications))
        .route("/api/vendor/onboarding/complete", post(post_complete))
        .route("/api/vendor/wizard", get(wizard_view))
        .route("/api/vendor/wizard/open", post(wizard_open))
        .route("/api/vendor/wizard/next", post(wizard_next))
        .route("/api/vendor/wizard/back", post(wizard_back))
        .route("/api/vendor/wizard/step/{step}", post(wizard_go_to))
        .route("/api/vendor/wizard/profile", put(wizard_profile))
        .route("/api/vendor/wizard/services", put(wizard_services))
        .route("/api/vendor/wizard/documents/{kind}", post(wizard_document))
        .route("/api/vendor/wizard/notifications", put(wizard_notifications))
        .route("/api/vendor/wizard/finish", post(wizard_finish))
        .with_state(state)
}
