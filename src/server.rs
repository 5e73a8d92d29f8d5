//! HTTP surface: shared state and the combined router.

use std::sync::Arc;

use axum::http::{Method, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::applications::ApplicationDesk;
use crate::applications::routes::{ApplicationRouteState, application_routes};
use crate::config::PortalConfig;
use crate::error::Result;
use crate::navigation::routes::{NavigationRouteState, navigation_routes};
use crate::onboarding::{OnboardingBackend, OnboardingManager, OnboardingRouteState, onboarding_routes};
use crate::session::SessionStore;
use crate::session::routes::{SessionRouteState, session_routes};
use crate::store::Database;

/// Everything the handlers share.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionStore>,
    pub onboarding: Arc<dyn OnboardingBackend>,
    pub applications: Arc<ApplicationDesk>,
}

impl AppState {
    /// Wire the services over one storage backend. Restores the persisted profile.
    pub async fn new(db: Arc<dyn Database>, config: &PortalConfig) -> Result<Self> {
        let session = Arc::new(SessionStore::load(Arc::clone(&db)).await?);
        let onboarding: Arc<dyn OnboardingBackend> = Arc::new(OnboardingManager::new(
            Arc::clone(&db),
            config.vendor_org_id.clone(),
        ));
        let applications = Arc::new(ApplicationDesk::new(db));
        Ok(Self {
            session,
            onboarding,
            applications,
        })
    }
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "claimsy-portal"
    }))
}

/// Build the full router: session, navigation, onboarding and applications.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(health))
        .merge(session_routes(SessionRouteState {
            session: Arc::clone(&state.session),
        }))
        .merge(navigation_routes(NavigationRouteState {
            session: Arc::clone(&state.session),
        }))
        .merge(onboarding_routes(OnboardingRouteState::new(
            Arc::clone(&state.onboarding),
            Arc::clone(&state.session),
        )))
        .merge(application_routes(ApplicationRouteState {
            desk: Arc::clone(&state.applications),
        }))
        .layer(cors)
}
