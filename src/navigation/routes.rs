//! REST endpoints for guarded navigation and the sidebar menu.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::guard::decide;
use super::menu::{NavItem, menu_for};
use crate::session::SessionStore;

/// Shared state for navigation routes.
#[derive(Clone)]
pub struct NavigationRouteState {
    pub session: Arc<SessionStore>,
}

#[derive(Debug, Deserialize)]
struct NavigateQuery {
    #[serde(default)]
    path: String,
}

/// GET /api/navigate?path=/claims/abc123
///
/// Always 200: unauthorized navigation is answered with a redirect decision.
async fn navigate(
    State(state): State<NavigationRouteState>,
    Query(query): Query<NavigateQuery>,
) -> impl IntoResponse {
    let snapshot = state.session.snapshot().await;
    Json(decide(&query.path, snapshot.session_active, snapshot.role))
}

/// GET /api/menu
///
/// Empty while signed out, since the shell is not drawn without a session.
async fn menu(State(state): State<NavigationRouteState>) -> impl IntoResponse {
    let snapshot = state.session.snapshot().await;
    let items: Vec<NavItem> = if snapshot.session_active {
        menu_for(snapshot.role)
    } else {
        Vec::new()
    };
    Json(items)
}

/// Build the navigation REST routes.
pub fn navigation_routes(state: NavigationRouteState) -> Router {
    Router::new()
        .route("/api/navigate", get(navigate))
        .route("/api/menu", get(menu))
        .with_state(state)
}
