//! REST endpoints for vendor applications.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::warn;

use super::desk::{ApplicationDesk, ApplicationIntake};
use super::model::{ApplicationSubmission, ApproveRequest, RejectRequest, StatusFilter};
use crate::error::{ApplicationError, StoreError};

/// Shared state for application routes.
#[derive(Clone)]
pub struct ApplicationRouteState {
    pub desk: Arc<ApplicationDesk>,
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    #[serde(default)]
    status: Option<String>,
}

fn error_response(err: ApplicationError) -> Response {
    let status = match &err {
        ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND,
        ApplicationError::InvalidTransition { .. } => StatusCode::CONFLICT,
        ApplicationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
        ApplicationError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    if status.is_server_error() {
        warn!(error = %err, "Vendor application request failed");
    }
    (status, Json(serde_json::json!({"error": err.to_string()}))).into_response()
}

/// POST /api/vendor-applications
///
/// Public intake. Answers `{ success, applicationId }`.
async fn submit(
    State(state): State<ApplicationRouteState>,
    Json(submission): Json<ApplicationSubmission>,
) -> Response {
    match state.desk.submit(submission).await {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/vendor-applications?status=NEW
async fn list(
    State(state): State<ApplicationRouteState>,
    Query(query): Query<ListQuery>,
) -> Response {
    let filter = match query.status.as_deref().unwrap_or("").parse::<StatusFilter>() {
        Ok(filter) => filter,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": message})),
            )
                .into_response();
        }
    };
    match state.desk.list(filter).await {
        Ok(applications) => Json(applications).into_response(),
        Err(e) => error_response(e),
    }
}

async fn get_one(State(state): State<ApplicationRouteState>, Path(id): Path<String>) -> Response {
    match state.desk.get(&id).await {
        Ok(application) => Json(application).into_response(),
        Err(e) => error_response(e),
    }
}

async fn approve(
    State(state): State<ApplicationRouteState>,
    Path(id): Path<String>,
    Json(request): Json<ApproveRequest>,
) -> Response {
    match state.desk.approve(&id, request).await {
        Ok(application) => Json(application).into_response(),
        Err(e) => error_response(e),
    }
}

async fn reject(
    State(state): State<ApplicationRouteState>,
    Path(id): Path<String>,
    Json(request): Json<RejectRequest>,
) -> Response {
    match state.desk.reject(&id, request).await {
        Ok(application) => Json(application).into_response(),
        Err(e) => error_response(e),
    }
}

/// Build the vendor application REST routes.
pub fn application_routes(state: ApplicationRouteState) -> Router {
    Router::new()
        .route("/api/vendor-applications", get(list).post(submit))
        .route("/api/vendor-applications/{id}", get(get_one))
        .route("/api/vendor-applications/{id}/approve", post(approve))
        .route("/api/vendor-applications/{id}/reject", post(reject))
        .with_state(state)
}
