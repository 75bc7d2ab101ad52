pub(crate) mod auth;
pub(crate) mod jobs;

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Extension};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use easily::board::collaborators::{ConfirmationMailer, ResumeStore, MAX_RESUME_BYTES};
use serde_json::json;
use validator::ValidationErrors;

use crate::infra::{AppState, Portal, SessionUser};

/// Full route table: the portal API plus the health, ready, and metrics
/// endpoints.
pub(crate) fn portal_router<S, M>(portal: Arc<Portal<S, M>>) -> Router
where
    S: ResumeStore + 'static,
    M: ConfirmationMailer + 'static,
{
    Router::new()
        .route("/api/v1/auth/register", post(auth::register_handler::<S, M>))
        .route("/api/v1/auth/login", post(auth::login_handler::<S, M>))
        .route("/api/v1/auth/logout", post(auth::logout_handler::<S, M>))
        .route(
            "/api/v1/jobs",
            get(jobs::list_jobs_handler::<S, M>).post(jobs::create_job_handler::<S, M>),
        )
        .route("/api/v1/jobs/:id", get(jobs::job_details_handler::<S, M>))
        .route(
            "/api/v1/jobs/:id/update",
            post(jobs::update_job_handler::<S, M>),
        )
        .route(
            "/api/v1/jobs/:id/delete",
            post(jobs::delete_job_handler::<S, M>),
        )
        .route(
            "/api/v1/jobs/:id/applicants",
            get(jobs::applicants_handler::<S, M>),
        )
        .route(
            "/api/v1/jobs/:id/apply",
            post(jobs::apply_handler::<S, M>)
                // The resume cap is enforced in the upload policy; the
                // transport limit only needs headroom for the other form
                // fields and the multipart framing.
                .layer(DefaultBodyLimit::max(MAX_RESUME_BYTES + 64 * 1024)),
        )
        .with_state(portal)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .fallback(unknown_route)
}

pub(crate) async fn unknown_route() -> Response {
    errors_response(
        StatusCode::NOT_FOUND,
        vec!["Page not found.".to_string()],
    )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Error payload in the portal's `{ "errors": [{ "msg": ... }] }` shape.
pub(crate) fn errors_response(status: StatusCode, messages: Vec<String>) -> Response {
    let errors: Vec<serde_json::Value> = messages
        .into_iter()
        .map(|msg| json!({ "msg": msg }))
        .collect();
    (status, Json(json!({ "errors": errors }))).into_response()
}

/// Flatten validator output into the message list the error payload carries.
pub(crate) fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            match &error.message {
                Some(msg) => messages.push(msg.to_string()),
                None => messages.push(format!("{field} is invalid")),
            }
        }
    }
    messages.sort();
    messages
}

/// Resolve the acting recruiter from the bearer token, or produce the 401 the
/// portal redirects with.
pub(crate) fn authenticate<S, M>(
    portal: &Portal<S, M>,
    headers: &axum::http::HeaderMap,
) -> Result<SessionUser, Response> {
    let denied = || {
        errors_response(
            StatusCode::UNAUTHORIZED,
            vec!["Please login as a recruiter to access this page.".to_string()],
        )
    };

    let token = bearer_token(headers).ok_or_else(denied)?;
    let user = portal.sessions.resolve(token).ok_or_else(denied)?;
    if user.role != "recruiter" {
        return Err(denied());
    }
    Ok(user)
}

pub(crate) fn bearer_token(headers: &axum::http::HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
