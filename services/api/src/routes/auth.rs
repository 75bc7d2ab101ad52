use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use easily::board::collaborators::{ConfirmationMailer, ResumeStore};
use easily::board::{NewUser, User};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::{bearer_token, errors_response, validation_messages};
use crate::infra::{Portal, SessionUser};

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required."))]
    pub(crate) name: String,
    #[validate(email(message = "Invalid email format."))]
    pub(crate) email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long."))]
    pub(crate) password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct LoginRequest {
    #[validate(email(message = "Invalid email format."))]
    pub(crate) email: String,
    #[validate(length(min = 1, message = "Password is required."))]
    pub(crate) password: String,
}

/// Recruiter record without the credential secret.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserView {
    #[serde(rename = "_id")]
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) email: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

pub(crate) async fn register_handler<S, M>(
    State(portal): State<Arc<Portal<S, M>>>,
    Json(request): Json<RegisterRequest>,
) -> Response
where
    S: ResumeStore + 'static,
    M: ConfirmationMailer + 'static,
{
    if let Err(errors) = request.validate() {
        return errors_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            validation_messages(&errors),
        );
    }

    // Duplicate check is deliberately caller-side; the store never enforces
    // email uniqueness itself.
    if portal.users.find_by_email(&request.email).is_some() {
        return errors_response(
            StatusCode::CONFLICT,
            vec!["User with this email already exists.".to_string()],
        );
    }

    let user = portal.users.save(NewUser {
        name: request.name,
        email: request.email,
        password: request.password,
    });

    let body = json!({
        "success": "Registration successful! Please login.",
        "user": UserView::from(user),
    });
    (StatusCode::CREATED, Json(body)).into_response()
}

pub(crate) async fn login_handler<S, M>(
    State(portal): State<Arc<Portal<S, M>>>,
    Json(request): Json<LoginRequest>,
) -> Response
where
    S: ResumeStore + 'static,
    M: ConfirmationMailer + 'static,
{
    if let Err(errors) = request.validate() {
        return errors_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            validation_messages(&errors),
        );
    }

    // Plain-text comparison, exactly as stored; hashing is out of scope.
    let user = match portal.users.find_by_email(&request.email) {
        Some(user) if user.password == request.password => user,
        _ => {
            return errors_response(
                StatusCode::UNAUTHORIZED,
                vec!["Invalid email or password.".to_string()],
            )
        }
    };

    let session_user = SessionUser {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: "recruiter",
    };
    let token = portal.sessions.create(session_user.clone());

    let body = json!({
        "success": format!("Welcome back, {}!", user.name),
        "token": token,
        "user": session_user,
    });
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn logout_handler<S, M>(
    State(portal): State<Arc<Portal<S, M>>>,
    headers: HeaderMap,
) -> Response
where
    S: ResumeStore + 'static,
    M: ConfirmationMailer + 'static,
{
    if let Some(token) = bearer_token(&headers) {
        portal.sessions.destroy(token);
    }
    // Logout is idempotent: a stale or missing token still lands back at the
    // login page.
    (
        StatusCode::OK,
        Json(json!({ "success": "Logged out." })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{LogMailer, SessionStore};
    use crate::routes::tests_support::{body_json, test_portal, TestPortal};

    fn register(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    async fn do_register(portal: &Arc<TestPortal>, request: RegisterRequest) -> Response {
        register_handler(State(portal.clone()), Json(request)).await
    }

    #[tokio::test]
    async fn register_creates_recruiter_and_hides_password() {
        let portal = test_portal();
        let response = do_register(&portal, register("Priya", "p@easily.test", "secret1")).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["user"]["_id"], 1);
        assert_eq!(body["user"]["email"], "p@easily.test");
        assert!(body["user"].get("password").is_none());
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let portal = test_portal();
        do_register(&portal, register("Priya", "p@easily.test", "secret1")).await;
        let response = do_register(&portal, register("Other", "p@easily.test", "secret2")).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["msg"], "User with this email already exists.");
    }

    #[tokio::test]
    async fn register_collects_validation_errors() {
        let portal = test_portal();
        let response = do_register(&portal, register("", "not-an-email", "shrt")).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["errors"].as_array().expect("error array").len(), 3);
    }

    #[tokio::test]
    async fn login_round_trips_session_token() {
        let portal = test_portal();
        do_register(&portal, register("Priya", "p@easily.test", "secret1")).await;

        let response = login_handler(State(portal.clone()), Json(login("p@easily.test", "secret1"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let token = body["token"].as_str().expect("token issued");

        let session = portal.sessions.resolve(token).expect("token resolves");
        assert_eq!(session.id, 1);
        assert_eq!(session.role, "recruiter");
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let portal = test_portal();
        do_register(&portal, register("Priya", "p@easily.test", "secret1")).await;

        let response =
            login_handler(State(portal.clone()), Json(login("p@easily.test", "wrong"))).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["msg"], "Invalid email or password.");
    }

    #[tokio::test]
    async fn login_rejects_unknown_email_without_panicking() {
        let portal = test_portal();
        let response =
            login_handler(State(portal.clone()), Json(login("missing@x.com", "whatever"))).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn logout_destroys_the_session() {
        let portal = test_portal();
        do_register(&portal, register("Priya", "p@easily.test", "secret1")).await;
        let response =
            login_handler(State(portal.clone()), Json(login("p@easily.test", "secret1"))).await;
        let body = body_json(response).await;
        let token = body["token"].as_str().expect("token issued").to_string();

        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::AUTHORIZATION,
            format!("Bearer {token}").parse().expect("header value"),
        );
        let response = logout_handler(State(portal.clone()), headers).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(portal.sessions.resolve(&token).is_none());
    }

    #[tokio::test]
    async fn logout_without_token_still_succeeds() {
        let portal = Arc::new(Portal::new(
            Arc::new(SessionStore::new(60)),
            Arc::new(crate::routes::tests_support::StubResumes),
            Arc::new(LogMailer::default()),
        ));
        let response = logout_handler(State(portal), HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
