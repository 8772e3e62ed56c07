use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        error::CreateUserError, models::user::NewUser, repositories::user_repository::UserRepository,
        validation::Violation,
    },
    usecase::create_user_usecase::CreateUserUsecase,
};

const MALFORMED_BODY_DETAIL: &str = "Failed to read request";
const CONFLICT_DETAIL: &str = "Unique index or primary key violation";

// Request

/// json for the create-user request. Every field is optional on the wire;
/// missing required fields decode to empty strings and are rejected by the
/// validator rather than by the decoder.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserRequest {
    pub email: String,
    pub user_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            email: request.email,
            user_name: request.user_name,
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}

// Response

/// Problem-style body used for decode failures and uniqueness conflicts.
#[derive(Serialize, Deserialize)]
pub struct ProblemResponse {
    pub detail: String,
}

/// Body for field validation failures.
#[derive(Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub errors: Vec<FieldError>,
}

#[derive(Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    #[serde(rename = "defaultMessage")]
    pub default_message: String,
}

impl From<Violation> for FieldError {
    fn from(violation: Violation) -> Self {
        Self {
            field: violation.field.to_string(),
            default_message: violation.message,
        }
    }
}

/* Router Function and Handler Function */

// User Router

/// function return Router object
/// Suppose to be nested by main router
pub fn create_user_router<R: UserRepository + Send + Sync + 'static>(
    create_user_service: CreateUserUsecase<R>,
) -> Router {
    let state = AppState {
        create_user_service: Arc::new(create_user_service),
    };

    Router::new()
        .route("/users", post(create_user::<R>))
        .with_state(state)
}

pub struct AppState<R: UserRepository> {
    pub create_user_service: Arc<CreateUserUsecase<R>>,
}

impl<R: UserRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            create_user_service: Arc::clone(&self.create_user_service),
        }
    }
}

// handler function

/// handler function for user creation. The extractor result is taken as a
/// Result so a missing or unparseable body is answered here, before any
/// field validation runs.
async fn create_user<R: UserRepository + Send + Sync>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected unreadable request body");
            return problem_response(StatusCode::BAD_REQUEST, MALFORMED_BODY_DETAIL);
        }
    };

    match state.create_user_service.create_user(payload.into()).await {
        Ok(user) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/users/{}", user.id))],
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Maps each error kind to its fixed status and body. This is the only
/// place where domain errors become HTTP.
fn error_response(err: CreateUserError) -> Response {
    match err {
        CreateUserError::Invalid(violations) => {
            let status = StatusCode::BAD_REQUEST;
            let body = ValidationErrorResponse {
                error: status.canonical_reason().unwrap_or_default().to_string(),
                errors: violations.into_iter().map(FieldError::from).collect(),
            };
            (status, Json(body)).into_response()
        }
        CreateUserError::Duplicate => problem_response(StatusCode::CONFLICT, CONFLICT_DETAIL),
        CreateUserError::Repository(err) => {
            tracing::error!(error = %err, "user creation failed in the store");
            problem_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

fn problem_response(status: StatusCode, detail: &str) -> Response {
    let body = ProblemResponse {
        detail: detail.to_string(),
    };
    (status, Json(body)).into_response()
}
