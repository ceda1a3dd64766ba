use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use restaurant_lib::errors_service::ServiceError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// One entry per violated validation rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Validation(Vec<String>),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn invalid_uuid() -> Self {
        ApiError::BadRequest("invalid uuid".to_string())
    }

    pub fn restaurant_not_found() -> Self {
        ApiError::NotFound("restaurant not found".to_string())
    }

    pub fn dish_not_found() -> Self {
        ApiError::NotFound("dish not found".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", Some(msg), None),
            ApiError::Validation(failures) => (
                StatusCode::BAD_REQUEST,
                "validation_failed",
                None,
                Some(failures),
            ),
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "unauthorized", Some(msg), None)
            }
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", Some(msg), None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg), None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", Some(msg), None),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                Some(msg),
                None,
            ),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(failures) => ApiError::Validation(failures),
            ServiceError::NotFound => ApiError::NotFound("resource not found".to_string()),
            ServiceError::Forbidden => {
                ApiError::Forbidden("you may not modify this resource".to_string())
            }
            ServiceError::InvalidCredentials => {
                ApiError::Unauthorized("invalid email or password".to_string())
            }
            ServiceError::EmailAlreadyExists => {
                ApiError::Conflict("email already exists".to_string())
            }
            ServiceError::InvalidUuid(msg) => ApiError::BadRequest(format!("invalid uuid: {}", msg)),
            ServiceError::Internal(err) => ApiError::Internal(err.to_string()),
            _ => ApiError::Internal("unexpected error".to_string()),
        }
    }
}

/// Check if environment is production-like (prod, prod01, prod02, etc.)
pub fn is_prod_like(env: &str) -> bool {
    env.to_lowercase().starts_with("prod")
}

/// Converts a service error to an ApiError, logging internal errors.
/// In production, internal error details are hidden.
pub fn handle_service_error(err: ServiceError, env: &str, operation: &str) -> ApiError {
    match &err {
        ServiceError::Internal(_) | ServiceError::InvalidUuid(_) => {
            tracing::error!(env = %env, error = ?err, operation = %operation, "service error");
            if is_prod_like(env) {
                ApiError::Internal("internal server error".to_string())
            } else {
                ApiError::from(err)
            }
        }
        _ => ApiError::from(err),
    }
}
