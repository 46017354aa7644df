use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use database::error::ServiceError;
use log::error;
use serde_json::json;
use thiserror::Error;

/// Handler-level error. Wraps the domain errors from the database crate and
/// adds the HTTP-only variants.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            ApiError::Service(err) => match err {
                ServiceError::NotFound { .. } | ServiceError::NotAttached => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
                }
                ServiceError::InvalidInput(_) => {
                    (StatusCode::BAD_REQUEST, "INVALID_INPUT", err.to_string())
                }
                ServiceError::Duplicate(_) | ServiceError::AlreadyAttached => {
                    (StatusCode::CONFLICT, "DUPLICATE", err.to_string())
                }
                ServiceError::DuplicateCourse(_) => {
                    (StatusCode::CONFLICT, "DUPLICATE_COURSE", err.to_string())
                }
                ServiceError::CourseInUse(_) => {
                    (StatusCode::CONFLICT, "COURSE_IN_USE", err.to_string())
                }
                ServiceError::Db(db_err) => {
                    error!("database error: {db_err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "an internal error occurred".to_string(),
                    )
                }
            },
        };

        let body = json!({
            "success": false,
            "error": { "code": code, "message": message },
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_expected_statuses() {
        let cases = [
            (
                ApiError::Service(ServiceError::not_found("course")),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Service(ServiceError::NotAttached),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Service(ServiceError::InvalidInput("bad".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Service(ServiceError::Duplicate("dup".to_string())),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::Service(ServiceError::DuplicateCourse("CS101".to_string())),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::Service(ServiceError::CourseInUse("CS101".to_string())),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::Unauthorized("who are you".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::Forbidden("not yours".to_string()),
                StatusCode::FORBIDDEN,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
