//! `AppError` and its mapping onto JSON error responses.
//!
//! Client-facing failures (validation, malformed input, missing rows) become 400/404
//! with an `ErrorDto` message. Everything else is logged and answered with a 500.

pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use convert_case::{Case, Casing};
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Client errors (validation, bad request, not
/// found) carry a message meant for the caller; every other variant maps to a 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem or socket error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal state.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Request body failed validation.
    ///
    /// Results in 400 Bad Request naming the offending JSON field.
    ///
    /// # Fields
    /// - `field` - camelCase name of the field as it appears in the request body
    /// - `message` - Human readable description of the failure
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    #[error("{0}")]
    InternalError(String),
}

/// Reduces a validator report to the first failing field.
///
/// Fields are visited in name order so the reported field is stable across runs.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let Some((field, field_errors)) = fields.into_iter().next() else {
            return AppError::BadRequest("Invalid request body".to_string());
        };

        let field = json_field_name(&field);
        let message = field_errors
            .first()
            .map(|e| match &e.message {
                Some(message) => message.to_string(),
                None if e.code == "required" => format!("{} is required", field),
                None => format!("Invalid value for {}", field),
            })
            .unwrap_or_else(|| format!("Invalid value for {}", field));

        AppError::Validation { field, message }
    }
}

/// Maps a Rust field name to the name used in request bodies.
///
/// DTO fields are snake_case with a camelCase wire format, and `kind` is sent as `type`.
fn json_field_name(field: &str) -> String {
    if field == "kind" {
        return "type".to_string();
    }

    field.to_case(Case::Camel)
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `BadRequest` variants
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    message,
                    field: Some(field),
                    error: None,
                }),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message alongside the error detail.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let detail = self.0.to_string();
        tracing::error!("{}", detail);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
                field: None,
                error: Some(detail),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    use crate::model::{message::CreateMessageDto, project::CreateProjectDto};

    #[test]
    fn converts_snake_case_fields() {
        assert_eq!(json_field_name("airbnb_url"), "airbnbUrl");
        assert_eq!(json_field_name("project_id"), "projectId");
        assert_eq!(json_field_name("name"), "name");
        assert_eq!(json_field_name("kind"), "type");
    }

    #[test]
    fn reports_missing_required_field() {
        let dto = CreateMessageDto {
            name: None,
            email: Some("guest@example.com".to_string()),
            phone: None,
            message: Some("Hello".to_string()),
        };

        let err = AppError::from(dto.validate().unwrap_err());

        match err {
            AppError::Validation { field, message } => {
                assert_eq!(field, "name");
                assert_eq!(message, "Name is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reports_camel_case_field() {
        let dto = CreateProjectDto {
            name: Some("Villa".to_string()),
            slug: Some("villa".to_string()),
            airbnb_url: Some("not a url".to_string()),
            kind: Some("villa".to_string()),
            ..Default::default()
        };

        let err = AppError::from(dto.validate().unwrap_err());

        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "airbnbUrl"));
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("Project not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_error_maps_to_500() {
        let response =
            AppError::DbErr(sea_orm::DbErr::Custom("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
