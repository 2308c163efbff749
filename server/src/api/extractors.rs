//! Path and query extractors for API routes
//!
//! List endpoints need the raw query pairs in wire order, with repeated
//! keys intact, so they are not deserialized into a struct.

use std::ops::Deref;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Maximum length of a resource name in the URL
pub const MAX_RESOURCE_NAME_LENGTH: usize = 64;

/// Resource names are lowercase ASCII, digits and underscores
pub fn validate_resource_name(name: &str) -> Result<(), ValidationError> {
    if name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        Ok(())
    } else {
        Err(ValidationError::new("resource_charset").with_message(
            "Invalid resource: must contain only lowercase letters, digits, or underscores".into(),
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
struct ResourcePathRaw {
    #[validate(
        length(
            min = 1,
            max = 64,
            message = "Invalid resource: must be 1-64 characters"
        ),
        custom(function = "validate_resource_name")
    )]
    resource: String,
}

/// Validated `{resource}` path segment.
///
/// Returns a 400 Bad Request if the name is malformed. Whether the resource
/// exists is decided by the list service.
#[derive(Debug)]
pub struct ResourcePath {
    pub resource: String,
}

impl<S> FromRequestParts<S> for ResourcePath
where
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<ResourcePathRaw>::from_request_parts(parts, state)
            .await
            .map_err(ValidationRejection::Path)?;
        raw.validate().map_err(ValidationRejection::Validation)?;

        Ok(Self {
            resource: raw.resource,
        })
    }
}

/// Raw query pairs in wire order, percent-decoded
#[derive(Debug, Default)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl Deref for QueryPairs {
    type Target = [(String, String)];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(ValidationRejection::Query)?;
        Ok(Self(pairs))
    }
}

/// Rejection for malformed paths or query strings
#[derive(Debug)]
pub enum ValidationRejection {
    /// Failed to parse path parameters
    Path(PathRejection),
    /// Failed to parse query string
    Query(QueryRejection),
    /// Validation constraints not satisfied
    Validation(validator::ValidationErrors),
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::Path(rejection) => (
                StatusCode::BAD_REQUEST,
                "PATH_PARSE_ERROR",
                rejection.body_text(),
            ),
            Self::Query(rejection) => (
                StatusCode::BAD_REQUEST,
                "QUERY_PARSE_ERROR",
                rejection.body_text(),
            ),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format_validation_errors(&errors),
            ),
        };
        (
            status,
            Json(serde_json::json!({
                "error": "bad_request",
                "code": code,
                "message": message
            })),
        )
            .into_response()
    }
}

fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{}: validation failed", field))
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
