use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{debug, error};

/// Client-facing detail for storage failures; the cause is only logged.
const STORAGE_FAILURE_DETAIL: &str = "the request could not be completed";

/// A field-level validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// JSON error body: `{"error": ..., "detail": ..., "fields": [...]}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
    pub fields: Vec<FieldError>,
}

#[derive(Serialize)]
struct Body {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail, fields: Vec::new() }
    }

    pub fn not_found(detail: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(detail.to_string()))
    }

    pub fn validation(detail: impl Into<String>, fields: Vec<FieldError>) -> Self {
        Self { status: StatusCode::UNPROCESSABLE_ENTITY, error: "Validation Error", detail: Some(detail.into()), fields }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = Body { error: self.error, detail: self.detail, fields: self.fields };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => {
                debug!(%msg, "resource not found");
                Self::not_found(&msg)
            }
            ServiceError::Db(msg) => {
                error!(err = %msg, "storage failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    Some(STORAGE_FAILURE_DETAIL.to_string()),
                )
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        // Data errors (missing fields, wrong types) are already 422; syntax stays 400.
        let status = r.status();
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            Self::validation(r.body_text(), Vec::new())
        } else {
            Self::new(status, status.canonical_reason().unwrap_or("Bad Request"), Some(r.body_text()))
        }
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self { Self::validation(r.body_text(), Vec::new()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self { Self::validation(r.body_text(), Vec::new()) }
}

impl From<validator::ValidationErrors> for JsonApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    code: e.code.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value for '{field}'")),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        Self::validation("request body failed validation", fields)
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
