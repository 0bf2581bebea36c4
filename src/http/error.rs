//! Mapping of failures to JSON error responses.
//!
//! Every error body shares the same envelope:
//! `{ timestamp, status, error, message, path, errorCode }` plus
//! kind-specific details.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::conversion::types::now_millis;
use crate::conversion::{InvalidTemperature, InvalidTemperatureKind, Unit};

/// What went wrong while serving a request.
#[derive(Debug, Error)]
pub enum ApiErrorKind {
    /// The conversion core rejected the value.
    #[error(transparent)]
    InvalidTemperature(#[from] InvalidTemperature),

    /// A path segment was not a number.
    #[error("Parameter '{parameter}' must be of type number, but received: '{provided}'")]
    TypeMismatch {
        parameter: &'static str,
        provided: String,
    },

    /// The request body could not be read as the expected JSON.
    #[error("Invalid input data")]
    InvalidBody { detail: String },

    /// The request body exceeded `security.max_body_size`.
    #[error("Request body exceeds the size limit")]
    PayloadTooLarge,

    #[error("No endpoint {0}")]
    NotFound(String),
}

/// An error response bound to the request path that produced it.
#[derive(Debug)]
pub struct ApiError {
    kind: ApiErrorKind,
    path: String,
}

impl ApiError {
    pub fn new(kind: impl Into<ApiErrorKind>, path: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            path: path.into(),
        }
    }

    pub fn kind(&self) -> &ApiErrorKind {
        &self.kind
    }

    pub fn status(&self) -> StatusCode {
        match self.kind {
            ApiErrorKind::InvalidTemperature(_)
            | ApiErrorKind::TypeMismatch { .. }
            | ApiErrorKind::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            ApiErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::InvalidTemperature(_) => "INVALID_TEMPERATURE_VALUE",
            ApiErrorKind::TypeMismatch { .. } => "TYPE_MISMATCH_ERROR",
            ApiErrorKind::InvalidBody { .. } => "VALIDATION_ERROR",
            ApiErrorKind::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ApiErrorKind::NotFound(_) => "NOT_FOUND",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    timestamp: u64,
    status: u16,
    error: &'static str,
    message: String,
    path: &'a str,
    error_code: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<InvalidTemperatureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invalid_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_limit: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    parameter_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provided_value: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    validation_errors: Option<BTreeMap<&'static str, &'a str>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = ErrorBody {
            timestamp: now_millis(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error"),
            message: self.kind.to_string(),
            path: &self.path,
            error_code: self.code(),
            kind: None,
            invalid_value: None,
            unit: None,
            max_limit: None,
            parameter_name: None,
            provided_value: None,
            validation_errors: None,
        };

        match &self.kind {
            ApiErrorKind::InvalidTemperature(err) => {
                body.kind = Some(err.kind());
                body.invalid_value = err.invalid_value();
                body.unit = Some(err.unit());
                body.max_limit = err.max_limit();
            }
            ApiErrorKind::TypeMismatch {
                parameter,
                provided,
            } => {
                body.parameter_name = Some(*parameter);
                body.provided_value = Some(provided.as_str());
            }
            ApiErrorKind::InvalidBody { detail } => {
                body.validation_errors = Some(BTreeMap::from([("body", detail.as_str())]));
            }
            ApiErrorKind::PayloadTooLarge | ApiErrorKind::NotFound(_) => {}
        }

        (status, Json(body)).into_response()
    }
}
