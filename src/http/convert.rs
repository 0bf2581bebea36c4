//! Conversion endpoints.
//!
//! Each direction is reachable two ways: the value in the path
//! (`GET /celsius-to-fahrenheit/25.0`) or in a JSON body
//! (`POST /celsius-to-fahrenheit` with `{"value": 25.0}`).

use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::conversion::{
    is_boiling_point, is_freezing_point, ConversionResult, Direction, TemperatureContext, Unit,
};
use crate::http::error::{ApiError, ApiErrorKind};
use crate::http::server::AppState;
use crate::observability::metrics;

/// JSON body for the POST endpoints. A missing `value` is reported by the
/// validator as a null temperature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionRequest {
    #[serde(default)]
    pub value: Option<f64>,
}

/// Classification of a Celsius temperature.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextResponse {
    pub celsius: f64,
    pub context: TemperatureContext,
    pub label: &'static str,
    pub freezing_point: bool,
    pub boiling_point: bool,
}

pub async fn celsius_to_fahrenheit_path(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(raw): Path<String>,
) -> Result<Json<ConversionResult>, ApiError> {
    let value = parse_number("celsius", &raw, uri.path())?;
    convert(&state, Direction::CelsiusToFahrenheit, Some(value), uri.path())
}

pub async fn fahrenheit_to_celsius_path(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(raw): Path<String>,
) -> Result<Json<ConversionResult>, ApiError> {
    let value = parse_number("fahrenheit", &raw, uri.path())?;
    convert(&state, Direction::FahrenheitToCelsius, Some(value), uri.path())
}

pub async fn celsius_to_fahrenheit_body(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> Result<Json<ConversionResult>, ApiError> {
    let request = read_body(payload, uri.path())?;
    convert(&state, Direction::CelsiusToFahrenheit, request.value, uri.path())
}

pub async fn fahrenheit_to_celsius_body(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> Result<Json<ConversionResult>, ApiError> {
    let request = read_body(payload, uri.path())?;
    convert(&state, Direction::FahrenheitToCelsius, request.value, uri.path())
}

/// Describe a Celsius temperature (freezing, body temperature, ...).
pub async fn temperature_context(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(raw): Path<String>,
) -> Result<Json<ContextResponse>, ApiError> {
    let value = parse_number("celsius", &raw, uri.path())?;
    let celsius = state
        .converter
        .validator()
        .validate(Some(value), Unit::Celsius)
        .map_err(|e| ApiError::new(e, uri.path()))?;

    let context = TemperatureContext::classify(celsius);
    Ok(Json(ContextResponse {
        celsius,
        context,
        label: context.label(),
        freezing_point: is_freezing_point(celsius),
        boiling_point: is_boiling_point(celsius),
    }))
}

fn convert(
    state: &AppState,
    direction: Direction,
    value: Option<f64>,
    path: &str,
) -> Result<Json<ConversionResult>, ApiError> {
    let outcome = state.converter.convert(direction, value);
    metrics::record_conversion(direction, &outcome);

    match outcome {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::info!(
                direction = direction.as_str(),
                kind = e.kind().as_str(),
                "Conversion rejected"
            );
            Err(ApiError::new(e, path))
        }
    }
}

/// Parse a path segment as a number. `NaN` and `inf` parse, and are then
/// rejected by the validator with a precise kind.
fn parse_number(parameter: &'static str, raw: &str, path: &str) -> Result<f64, ApiError> {
    raw.trim().parse::<f64>().map_err(|_| {
        ApiError::new(
            ApiErrorKind::TypeMismatch {
                parameter,
                provided: raw.to_string(),
            },
            path,
        )
    })
}

fn read_body(
    payload: Result<Json<ConversionRequest>, JsonRejection>,
    path: &str,
) -> Result<ConversionRequest, ApiError> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::info!(error = %rejection, "Request body too large");
            Err(ApiError::new(ApiErrorKind::PayloadTooLarge, path))
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected request body");
            Err(ApiError::new(
                ApiErrorKind::InvalidBody {
                    detail: rejection.body_text(),
                },
                path,
            ))
        }
    }
}
