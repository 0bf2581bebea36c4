//! Service status endpoints.

use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::conversion::types::{
    now_millis, CELSIUS_TO_FAHRENHEIT_FORMULA, FAHRENHEIT_TO_CELSIUS_FORMULA,
};
use crate::conversion::{ABSOLUTE_ZERO_CELSIUS, ABSOLUTE_ZERO_FAHRENHEIT};
use crate::http::server::AppState;

pub const SERVICE_NAME: &str = "Temperature Conversion API";

/// Liveness plus a self-test conversion of 0°C.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let mut body = json!({
        "status": "UP",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": now_millis(),
    });

    match state.converter.celsius_to_fahrenheit(0.0) {
        Ok(_) => {
            body["serviceCheck"] = json!("OK");
            (StatusCode::OK, Json(body))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Health self-test failed");
            body["serviceCheck"] = json!("ERROR");
            body["error"] = json!(e.to_string());
            (StatusCode::SERVICE_UNAVAILABLE, Json(body))
        }
    }
}

/// Formulas, limits and endpoint listing.
pub async fn info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let constants = BTreeMap::from([
        ("ABSOLUTE_ZERO_CELSIUS", ABSOLUTE_ZERO_CELSIUS),
        ("ABSOLUTE_ZERO_FAHRENHEIT", ABSOLUTE_ZERO_FAHRENHEIT),
        (
            "MAX_REASONABLE_TEMPERATURE",
            state.converter.validator().max_temperature(),
        ),
    ]);

    let endpoints = BTreeMap::from([
        ("GET /api/temperature/celsius-to-fahrenheit/{value}", "Convert Celsius to Fahrenheit"),
        ("GET /api/temperature/fahrenheit-to-celsius/{value}", "Convert Fahrenheit to Celsius"),
        ("POST /api/temperature/celsius-to-fahrenheit", "Convert Celsius to Fahrenheit (JSON)"),
        ("POST /api/temperature/fahrenheit-to-celsius", "Convert Fahrenheit to Celsius (JSON)"),
        ("GET /api/temperature/context/{celsius}", "Describe a Celsius temperature"),
        ("GET /api/temperature/health", "API status"),
        ("GET /api/temperature/info", "API information"),
    ]);

    Json(json!({
        "name": SERVICE_NAME,
        "description": "REST API for converting between Celsius and Fahrenheit",
        "version": env!("CARGO_PKG_VERSION"),
        "formulas": {
            "celsiusToFahrenheit": CELSIUS_TO_FAHRENHEIT_FORMULA,
            "fahrenheitToCelsius": FAHRENHEIT_TO_CELSIUS_FORMULA,
        },
        "constants": constants,
        "endpoints": endpoints,
    }))
}
