//! Conversion result and direction types.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::units::Unit;

/// Formula applied for Celsius → Fahrenheit.
pub const CELSIUS_TO_FAHRENHEIT_FORMULA: &str = "F = (C × 9/5) + 32";

/// Formula applied for Fahrenheit → Celsius.
pub const FAHRENHEIT_TO_CELSIUS_FORMULA: &str = "C = (F - 32) × 5/9";

/// Which of the two formulas to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
}

impl Direction {
    /// The direction that converts away from `unit`.
    pub fn from_source(unit: Unit) -> Self {
        match unit {
            Unit::Celsius => Direction::CelsiusToFahrenheit,
            Unit::Fahrenheit => Direction::FahrenheitToCelsius,
        }
    }

    pub fn source(self) -> Unit {
        match self {
            Direction::CelsiusToFahrenheit => Unit::Celsius,
            Direction::FahrenheitToCelsius => Unit::Fahrenheit,
        }
    }

    pub fn target(self) -> Unit {
        match self {
            Direction::CelsiusToFahrenheit => Unit::Fahrenheit,
            Direction::FahrenheitToCelsius => Unit::Celsius,
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            Direction::CelsiusToFahrenheit => CELSIUS_TO_FAHRENHEIT_FORMULA,
            Direction::FahrenheitToCelsius => FAHRENHEIT_TO_CELSIUS_FORMULA,
        }
    }

    /// Route segment and metrics label, e.g. `celsius-to-fahrenheit`.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::CelsiusToFahrenheit => "celsius-to-fahrenheit",
            Direction::FahrenheitToCelsius => "fahrenheit-to-celsius",
        }
    }
}

/// Outcome of one successful conversion.
///
/// Built once by the converter and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    original_value: f64,
    original_unit: Unit,
    converted_value: f64,
    converted_unit: Unit,
    formula: &'static str,
    /// Creation time in milliseconds since the Unix epoch.
    timestamp: u64,
}

impl ConversionResult {
    pub(crate) fn new(direction: Direction, original_value: f64, converted_value: f64) -> Self {
        Self {
            original_value,
            original_unit: direction.source(),
            converted_value,
            converted_unit: direction.target(),
            formula: direction.formula(),
            timestamp: now_millis(),
        }
    }

    pub fn original_value(&self) -> f64 {
        self.original_value
    }

    pub fn original_unit(&self) -> Unit {
        self.original_unit
    }

    pub fn converted_value(&self) -> f64 {
        self.converted_value
    }

    pub fn converted_unit(&self) -> Unit {
        self.converted_unit
    }

    pub fn formula(&self) -> &'static str {
        self.formula
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
