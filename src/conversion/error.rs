//! Validation failures for temperature input.

use serde::Serialize;
use thiserror::Error;

use super::units::Unit;
use super::{ABSOLUTE_ZERO_CELSIUS, ABSOLUTE_ZERO_FAHRENHEIT};

/// A temperature rejected by the validator.
///
/// Each variant carries what a caller needs to render a precise message
/// without re-deriving it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidTemperature {
    /// No value was supplied.
    #[error("Temperature value must not be null")]
    NullValue { unit: Unit },

    /// Value lies below absolute zero for its scale.
    #[error(
        "Invalid temperature: {value:.2}{symbol} is below absolute zero. \
         Absolute zero is {abs_c}°C ({abs_f}°F).",
        symbol = .unit.symbol(),
        abs_c = ABSOLUTE_ZERO_CELSIUS,
        abs_f = ABSOLUTE_ZERO_FAHRENHEIT
    )]
    BelowAbsoluteZero { value: f64, unit: Unit },

    /// Value lies above the configured maximum.
    #[error(
        "Invalid temperature: {value:.2}{symbol} exceeds the maximum limit of {max:.1} degrees.",
        symbol = .unit.symbol()
    )]
    ExceedsMaximum { value: f64, unit: Unit, max: f64 },

    #[error("Invalid temperature: value must not be NaN (Not a Number)")]
    NotANumber { unit: Unit },

    #[error("Invalid temperature: value must not be infinite ({value}{symbol})", symbol = .unit.symbol())]
    Infinite { value: f64, unit: Unit },
}

/// Discriminant of [`InvalidTemperature`], used as a stable wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvalidTemperatureKind {
    NullValue,
    BelowAbsoluteZero,
    ExceedsMaximum,
    NotANumber,
    Infinite,
}

impl InvalidTemperatureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InvalidTemperatureKind::NullValue => "NULL_VALUE",
            InvalidTemperatureKind::BelowAbsoluteZero => "BELOW_ABSOLUTE_ZERO",
            InvalidTemperatureKind::ExceedsMaximum => "EXCEEDS_MAXIMUM",
            InvalidTemperatureKind::NotANumber => "NOT_A_NUMBER",
            InvalidTemperatureKind::Infinite => "INFINITE",
        }
    }
}

impl InvalidTemperature {
    pub fn kind(&self) -> InvalidTemperatureKind {
        match self {
            InvalidTemperature::NullValue { .. } => InvalidTemperatureKind::NullValue,
            InvalidTemperature::BelowAbsoluteZero { .. } => InvalidTemperatureKind::BelowAbsoluteZero,
            InvalidTemperature::ExceedsMaximum { .. } => InvalidTemperatureKind::ExceedsMaximum,
            InvalidTemperature::NotANumber { .. } => InvalidTemperatureKind::NotANumber,
            InvalidTemperature::Infinite { .. } => InvalidTemperatureKind::Infinite,
        }
    }

    /// Scale the rejected value was expressed in.
    pub fn unit(&self) -> Unit {
        match self {
            InvalidTemperature::NullValue { unit }
            | InvalidTemperature::BelowAbsoluteZero { unit, .. }
            | InvalidTemperature::ExceedsMaximum { unit, .. }
            | InvalidTemperature::NotANumber { unit }
            | InvalidTemperature::Infinite { unit, .. } => *unit,
        }
    }

    /// The offending value, when it can be represented.
    ///
    /// NaN and absent values have no meaningful number to report.
    pub fn invalid_value(&self) -> Option<f64> {
        match self {
            InvalidTemperature::BelowAbsoluteZero { value, .. }
            | InvalidTemperature::ExceedsMaximum { value, .. }
            | InvalidTemperature::Infinite { value, .. } => Some(*value),
            InvalidTemperature::NullValue { .. } | InvalidTemperature::NotANumber { .. } => None,
        }
    }

    pub fn max_limit(&self) -> Option<f64> {
        match self {
            InvalidTemperature::ExceedsMaximum { max, .. } => Some(*max),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_absolute_zero_reports_both_scales() {
        let err = InvalidTemperature::BelowAbsoluteZero {
            value: -500.0,
            unit: Unit::Fahrenheit,
        };
        let msg = err.to_string();
        assert!(msg.contains("-500.00°F"));
        assert!(msg.contains("-273.15°C"));
        assert!(msg.contains("-459.67°F"));
    }

    #[test]
    fn test_exceeds_maximum_message() {
        let err = InvalidTemperature::ExceedsMaximum {
            value: 10000.01,
            unit: Unit::Celsius,
            max: 10000.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid temperature: 10000.01°C exceeds the maximum limit of 10000.0 degrees."
        );
        assert_eq!(err.max_limit(), Some(10000.0));
        assert_eq!(err.invalid_value(), Some(10000.01));
    }

    #[test]
    fn test_kind_and_accessors() {
        let err = InvalidTemperature::NotANumber { unit: Unit::Celsius };
        assert_eq!(err.kind(), InvalidTemperatureKind::NotANumber);
        assert_eq!(err.kind().as_str(), "NOT_A_NUMBER");
        assert_eq!(err.unit(), Unit::Celsius);
        assert_eq!(err.invalid_value(), None);
        assert!(err.to_string().contains("NaN"));

        let err = InvalidTemperature::Infinite {
            value: f64::INFINITY,
            unit: Unit::Fahrenheit,
        };
        assert!(err.to_string().contains("inf°F"));
    }

    #[test]
    fn test_kind_serializes_like_as_str() {
        for kind in [
            InvalidTemperatureKind::NullValue,
            InvalidTemperatureKind::BelowAbsoluteZero,
            InvalidTemperatureKind::ExceedsMaximum,
            InvalidTemperatureKind::NotANumber,
            InvalidTemperatureKind::Infinite,
        ] {
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::Value::String(kind.as_str().to_string())
            );
        }
    }
}
