//! Supported temperature scales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ABSOLUTE_ZERO_CELSIUS, ABSOLUTE_ZERO_FAHRENHEIT};

/// A temperature scale.
///
/// Serializes as its display name (`"Celsius"` / `"Fahrenheit"`), which is
/// the form the HTTP API reports in `originalUnit` and `convertedUnit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    /// Unit symbol, e.g. `°C`.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    /// Human readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
        }
    }

    /// Lowest physically possible value on this scale.
    pub fn absolute_zero(self) -> f64 {
        match self {
            Unit::Celsius => ABSOLUTE_ZERO_CELSIUS,
            Unit::Fahrenheit => ABSOLUTE_ZERO_FAHRENHEIT,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.symbol())
    }
}

/// Error returned when a unit name cannot be recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitParseError {
    #[error("temperature unit must not be empty")]
    Empty,

    #[error("invalid temperature unit: {0}. Valid units are: Celsius, C, °C, Fahrenheit, F, °F")]
    Unknown(String),
}

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(UnitParseError::Empty);
        }

        match trimmed.to_lowercase().as_str() {
            "celsius" | "c" | "°c" => Ok(Unit::Celsius),
            "fahrenheit" | "f" | "°f" => Ok(Unit::Fahrenheit),
            _ => Err(UnitParseError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_names_letters_and_symbols() {
        assert_eq!("celsius".parse::<Unit>(), Ok(Unit::Celsius));
        assert_eq!(" C ".parse::<Unit>(), Ok(Unit::Celsius));
        assert_eq!("°C".parse::<Unit>(), Ok(Unit::Celsius));
        assert_eq!("FAHRENHEIT".parse::<Unit>(), Ok(Unit::Fahrenheit));
        assert_eq!("f".parse::<Unit>(), Ok(Unit::Fahrenheit));
        assert_eq!("°F".parse::<Unit>(), Ok(Unit::Fahrenheit));
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert_eq!("   ".parse::<Unit>(), Err(UnitParseError::Empty));

        let err = "kelvin".parse::<Unit>().unwrap_err();
        assert!(err.to_string().contains("kelvin"));
        assert!(err.to_string().contains("Fahrenheit, F, °F"));
    }

    #[test]
    fn test_display_and_constants() {
        assert_eq!(Unit::Celsius.to_string(), "Celsius (°C)");
        assert_eq!(Unit::Fahrenheit.to_string(), "Fahrenheit (°F)");
        assert_eq!(Unit::Celsius.absolute_zero(), -273.15);
        assert_eq!(Unit::Fahrenheit.absolute_zero(), -459.67);
    }

    #[test]
    fn test_serializes_as_display_name() {
        assert_eq!(serde_json::to_string(&Unit::Celsius).unwrap(), "\"Celsius\"");
        assert_eq!(serde_json::to_string(&Unit::Fahrenheit).unwrap(), "\"Fahrenheit\"");
    }
}
