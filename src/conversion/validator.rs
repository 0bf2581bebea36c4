//! Input validation against physical and practical bounds.

use super::error::InvalidTemperature;
use super::units::Unit;
use super::{MAX_REASONABLE_TEMPERATURE, MAX_SUPPORTED_TEMPERATURE};

/// Checks temperatures against absolute zero and an upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Validator {
    max_temperature: f64,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            max_temperature: MAX_REASONABLE_TEMPERATURE,
        }
    }
}

impl Validator {
    /// Create a validator with a custom upper bound, capped at
    /// [`MAX_SUPPORTED_TEMPERATURE`].
    pub fn new(max_temperature: f64) -> Self {
        Self {
            max_temperature: max_temperature.min(MAX_SUPPORTED_TEMPERATURE),
        }
    }

    pub fn max_temperature(&self) -> f64 {
        self.max_temperature
    }

    /// Validate `value` on the scale `unit`, returning it on success.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// absent, NaN, infinite, below absolute zero, above the maximum.
    /// Non-finite values are rejected before the range checks; checking
    /// the range first would report `+∞` as `ExceedsMaximum` and
    /// `-∞` as `BelowAbsoluteZero`.
    pub fn validate(&self, value: Option<f64>, unit: Unit) -> Result<f64, InvalidTemperature> {
        let value = value.ok_or(InvalidTemperature::NullValue { unit })?;

        if value.is_nan() {
            return Err(InvalidTemperature::NotANumber { unit });
        }

        if value.is_infinite() {
            return Err(InvalidTemperature::Infinite { value, unit });
        }

        if value < unit.absolute_zero() {
            return Err(InvalidTemperature::BelowAbsoluteZero { value, unit });
        }

        if value > self.max_temperature {
            return Err(InvalidTemperature::ExceedsMaximum {
                value,
                unit,
                max: self.max_temperature,
            });
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::error::InvalidTemperatureKind;

    fn kind_of(value: Option<f64>, unit: Unit) -> Option<InvalidTemperatureKind> {
        Validator::default().validate(value, unit).err().map(|e| e.kind())
    }

    #[test]
    fn test_accepts_bounds_inclusive() {
        let v = Validator::default();
        assert_eq!(v.validate(Some(-273.15), Unit::Celsius), Ok(-273.15));
        assert_eq!(v.validate(Some(-459.67), Unit::Fahrenheit), Ok(-459.67));
        assert_eq!(v.validate(Some(10000.0), Unit::Celsius), Ok(10000.0));
        assert_eq!(v.validate(Some(10000.0), Unit::Fahrenheit), Ok(10000.0));
    }

    #[test]
    fn test_absolute_zero_depends_on_unit() {
        assert_eq!(
            kind_of(Some(-273.16), Unit::Celsius),
            Some(InvalidTemperatureKind::BelowAbsoluteZero)
        );
        // -300 is below absolute zero in Celsius but fine in Fahrenheit.
        assert_eq!(kind_of(Some(-300.0), Unit::Fahrenheit), None);
        assert_eq!(
            kind_of(Some(-459.68), Unit::Fahrenheit),
            Some(InvalidTemperatureKind::BelowAbsoluteZero)
        );
    }

    #[test]
    fn test_rejects_above_maximum() {
        let err = Validator::default()
            .validate(Some(10000.01), Unit::Celsius)
            .unwrap_err();
        assert_eq!(
            err,
            InvalidTemperature::ExceedsMaximum {
                value: 10000.01,
                unit: Unit::Celsius,
                max: 10000.0
            }
        );
    }

    #[test]
    fn test_special_values() {
        assert_eq!(kind_of(None, Unit::Celsius), Some(InvalidTemperatureKind::NullValue));
        assert_eq!(
            kind_of(Some(f64::NAN), Unit::Celsius),
            Some(InvalidTemperatureKind::NotANumber)
        );
        assert_eq!(
            kind_of(Some(f64::INFINITY), Unit::Celsius),
            Some(InvalidTemperatureKind::Infinite)
        );
        assert_eq!(
            kind_of(Some(f64::NEG_INFINITY), Unit::Fahrenheit),
            Some(InvalidTemperatureKind::Infinite)
        );
    }

    #[test]
    fn test_custom_maximum() {
        let v = Validator::new(500.0);
        assert_eq!(v.max_temperature(), 500.0);
        assert!(v.validate(Some(500.0), Unit::Celsius).is_ok());

        let err = v.validate(Some(500.5), Unit::Fahrenheit).unwrap_err();
        assert_eq!(err.max_limit(), Some(500.0));
        assert_eq!(err.unit(), Unit::Fahrenheit);
    }

    #[test]
    fn test_maximum_is_capped() {
        let v = Validator::new(1e300);
        assert_eq!(v.max_temperature(), MAX_SUPPORTED_TEMPERATURE);
        assert_eq!(
            v.validate(Some(1e200), Unit::Celsius).unwrap_err().max_limit(),
            Some(MAX_SUPPORTED_TEMPERATURE)
        );
    }
}
