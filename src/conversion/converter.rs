//! Celsius ⇄ Fahrenheit conversion.

use super::decimal::Decimal;
use super::error::InvalidTemperature;
use super::types::{ConversionResult, Direction};
use super::validator::Validator;
use super::DECIMAL_PRECISION;

/// Digits carried through the division before the final rounding.
const GUARD_PRECISION: u32 = DECIMAL_PRECISION + 2;

/// Validates and converts temperatures between the two scales.
///
/// Holds no per-call state; it is `Copy` and can be shared freely across
/// request handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Converter {
    validator: Validator,
}

impl Converter {
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// `F = (C × 9/5) + 32`, rounded half-up to two decimals.
    pub fn celsius_to_fahrenheit(
        &self,
        celsius: impl Into<Option<f64>>,
    ) -> Result<ConversionResult, InvalidTemperature> {
        self.convert(Direction::CelsiusToFahrenheit, celsius)
    }

    /// `C = (F - 32) × 5/9`, rounded half-up to two decimals.
    pub fn fahrenheit_to_celsius(
        &self,
        fahrenheit: impl Into<Option<f64>>,
    ) -> Result<ConversionResult, InvalidTemperature> {
        self.convert(Direction::FahrenheitToCelsius, fahrenheit)
    }

    /// Validate `value` on the direction's source scale and convert it.
    pub fn convert(
        &self,
        direction: Direction,
        value: impl Into<Option<f64>>,
    ) -> Result<ConversionResult, InvalidTemperature> {
        let unit = direction.source();
        let value = self.validator.validate(value.into(), unit)?;

        // The validator caps every limit at MAX_SUPPORTED_TEMPERATURE, so
        // overflow is out of reach for validated input.
        let converted = scaled_conversion(direction, value).ok_or(
            InvalidTemperature::ExceedsMaximum {
                value,
                unit,
                max: self.validator.max_temperature(),
            },
        )?;

        tracing::debug!(
            direction = direction.as_str(),
            original = value,
            converted = %converted.to_f64(),
            "Temperature converted"
        );

        Ok(ConversionResult::new(direction, value, converted.to_f64()))
    }
}

fn scaled_conversion(direction: Direction, value: f64) -> Option<Decimal> {
    let input = Decimal::from_f64(value)?;
    let converted = match direction {
        Direction::CelsiusToFahrenheit => input
            .mul_int(9)?
            .div_int(5, GUARD_PRECISION)?
            .add(Decimal::from_int(32))?,
        Direction::FahrenheitToCelsius => input
            .sub(Decimal::from_int(32))?
            .mul_int(5)?
            .div_int(9, GUARD_PRECISION)?,
    };
    converted.round(DECIMAL_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::error::InvalidTemperatureKind;
    use crate::conversion::units::Unit;
    use crate::conversion::MAX_SUPPORTED_TEMPERATURE;

    fn c2f(c: f64) -> f64 {
        Converter::default()
            .celsius_to_fahrenheit(c)
            .expect("valid celsius")
            .converted_value()
    }

    fn f2c(f: f64) -> f64 {
        Converter::default()
            .fahrenheit_to_celsius(f)
            .expect("valid fahrenheit")
            .converted_value()
    }

    #[test]
    fn test_fixed_points() {
        assert_eq!(c2f(0.0), 32.0);
        assert_eq!(c2f(100.0), 212.0);
        assert_eq!(c2f(37.0), 98.6);
        assert_eq!(c2f(-40.0), -40.0);
        assert_eq!(c2f(25.0), 77.0);
    }

    #[test]
    fn test_inverse_fixed_points() {
        assert_eq!(f2c(32.0), 0.0);
        assert_eq!(f2c(212.0), 100.0);
        assert_eq!(f2c(98.6), 37.0);
        assert_eq!(f2c(-40.0), -40.0);
        assert_eq!(f2c(77.0), 25.0);
    }

    #[test]
    fn test_rounding_is_half_up() {
        // 33.8°F → 1.0°C exactly; 33.9°F → 1.0555… → 1.06
        assert_eq!(f2c(33.9), 1.06);
        // -17.7777… rounds away from zero
        assert_eq!(f2c(0.0), -17.78);
        // 0.125 × 9/5 = 0.225 → 32.225 → 32.23
        assert_eq!(c2f(0.125), 32.23);
    }

    #[test]
    fn test_absolute_zero_converts() {
        assert_eq!(c2f(-273.15), -459.67);
        assert_eq!(f2c(-459.67), -273.15);
    }

    #[test]
    fn test_boundaries() {
        let converter = Converter::default();
        assert!(converter.celsius_to_fahrenheit(-273.15).is_ok());
        assert_eq!(
            converter.celsius_to_fahrenheit(-273.16).unwrap_err().kind(),
            InvalidTemperatureKind::BelowAbsoluteZero
        );
        assert_eq!(c2f(10000.0), 18032.0);
        assert_eq!(
            converter.celsius_to_fahrenheit(10000.01).unwrap_err().kind(),
            InvalidTemperatureKind::ExceedsMaximum
        );
    }

    #[test]
    fn test_special_values_propagate_validator_errors() {
        let converter = Converter::default();
        assert_eq!(
            converter.celsius_to_fahrenheit(f64::NAN).unwrap_err().kind(),
            InvalidTemperatureKind::NotANumber
        );
        assert_eq!(
            converter.celsius_to_fahrenheit(f64::INFINITY).unwrap_err().kind(),
            InvalidTemperatureKind::Infinite
        );
        assert_eq!(
            converter.celsius_to_fahrenheit(None).unwrap_err(),
            InvalidTemperature::NullValue { unit: Unit::Celsius }
        );
        assert_eq!(
            converter.fahrenheit_to_celsius(None).unwrap_err(),
            InvalidTemperature::NullValue { unit: Unit::Fahrenheit }
        );
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        // Above 5537.77°C the Fahrenheit side exceeds the default ceiling,
        // so widen it to cover the whole Celsius range.
        let converter = Converter::new(Validator::new(20000.0));
        let round_trip = |c: f64| {
            let f = converter.celsius_to_fahrenheit(c).unwrap().converted_value();
            converter.fahrenheit_to_celsius(f).unwrap().converted_value()
        };

        let mut c = -273.15;
        while c <= 10000.0 {
            let back = round_trip(c);
            assert!((back - c).abs() <= 0.01, "{c} round-tripped to {back}");
            c += 13.37;
        }
        for c in [-273.15, -40.0, 0.0, 0.01, 36.6, 99.99, 10000.0] {
            let back = round_trip(c);
            assert!((back - c).abs() <= 0.01, "{c} round-tripped to {back}");
        }
    }

    #[test]
    fn test_idempotent_apart_from_timestamp() {
        let converter = Converter::default();
        let first = converter.fahrenheit_to_celsius(451.0).unwrap();
        let second = converter.fahrenheit_to_celsius(451.0).unwrap();
        assert_eq!(first.converted_value(), second.converted_value());
        assert_eq!(first.formula(), second.formula());
        assert_eq!(first.original_unit(), Unit::Fahrenheit);
        assert_eq!(first.converted_unit(), Unit::Celsius);
    }

    #[test]
    fn test_custom_limit_is_applied() {
        let converter = Converter::new(Validator::new(100.0));
        assert!(converter.celsius_to_fahrenheit(100.0).is_ok());
        let err = converter.fahrenheit_to_celsius(212.0).unwrap_err();
        assert_eq!(err.max_limit(), Some(100.0));
    }

    #[test]
    fn test_oversized_limit_is_capped() {
        let converter = Converter::new(Validator::new(1e38));
        let err = converter.celsius_to_fahrenheit(1e38).unwrap_err();
        assert_eq!(err.kind(), InvalidTemperatureKind::ExceedsMaximum);
        assert_eq!(err.max_limit(), Some(MAX_SUPPORTED_TEMPERATURE));

        let err = converter.fahrenheit_to_celsius(1e200).unwrap_err();
        assert_eq!(err.kind(), InvalidTemperatureKind::ExceedsMaximum);
    }

    #[test]
    fn test_converts_at_supported_ceiling() {
        let converter = Converter::new(Validator::new(MAX_SUPPORTED_TEMPERATURE));
        let result = converter
            .celsius_to_fahrenheit(MAX_SUPPORTED_TEMPERATURE)
            .unwrap();
        assert_eq!(result.converted_value(), 1_800_000_000_000_032.0);

        let result = converter
            .fahrenheit_to_celsius(MAX_SUPPORTED_TEMPERATURE)
            .unwrap();
        assert!((result.converted_value() - 555_555_555_555_537.78).abs() < 0.1);
    }
}
