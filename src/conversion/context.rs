//! Human-readable classification of Celsius temperatures.

use std::fmt;

use serde::Serialize;

const POINT_TOLERANCE: f64 = 0.01;
const BODY_TEMPERATURE: f64 = 37.0;
const BODY_TOLERANCE: f64 = 0.5;

/// True within 0.01 of the freezing point of water.
pub fn is_freezing_point(celsius: f64) -> bool {
    celsius.abs() < POINT_TOLERANCE
}

/// True within 0.01 of the boiling point of water at sea level.
pub fn is_boiling_point(celsius: f64) -> bool {
    (celsius - 100.0).abs() < POINT_TOLERANCE
}

/// Classification of a Celsius temperature. Earlier variants take priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureContext {
    FreezingPoint,
    BoilingPoint,
    BodyTemperature,
    BelowFreezing,
    AboveBoiling,
    ComfortableRoom,
    Normal,
}

impl TemperatureContext {
    pub fn classify(celsius: f64) -> Self {
        if is_freezing_point(celsius) {
            TemperatureContext::FreezingPoint
        } else if is_boiling_point(celsius) {
            TemperatureContext::BoilingPoint
        } else if (celsius - BODY_TEMPERATURE).abs() < BODY_TOLERANCE {
            TemperatureContext::BodyTemperature
        } else if celsius < 0.0 {
            TemperatureContext::BelowFreezing
        } else if celsius > 100.0 {
            TemperatureContext::AboveBoiling
        } else if (20.0..=25.0).contains(&celsius) {
            TemperatureContext::ComfortableRoom
        } else {
            TemperatureContext::Normal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemperatureContext::FreezingPoint => "freezing point",
            TemperatureContext::BoilingPoint => "boiling point",
            TemperatureContext::BodyTemperature => "body temperature",
            TemperatureContext::BelowFreezing => "below freezing",
            TemperatureContext::AboveBoiling => "above boiling",
            TemperatureContext::ComfortableRoom => "comfortable room temperature",
            TemperatureContext::Normal => "normal temperature",
        }
    }
}

impl fmt::Display for TemperatureContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for a Celsius temperature; see [`TemperatureContext::classify`].
pub fn context_label(celsius: f64) -> &'static str {
    TemperatureContext::classify(celsius).label()
}
