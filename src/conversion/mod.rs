//! Temperature conversion core.
//!
//! # Data Flow
//! ```text
//! raw value (Option<f64>) + Direction
//!     → validator.rs (null, NaN/∞, absolute zero, upper bound)
//!     → decimal.rs (shortest decimal form of the input)
//!     → converter.rs (linear formula, half-up rounding to 2 places)
//!     → ConversionResult (immutable, owned by the caller)
//! ```
//!
//! # Design Decisions
//! - Everything here is pure and synchronous; no state survives a call
//! - Arithmetic is done on scaled integers so 37°C is exactly 98.60°F
//! - Failures are values (`InvalidTemperature`), never panics

pub mod context;
pub mod converter;
pub mod decimal;
pub mod error;
pub mod types;
pub mod units;
pub mod validator;

pub use context::{context_label, is_boiling_point, is_freezing_point, TemperatureContext};
pub use converter::Converter;
pub use error::{InvalidTemperature, InvalidTemperatureKind};
pub use types::{ConversionResult, Direction};
pub use units::{Unit, UnitParseError};
pub use validator::Validator;

/// Absolute zero on the Celsius scale.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Absolute zero on the Fahrenheit scale.
pub const ABSOLUTE_ZERO_FAHRENHEIT: f64 = -459.67;

/// Default upper bound accepted for either scale.
pub const MAX_REASONABLE_TEMPERATURE: f64 = 10000.0;

/// Hard ceiling on any configured upper bound. Keeps the scaled-integer
/// arithmetic of the converter inside `i128`.
pub const MAX_SUPPORTED_TEMPERATURE: f64 = 1e15;

/// Decimal places kept in converted values.
pub const DECIMAL_PRECISION: u32 = 2;
