//! Fixed-point decimal arithmetic for conversions.
//!
//! Values are held as `units / 10^scale` in an `i128`. Inputs are taken
//! from the shortest decimal string that round-trips the `f64`, so `37.0`
//! enters as exactly `37` and `98.6` as exactly `98.6`, never as the
//! nearest binary fraction.

/// Inputs with more fractional digits than this are rounded on entry.
/// Both formulas stay inside `i128` at this scale.
const MAX_SCALE: u32 = 30;

/// A signed decimal number `units × 10^-scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    units: i128,
    scale: u32,
}

impl Decimal {
    pub const fn new(units: i128, scale: u32) -> Self {
        Self { units, scale }
    }

    pub const fn from_int(value: i64) -> Self {
        Self {
            units: value as i128,
            scale: 0,
        }
    }

    /// Exact decimal form of a finite `f64`'s shortest representation.
    ///
    /// Returns `None` for NaN, infinities and magnitudes beyond `i128`.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        // `Display` for f64 never uses exponent notation and emits the
        // shortest digits that parse back to the same value.
        let text = value.to_string();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.as_str()),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

        let frac_part = frac_part.trim_end_matches('0');
        let int_part = int_part.trim_start_matches('0');

        let mut units: i128 = 0;
        let mut scale: u32 = 0;
        let mut round_up = false;
        for (i, ch) in int_part.chars().chain(frac_part.chars()).enumerate() {
            let digit = ch.to_digit(10)? as i128;
            if i >= int_part.len() {
                if scale == MAX_SCALE {
                    round_up = digit >= 5;
                    break;
                }
                scale += 1;
            }
            units = units.checked_mul(10)?.checked_add(digit)?;
        }
        if round_up {
            units = units.checked_add(1)?;
        }

        Some(Self {
            units: if negative { -units } else { units },
            scale,
        })
    }

    pub fn units(self) -> i128 {
        self.units
    }

    pub fn scale(self) -> u32 {
        self.scale
    }

    /// Nearest `f64` to this decimal.
    pub fn to_f64(self) -> f64 {
        // Both operands are exact for the magnitudes produced here, so the
        // division is correctly rounded.
        self.units as f64 / 10f64.powi(self.scale as i32)
    }

    /// `None` on `i128` overflow, as for every operation below.
    pub fn add(self, other: Self) -> Option<Self> {
        let scale = self.scale.max(other.scale);
        Some(Self {
            units: self
                .rescaled_units(scale)?
                .checked_add(other.rescaled_units(scale)?)?,
            scale,
        })
    }

    pub fn sub(self, other: Self) -> Option<Self> {
        self.add(Self {
            units: other.units.checked_neg()?,
            scale: other.scale,
        })
    }

    pub fn mul_int(self, factor: i64) -> Option<Self> {
        Some(Self {
            units: self.units.checked_mul(factor as i128)?,
            scale: self.scale,
        })
    }

    /// Divide by a positive integer, producing exactly `scale` fractional
    /// digits rounded half-up (away from zero on a tie).
    pub fn div_int(self, divisor: i64, scale: u32) -> Option<Self> {
        debug_assert!(divisor > 0, "divisor must be positive");
        let (numerator, denominator) = if scale >= self.scale {
            (
                self.units.checked_mul(pow10(scale - self.scale)?)?,
                divisor as i128,
            )
        } else {
            (
                self.units,
                (divisor as i128).checked_mul(pow10(self.scale - scale)?)?,
            )
        };

        Some(Self {
            units: div_half_up(numerator, denominator)?,
            scale,
        })
    }

    /// Round half-up to `scale` fractional digits. Widening is exact.
    pub fn round(self, scale: u32) -> Option<Self> {
        let units = if scale >= self.scale {
            self.rescaled_units(scale)?
        } else {
            div_half_up(self.units, pow10(self.scale - scale)?)?
        };
        Some(Self { units, scale })
    }

    fn rescaled_units(self, scale: u32) -> Option<i128> {
        self.units.checked_mul(pow10(scale - self.scale)?)
    }
}

fn pow10(exp: u32) -> Option<i128> {
    10i128.checked_pow(exp)
}

fn div_half_up(numerator: i128, denominator: i128) -> Option<i128> {
    let quotient = numerator.checked_div(denominator)?;
    let remainder = numerator.checked_rem(denominator)?;
    if remainder.checked_abs()?.checked_mul(2)? >= denominator {
        quotient.checked_add(numerator.signum())
    } else {
        Some(quotient)
    }
}
