//! # Decimal approximations
//!
//! Fractions whose denominator has prime factors other than two and five have no finite decimal
//! representation. This module computes decimal approximations with a limited number of
//! significant digits, rounded in a configurable way.
//!
//! These approximations are meant for display, never for comparison of fractions.
use std::cmp::Ordering;
use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};


/// How to round the last digit when a value can't be represented exactly.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero, i.e. truncation.
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// Towards the nearest neighbor, away from zero when both are equally near.
    HalfUp,
    /// Towards the nearest neighbor, towards zero when both are equally near.
    HalfDown,
    /// Towards the nearest neighbor, to the even one when both are equally near.
    HalfEven,
}

impl RoundingMode {
    /// Whether a truncated quotient should be incremented in magnitude.
    ///
    /// # Arguments
    ///
    /// * `negative`: Whether the value being rounded is negative.
    /// * `odd`: Whether the truncated magnitude is odd.
    /// * `half`: How the discarded fraction compares to one half.
    fn rounds_away(self, negative: bool, odd: bool, half: Ordering) -> bool {
        match self {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfUp => half != Ordering::Less,
            RoundingMode::HalfDown => half == Ordering::Greater,
            RoundingMode::HalfEven => half == Ordering::Greater || (half == Ordering::Equal && odd),
        }
    }
}

/// Precision and rounding used when approximating a value with a decimal number.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct MathContext {
    precision: u32,
    rounding: RoundingMode,
}

impl MathContext {
    /// Generous enough for short periods such as that of `1/7` to be visible over many repetitions.
    pub const DEFAULT: MathContext = MathContext { precision: 500, rounding: RoundingMode::HalfUp };

    /// Create a new context.
    ///
    /// # Arguments
    ///
    /// * `precision`: Number of significant digits. At least one digit is always produced, so a
    /// precision of zero is raised to one. There is no unlimited precision, because most fractions
    /// have no finite decimal expansion.
    /// * `rounding`: How to round the last of those digits.
    pub const fn new(precision: u32, rounding: RoundingMode) -> Self {
        let precision = if precision == 0 { 1 } else { precision };

        Self { precision, rounding }
    }

    /// Number of significant digits.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounding of the last significant digit.
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A decimal number `unscaled * 10^(-scale)`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Decimal {
    unscaled: BigInt,
    scale: i64,
}

impl Decimal {
    /// Integer value of all digits, including the sign.
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Number of digits after the decimal point, negative if the unscaled value should be
    /// multiplied by a power of ten.
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Number of significant digits.
    pub fn precision(&self) -> u64 {
        digit_count(self.unscaled.magnitude())
    }

    /// Divide exactly and round to the context.
    ///
    /// An exact quotient has its trailing zeros removed, as long as the scale stays nonnegative.
    /// An inexact quotient always has exactly the context's number of digits.
    pub(crate) fn divide(numer: &BigInt, denom: &BigInt, context: &MathContext) -> Self {
        debug_assert!(denom.is_positive());

        if numer.is_zero() {
            return Self { unscaled: BigInt::zero(), scale: 0 };
        }

        let negative = numer.is_negative();
        let (dividend, divisor) = (numer.magnitude(), denom.magnitude());
        let precision = context.precision;

        // The quotient is within a factor ten of 10^magnitude, so this scale yields a quotient of
        // either `precision` or `precision + 1` digits
        let magnitude = digit_count(dividend) as i64 - digit_count(divisor) as i64;
        let mut scale = i64::from(precision) - magnitude;
        let (mut quotient, mut remainder, mut scaled_divisor) = scaled_div_rem(dividend, divisor, scale);
        if digit_count(&quotient) > u64::from(precision) {
            scale -= 1;
            (quotient, remainder, scaled_divisor) = scaled_div_rem(dividend, divisor, scale);
        }

        let ten = BigUint::from(10_u32);
        if remainder.is_zero() {
            while scale > 0 {
                let (shifted, digit) = quotient.div_rem(&ten);
                if !digit.is_zero() {
                    break;
                }
                quotient = shifted;
                scale -= 1;
            }
        } else {
            let half = (&remainder * 2_u32).cmp(&scaled_divisor);
            if context.rounding.rounds_away(negative, quotient.is_odd(), half) {
                quotient += 1_u32;
                // Carried into a new digit, as in 999 -> 1000
                if digit_count(&quotient) > u64::from(precision) {
                    quotient /= &ten;
                    scale -= 1;
                }
            }
        }

        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Self { unscaled: BigInt::from_biguint(sign, quotient), scale }
    }
}

/// Writes the plain notation, without an exponent.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        let digits = self.unscaled.magnitude().to_str_radix(10);

        if self.scale <= 0 || self.unscaled.is_zero() {
            let zeros = if self.unscaled.is_zero() { 0 } else { self.scale.unsigned_abs() as usize };
            write!(f, "{}{}{}", sign, digits, "0".repeat(zeros))
        } else {
            let scale = self.scale.unsigned_abs() as usize;
            if digits.len() > scale {
                let (integer, fractional) = digits.split_at(digits.len() - scale);
                write!(f, "{}{}.{}", sign, integer, fractional)
            } else {
                write!(f, "{}0.{}{}", sign, "0".repeat(scale - digits.len()), digits)
            }
        }
    }
}

/// Ten to the power `exponent`.
pub(crate) fn power_of_ten(exponent: u64) -> BigUint {
    num_traits::pow(BigUint::from(10_u32), exponent as usize)
}

fn digit_count(value: &BigUint) -> u64 {
    if value.is_zero() {
        1
    } else {
        value.to_str_radix(10).len() as u64
    }
}

/// Compute `dividend * 10^scale` divided by `divisor`.
///
/// Returns the quotient, the remainder, and the divisor that the remainder should be compared to.
fn scaled_div_rem(dividend: &BigUint, divisor: &BigUint, scale: i64) -> (BigUint, BigUint, BigUint) {
    let power = power_of_ten(scale.unsigned_abs());

    if scale >= 0 {
        let (quotient, remainder) = (dividend * power).div_rem(divisor);
        (quotient, remainder, divisor.clone())
    } else {
        let scaled_divisor = divisor * power;
        let (quotient, remainder) = dividend.div_rem(&scaled_divisor);
        (quotient, remainder, scaled_divisor)
    }
}
