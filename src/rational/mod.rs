//! # Rational numbers
//!
//! An immutable fraction of two arbitrary size integers. All operations on fractions can be
//! performed through integer multiplication, addition and subtraction, and these are exact.
//!
//! Values are always kept in canonical form: the denominator is positive, and numerator and
//! denominator have no common factor. The sign of a fraction is kept in the numerator.
use std::fmt;
use std::sync::OnceLock;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::decimal::{Decimal, MathContext};
use crate::error::{Error, Result};

pub use convert::ToRational;

mod arithmetic;
mod convert;
mod macros;
mod ordering;
#[cfg(feature = "serde")]
mod serialization;
#[cfg(test)]
mod test;

/// An arbitrary precision fraction.
///
/// Cancellation is done on construction, such that repeated multiplication and division with the
/// same value doesn't grow the numbers involved.
#[derive(Clone)]
pub struct Rational {
    /// Carries the sign of the value.
    numer: BigInt,
    /// Always positive.
    denom: BigInt,
    /// Decimal approximation using the default `MathContext`, computed on first use.
    decimal: OnceLock<String>,
}

impl Rational {
    /// Create a new fraction from a numerator and a denominator.
    ///
    /// Because the denominator is always kept positive, it is possible that the signs of both
    /// numerator and denominator are inverted on construction. Common factors are cancelled.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` if the denominator is zero.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(Self::canonicalize(numer.into(), denom))
    }

    /// Create a new fraction from the text representations of a numerator and a denominator.
    ///
    /// Both values need to be signed integers, such as `-12` or `+7`.
    ///
    /// # Errors
    ///
    /// `Error::Parse` if either text isn't an integer, `Error::DivisionByZero` if the denominator
    /// is zero.
    pub fn from_strs(numer: &str, denom: &str) -> Result<Self> {
        let numer = crate::parse::integer(numer)?;
        let denom = crate::parse::integer(denom)?;

        Self::new(numer, denom)
    }

    /// Create a new fraction representing an integer value.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self::from_canonical(value.into(), BigInt::one())
    }

    /// Bring a numerator and nonzero denominator in canonical form.
    pub(crate) fn canonicalize(mut numer: BigInt, mut denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());

        // Cross multiplication during comparison relies on a positive denominator
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        if numer.is_zero() {
            return Self::zero();
        }

        let gcd = numer.gcd(&denom);
        if !gcd.is_one() {
            numer /= &gcd;
            denom /= &gcd;
        }

        Self::from_canonical(numer, denom)
    }

    /// Wrap a numerator and denominator that are already in canonical form.
    pub(crate) fn from_canonical(numer: BigInt, denom: BigInt) -> Self {
        let value = Self { numer, denom, decimal: OnceLock::new() };
        debug_assert!(value.is_canonical());

        value
    }

    fn is_canonical(&self) -> bool {
        self.denom.is_positive() && self.numer.gcd(&self.denom).is_one()
    }

    /// The numerator, which carries the sign of this value.
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// The denominator, which is always positive.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Take this value apart into its numerator and denominator.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    /// The sign of this value.
    ///
    /// Zero has no sign, regardless of how it was constructed.
    pub fn signum(&self) -> Sign {
        self.numer.sign()
    }

    /// Whether this value is strictly larger than zero.
    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    /// Whether this value is strictly smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// Whether this value has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Human-readable fractional representation, such as `-2/3`.
    ///
    /// The denominator is left out when it equals one. The result can always be parsed exactly.
    pub fn to_fraction_string(&self) -> String {
        self.to_string()
    }

    /// Approximate this value with a decimal number, using the default `MathContext`.
    ///
    /// The default context has a precision of 500 significant digits and rounds half up. The
    /// result is computed once and kept for later calls.
    pub fn to_decimal_string(&self) -> &str {
        if let Some(text) = self.decimal.get() {
            return text;
        }

        // Concurrent callers compute the same text, the first one stored is kept
        let text = self.to_decimal(&MathContext::DEFAULT).to_string();
        self.decimal.get_or_init(|| text)
    }

    /// Approximate this value with a decimal number, using the given precision and rounding.
    pub fn to_decimal_string_with(&self, context: &MathContext) -> String {
        self.to_decimal(context).to_string()
    }

    /// Approximate this value with a decimal number.
    ///
    /// This conversion is not exact for values that have no terminating decimal expansion, and
    /// should only be used for display purposes.
    pub fn to_decimal(&self, context: &MathContext) -> Decimal {
        Decimal::divide(&self.numer, &self.denom, context)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_canonical(BigInt::zero(), BigInt::one())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(1)
    }

    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Rational {
    /// Writes `numer/denom`. The denominator is omitted when it is one, unless the alternate flag
    /// is set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom.is_one() && !f.alternate() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rational")
            .field("numer", &self.numer)
            .field("denom", &self.denom)
            .finish()
    }
}
