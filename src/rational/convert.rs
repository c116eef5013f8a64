//! # Conversions
//!
//! Creating fractions from the primitive number types, and approximating fractions with them.
use num_bigint::{BigInt, BigUint};
use num_traits::{FromPrimitive, ToPrimitive};

use crate::decimal::{power_of_ten, Decimal, MathContext, RoundingMode};
use crate::error::{Error, Result};
use crate::rational::Rational;

/// Enough digits to read back the nearest `f64` in all but extremely close ties.
const FLOAT_CONTEXT: MathContext = MathContext::new(40, RoundingMode::HalfEven);

/// Values that can be compared numerically with a fraction.
///
/// See `Rational::compare_numeric`.
pub trait ToRational {
    /// The exact value of `self` as a fraction.
    ///
    /// # Errors
    ///
    /// When the value has no representation as a fraction.
    fn to_rational(&self) -> Result<Rational>;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Self::from_integer(value)
                }
            }

            impl ToRational for $t {
                fn to_rational(&self) -> Result<Rational> {
                    Ok(Rational::from_integer(self.clone()))
                }
            }
        )*
    }
}
impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt, BigUint);

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            /// Reads the shortest decimal representation that round trips, such that `-1.75`
            /// becomes `-7/4` rather than the exact binary value.
            impl TryFrom<$t> for Rational {
                type Error = Error;

                fn try_from(value: $t) -> Result<Self> {
                    // Not finite values are rejected by the parser
                    Self::parse(&value.to_string())
                }
            }

            impl ToRational for $t {
                fn to_rational(&self) -> Result<Rational> {
                    Rational::try_from(*self)
                }
            }
        )*
    }
}
impl_float!(f32, f64);

impl ToRational for Rational {
    fn to_rational(&self) -> Result<Rational> {
        Ok(self.clone())
    }
}

impl ToRational for Decimal {
    fn to_rational(&self) -> Result<Rational> {
        Ok(Rational::from(self))
    }
}

impl From<&Decimal> for Rational {
    fn from(value: &Decimal) -> Self {
        let scale = value.scale();
        let power = BigInt::from(power_of_ten(scale.unsigned_abs()));

        if scale >= 0 {
            Self::canonicalize(value.unscaled().clone(), power)
        } else {
            Self::from_integer(value.unscaled() * power)
        }
    }
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_f32(n: f32) -> Option<Self> {
        Self::try_from(n).ok()
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::try_from(n).ok()
    }
}

/// Integer conversions truncate towards zero and return `None` when the integer part doesn't fit.
impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.truncate().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.truncate().to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.truncate().to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.truncate().to_u128()
    }

    /// Reads a decimal approximation with more significant digits than an `f64` can hold.
    fn to_f64(&self) -> Option<f64> {
        self.to_decimal_string_with(&FLOAT_CONTEXT).parse().ok()
    }
}

impl Rational {
    /// The integer part of this value, rounding towards zero.
    pub fn truncate(&self) -> BigInt {
        &self.numer / &self.denom
    }
}
