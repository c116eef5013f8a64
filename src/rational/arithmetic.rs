//! # Field operations
//!
//! All results are in canonical form. The operator traits are implemented for all combinations of
//! owned and borrowed operands, and forward to the functions in this module that work on
//! references.
use num_bigint::Sign;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};
use crate::rational::Rational;

impl Rational {
    /// Divide by another value.
    ///
    /// Computed as a multiplication with the reciprocal of `rhs`.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Rational) -> Result<Rational> {
        Ok(product(self, &rhs.reciprocal()?))
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` if this value is zero.
    pub fn reciprocal(&self) -> Result<Rational> {
        match self.numer.sign() {
            Sign::Plus => Ok(Rational::from_canonical(self.denom.clone(), self.numer.clone())),
            Sign::Minus => Ok(Rational::from_canonical(-&self.denom, -&self.numer)),
            Sign::NoSign => Err(Error::DivisionByZero),
        }
    }

    /// The absolute value.
    pub fn abs(&self) -> Rational {
        Rational::from_canonical(self.numer.abs(), self.denom.clone())
    }

    /// Raise this value to an integer power.
    ///
    /// Any value to the power zero is one, including zero itself. A negative exponent raises the
    /// reciprocal.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` if this value is zero and the exponent is negative.
    pub fn pow(&self, exponent: i32) -> Result<Rational> {
        if exponent == 0 {
            return Ok(Rational::one());
        }
        if self.is_zero() {
            return if exponent > 0 {
                Ok(Rational::zero())
            } else {
                Err(Error::DivisionByZero)
            };
        }

        let base = if exponent < 0 { self.reciprocal()? } else { self.clone() };
        let exponent = exponent.unsigned_abs();

        // Powers of coprime integers are coprime
        Ok(Rational::from_canonical(base.numer.pow(exponent), base.denom.pow(exponent)))
    }
}

fn sum(left: &Rational, right: &Rational) -> Rational {
    if left.denom == right.denom {
        Rational::canonicalize(&left.numer + &right.numer, left.denom.clone())
    } else {
        Rational::canonicalize(
            &left.numer * &right.denom + &right.numer * &left.denom,
            &left.denom * &right.denom,
        )
    }
}

fn difference(left: &Rational, right: &Rational) -> Rational {
    if left.denom == right.denom {
        Rational::canonicalize(&left.numer - &right.numer, left.denom.clone())
    } else {
        Rational::canonicalize(
            &left.numer * &right.denom - &right.numer * &left.denom,
            &left.denom * &right.denom,
        )
    }
}

/// Multiply, cancelling before the multiplication happens.
///
/// Equal factors on opposite sides are cancelled without computing a gcd. This is what keeps
/// repeated division and multiplication by the same value from growing the representation.
fn product(left: &Rational, right: &Rational) -> Rational {
    let upper_left_lower_right = left.numer == right.denom;
    let lower_left_upper_right = left.denom == right.numer;

    match (upper_left_lower_right, lower_left_upper_right) {
        (true, true) => Rational::one(),
        (true, false) => Rational::canonicalize(right.numer.clone(), left.denom.clone()),
        (false, true) => Rational::canonicalize(left.numer.clone(), right.denom.clone()),
        (false, false) => {
            let gcd_upper_left_lower_right = left.numer.gcd(&right.denom);
            let gcd_lower_left_upper_right = left.denom.gcd(&right.numer);

            let numer = (&left.numer / &gcd_upper_left_lower_right)
                * (&right.numer / &gcd_lower_left_upper_right);
            let denom = (&left.denom / &gcd_lower_left_upper_right)
                * (&right.denom / &gcd_upper_left_lower_right);

            Rational::from_canonical(numer, denom)
        },
    }
}

fn quotient(left: &Rational, right: &Rational) -> Rational {
    match left.checked_div(right) {
        Ok(value) => value,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

macro_rules! forward_binary_operation {
    ($operation:ident, $method:ident, $assign_operation:ident, $assign_method:ident, $implementation:ident) => {
        impl $operation<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                $implementation(self, rhs)
            }
        }

        impl $operation<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                $implementation(self, &rhs)
            }
        }

        impl $operation<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                $implementation(&self, rhs)
            }
        }

        impl $operation<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                $implementation(&self, &rhs)
            }
        }

        impl $assign_operation<&Rational> for Rational {
            fn $assign_method(&mut self, rhs: &Rational) {
                *self = $implementation(self, rhs);
            }
        }

        impl $assign_operation<Rational> for Rational {
            fn $assign_method(&mut self, rhs: Rational) {
                *self = $implementation(self, &rhs);
            }
        }
    }
}

mod add {
    use std::iter::Sum;
    use std::ops::{Add, AddAssign};

    use num_traits::Zero;

    use crate::rational::Rational;

    use super::sum;

    forward_binary_operation!(Add, add, AddAssign, add_assign, sum);

    impl Sum for Rational {
        fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }

    impl<'a> Sum<&'a Rational> for Rational {
        fn sum<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }
}

mod sub {
    use std::ops::{Neg, Sub, SubAssign};

    use crate::rational::Rational;

    use super::difference;

    forward_binary_operation!(Sub, sub, SubAssign, sub_assign, difference);

    impl Neg for Rational {
        type Output = Rational;

        fn neg(self) -> Self::Output {
            Rational::from_canonical(-self.numer, self.denom)
        }
    }

    impl Neg for &Rational {
        type Output = Rational;

        fn neg(self) -> Self::Output {
            Rational::from_canonical(-&self.numer, self.denom.clone())
        }
    }
}

mod mul {
    use std::iter::Product;
    use std::ops::{Mul, MulAssign};

    use num_traits::One;

    use crate::rational::Rational;

    use super::product;

    forward_binary_operation!(Mul, mul, MulAssign, mul_assign, product);

    impl Product for Rational {
        fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total * item)
        }
    }

    impl<'a> Product<&'a Rational> for Rational {
        fn product<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total * item)
        }
    }
}

mod div {
    use std::ops::{Div, DivAssign};

    use crate::rational::Rational;

    use super::quotient;

    // Like integer division, the operator panics on a zero divisor. Use `checked_div` otherwise.
    forward_binary_operation!(Div, div, DivAssign, div_assign, quotient);
}
