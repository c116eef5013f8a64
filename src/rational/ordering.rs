//! # Comparison
//!
//! Values are compared exactly, never through a floating point or decimal approximation.
//!
//! Equality is only defined between fractions. To find out whether a fraction is numerically
//! equal to a value of another type, use `Rational::compare_numeric`.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::Result;
use crate::rational::{Rational, ToRational};

impl Rational {
    /// Compare this value numerically with a value of another numeric type.
    ///
    /// # Errors
    ///
    /// When `other` can't be represented as a fraction, such as a floating point infinity.
    pub fn compare_numeric<N: ToRational + ?Sized>(&self, other: &N) -> Result<Ordering> {
        Ok(self.cmp(&other.to_rational()?))
    }
}

impl Ord for Rational {
    /// Compares by cross multiplication, which is exact because both denominators are positive.
    fn cmp(&self, other: &Self) -> Ordering {
        let (left_sign, right_sign) = (self.numer.sign(), other.numer.sign());
        if left_sign != right_sign {
            return left_sign.cmp(&right_sign);
        }

        if self.denom == other.denom {
            self.numer.cmp(&other.numer)
        } else {
            (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    /// Hashes the canonical representation, which is unique for every value.
    fn hash<H: Hasher>(&self, state: &mut H) {
        debug_assert!(self.is_canonical());

        self.numer.hash(state);
        self.denom.hash(state);
    }
}
