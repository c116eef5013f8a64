//! # Immutable arbitrary precision fractions
//!
//! A `Rational` is an exact fraction of two arbitrary size integers. Values are kept in canonical
//! form, such that equal values have equal representations, and arithmetic never loses
//! precision.
//!
//! Fractions can be read from decimal (`-123.678`) and fractional (`-2/3`) text, and written back
//! either exactly or as a decimal approximation with a configurable precision.
//!
//! ```
//! use big_fraction::Rational;
//!
//! let factor = Rational::parse("23456").unwrap() / Rational::parse("34567").unwrap();
//! let result = Rational::from_integer(1000) * &factor / factor;
//! assert_eq!(result.to_decimal_string(), "1000");
//! ```
#![warn(missing_docs)]

pub mod decimal;
pub mod error;
pub mod parse;
pub mod rational;

pub use decimal::{Decimal, MathContext, RoundingMode};
pub use error::{Error, ParseError, Result};
pub use parse::{LeadingZeros, ParseOptions};
pub use rational::{Rational, ToRational};
