//! # Number parsing
//!
//! Reading fractions from strings. Two formats are accepted, and the input has to match one of
//! them in its entirety:
//!
//! * decimal numbers, such as `123`, `-123.678`, `+.5` or `1.`
//! * fractions of two integers, such as `2/3`, `-2/3`, `2/-3` or `+2/+3`
//!
//! A fixed set of spellings of zero, such as the empty string, `-0` or `.`, is recognized before
//! either format is tried.
use std::str::FromStr;
use std::sync::LazyLock;

use log::{debug, trace};
use num_bigint::BigInt;
use num_traits::Zero;
use regex::Regex;

use crate::decimal::power_of_ten;
use crate::error::{Error, ParseError, Result};
use crate::rational::Rational;


static DECIMAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<sign>[+-])?(?:(?P<integer>[0-9]+)(?:\.(?P<fractional>[0-9]*))?|\.(?P<only_fractional>[0-9]+))$")
        .expect("decimal pattern is valid")
});
static FRACTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<numerator>[+-]?[0-9]+)/(?P<denominator>[+-]?[0-9]+)$")
        .expect("fraction pattern is valid")
});
static INTEGER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern is valid")
});

/// Input that is read as zero without consulting the number formats.
///
/// Some of these, like `.` and `-`, would otherwise be rejected.
const ZERO_SPELLINGS: [&str; 18] = [
    "",
    "0", "+0", "-0",
    "0.0", "+0.0", "-0.0",
    "0.", "+0.", "-0.",
    ".0", "+.0", "-.0",
    ".", "+.", "-.",
    "+", "-",
];

/// Whether integer digit runs may start with a redundant zero, as in `007`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub enum LeadingZeros {
    /// Leading zeros are ignored.
    #[default]
    Allow,
    /// Input such as `01`, `-01.5` or `01/02` is rejected. A single zero, as in `0.5`, is fine.
    Reject,
}

/// Configuration of the parser.
///
/// The default accepts everything that the number formats describe.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct ParseOptions {
    leading_zeros: LeadingZeros,
}

impl ParseOptions {
    /// Set how leading zeros are treated.
    pub fn with_leading_zeros(mut self, leading_zeros: LeadingZeros) -> Self {
        self.leading_zeros = leading_zeros;
        self
    }

    /// How leading zeros are treated.
    pub fn leading_zeros(&self) -> LeadingZeros {
        self.leading_zeros
    }
}

impl Rational {
    /// Read a fraction from a decimal (`-123.678`) or fractional (`-2/3`) representation.
    ///
    /// # Errors
    ///
    /// `Error::Parse` if the text matches neither format, `Error::DivisionByZero` if it is a
    /// fraction with a zero denominator.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Read a fraction like `Rational::parse` does, with a non-default configuration.
    ///
    /// # Errors
    ///
    /// See `Rational::parse`. Also `Error::Parse` when the options forbid something in the input.
    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self> {
        trace!("Parsing \"{}\" with {:?}", text, options);

        let raw = Raw::read(text, options)
            .inspect_err(|error| debug!("Rejected number text: {}", error))?;

        Self::try_from(raw)
    }
}

impl FromStr for Rational {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl TryFrom<Raw<'_>> for Rational {
    type Error = Error;

    fn try_from(value: Raw<'_>) -> Result<Self> {
        match value {
            Raw::Zero => Ok(Self::zero()),
            Raw::Decimal { sign, integer, fractional } => {
                let sign = match sign {
                    Sign::Positive => "",
                    Sign::Negative => "-",
                };
                let numerator = integer_unchecked(&format!("{}{}{}", sign, integer, fractional))?;
                let denominator = BigInt::from(power_of_ten(fractional.len() as u64));

                Ok(Self::canonicalize(numerator, denominator))
            },
            Raw::Fraction { numerator, denominator } => {
                Self::new(integer_unchecked(numerator)?, integer_unchecked(denominator)?)
            },
        }
    }
}

/// Intermediate form of a read number.
///
/// Holds the matched pieces of the input text, which only contain digits and signs.
#[derive(Eq, PartialEq, Clone, Debug)]
pub(crate) enum Raw<'a> {
    Zero,
    Decimal {
        sign: Sign,
        integer: &'a str,
        fractional: &'a str,
    },
    Fraction {
        numerator: &'a str,
        denominator: &'a str,
    },
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

impl<'a> Raw<'a> {
    /// Select the number format that matches the text.
    fn read(text: &'a str, options: &ParseOptions) -> std::result::Result<Self, ParseError> {
        if ZERO_SPELLINGS.contains(&text) {
            return Ok(Raw::Zero);
        }

        if let Some(captures) = DECIMAL_PATTERN.captures(text) {
            trace!("\"{}\" is a decimal number", text);

            let sign = match captures.name("sign").map(|sign| sign.as_str()) {
                Some("-") => Sign::Negative,
                _ => Sign::Positive,
            };
            let integer = captures.name("integer").map_or("", |integer| integer.as_str());
            let fractional = captures.name("fractional")
                .or_else(|| captures.name("only_fractional"))
                .map_or("", |fractional| fractional.as_str());

            check_leading_zeros(integer, text, options)?;

            Ok(Raw::Decimal { sign, integer, fractional })
        } else if let Some(captures) = FRACTION_PATTERN.captures(text) {
            trace!("\"{}\" is a fraction", text);

            let numerator = captures.name("numerator").map_or("", |numerator| numerator.as_str());
            let denominator = captures.name("denominator").map_or("", |denominator| denominator.as_str());

            check_leading_zeros(unsigned(numerator), text, options)?;
            check_leading_zeros(unsigned(denominator), text, options)?;

            Ok(Raw::Fraction { numerator, denominator })
        } else {
            Err(ParseError::illegal_format(text))
        }
    }
}

fn unsigned(text: &str) -> &str {
    text.trim_start_matches(['+', '-'])
}

fn check_leading_zeros(
    digits: &str,
    text: &str,
    options: &ParseOptions,
) -> std::result::Result<(), ParseError> {
    match options.leading_zeros {
        LeadingZeros::Reject if digits.len() > 1 && digits.starts_with('0') => Err(ParseError::new(
            format!("leading zeros are not allowed in '{}'.", text),
            text,
        )),
        _ => Ok(()),
    }
}

/// Read a signed integer, such as `-12` or `+7`.
pub(crate) fn integer(text: &str) -> std::result::Result<BigInt, ParseError> {
    if INTEGER_PATTERN.is_match(text) {
        integer_unchecked(text)
    } else {
        Err(ParseError::illegal_format(text))
    }
}

/// Read a signed integer that is already known to consist of an optional sign and digits.
fn integer_unchecked(text: &str) -> std::result::Result<BigInt, ParseError> {
    BigInt::from_str(text).map_err(|_| ParseError::illegal_format(text))
}
