//! # Error reporting
//!
//! Only two things can go wrong when working with fractions: text that doesn't describe a number,
//! and a division by zero. All other operations are total.
use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An `Error` is created when a fraction could not be constructed.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The input text doesn't match any of the accepted number formats.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A zero denominator was given, or a zero value was inverted or used as a divisor.
    ///
    /// This is never silently turned into an infinity.
    #[error("division by zero is not allowed.")]
    DivisionByZero,
}

impl Error {
    /// Whether this error is caused by a division by zero.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Error::DivisionByZero)
    }
}

/// A `ParseError` represents text that could not be read as a number.
///
/// The offending input is kept, such that it can be reported back to the end user.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("ParseError: {description}")]
pub struct ParseError {
    description: String,
    input: String,
}

impl ParseError {
    /// Create a new `ParseError` for an input that doesn't match any number format.
    ///
    /// # Arguments
    ///
    /// * `input`: The text that was rejected.
    pub fn illegal_format(input: impl Into<String>) -> Self {
        let input = input.into();
        Self::new(format!("illegal number format '{}'.", input), input)
    }

    /// Create a new `ParseError` with a custom description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong, meant for the end user.
    /// * `input`: The text that was rejected.
    pub fn new(description: impl Into<String>, input: impl Into<String>) -> Self {
        Self { description: description.into(), input: input.into(), }
    }

    /// The text that could not be parsed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Human-readable description of the problem.
    pub fn description(&self) -> &str {
        &self.description
    }
}
