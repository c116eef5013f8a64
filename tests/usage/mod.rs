//! # Usage
//!
//! Calculations as they appear in applications, going through text input and output only.

mod test;
