/// Shorthand for creating a rational number in tests.
///
/// Panics when the denominator is zero.
#[macro_export]
macro_rules! R {
    ($value:expr) => {
        $crate::Rational::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational::new($numer, $denom).unwrap()
    };
}
