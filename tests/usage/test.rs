use std::collections::BTreeSet;
use std::str::FromStr;

use big_fraction::{Error, LeadingZeros, MathContext, ParseOptions, Rational, RoundingMode};

#[test]
fn rescale_quantity() {
    let quantity = Rational::from_integer(23_456);
    let quantity_origin = Rational::from_integer(34_567);
    let mut result = Rational::from_integer(1_000);

    let factor = &quantity / &quantity_origin;
    assert_eq!(factor.to_fraction_string(), "23456/34567");
    result = result * factor;
    assert_eq!(result.to_fraction_string(), "23456000/34567");

    let factor = &quantity_origin / &quantity;
    assert_eq!(factor.to_fraction_string(), "34567/23456");
    result = result * factor;
    assert_eq!(result.to_fraction_string(), "1000");
    assert_eq!(result.to_decimal_string(), "1000");
}

#[test]
fn readme_value() {
    let value = Rational::from_strs("123456789", "10000").unwrap();
    assert_eq!(value.to_decimal_string(), "12345.6789");
    assert_eq!(value.to_string(), "123456789/10000");
}

#[test]
fn shares() {
    let total = Rational::from_integer(1_000);
    let share = Rational::from_str("1/21").unwrap();

    let part = &total * &share;
    assert_eq!(part.to_string(), "1000/21");
    assert_eq!(part.to_decimal_string_with(&MathContext::new(6, RoundingMode::HalfUp)), "47.6190");

    let parts = std::iter::repeat(part).take(21).collect::<Vec<_>>();
    assert_eq!(parts.iter().sum::<Rational>().to_decimal_string(), "1000");
}

#[test]
fn arithmetic_through_text() {
    let read = |text: &str| Rational::parse(text).unwrap();

    assert_eq!((read("2/3") * read("-6/7")).to_string(), "-4/7");
    assert_eq!((read("2/3") / read("6/7")).to_string(), "7/9");
    assert_eq!((read("2/15") + read("6/5")).to_string(), "4/3");
    assert_eq!((read("8/15") - read("6/5")).to_string(), "-2/3");
    assert_eq!(read("-2/3").pow(-3).unwrap().to_string(), "-27/8");
    assert_eq!((read("0.1") + read("0.2")).to_decimal_string(), "0.3");
}

#[test]
fn errors() {
    assert_eq!(Rational::parse("1/0"), Err(Error::DivisionByZero));
    assert_eq!(Rational::from_integer(0).reciprocal(), Err(Error::DivisionByZero));

    match Rational::parse("12,5") {
        Err(Error::Parse(error)) => {
            assert_eq!(error.input(), "12,5");
            assert_eq!(error.to_string(), "ParseError: illegal number format '12,5'.");
        },
        other => panic!("unexpected {:?}", other),
    }

    let strict = ParseOptions::default().with_leading_zeros(LeadingZeros::Reject);
    assert!(Rational::parse_with("007", &strict).is_err());
    assert_eq!(Rational::parse_with("7", &strict), Ok(Rational::from_integer(7)));
}

#[test]
fn ordered_collection() {
    let values = ["1/2", "0.5", "-1", "2/4", "1/3", "-3/3"]
        .into_iter()
        .map(Rational::parse)
        .collect::<Result<BTreeSet<_>, _>>()
        .unwrap();

    let texts = values.iter().map(Rational::to_string).collect::<Vec<_>>();
    assert_eq!(texts, ["-1", "1/3", "1/2"]);
}
