use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use itertools::iproduct;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::Error;
use crate::rational::Rational;
use crate::R;

#[test]
fn field_identities() {
    assert_eq!(Rational::zero(), R!(0));
    assert_eq!(Rational::one(), R!(1));
    assert_eq!(Rational::default(), R!(0));
    assert!(R!(0, 5).is_zero());
    assert!(R!(-3, -3).is_one());
    assert!(!R!(-1).is_one());
}

#[test]
fn new() {
    assert_eq!(Rational::new(1, 0), Err(Error::DivisionByZero));
    assert_eq!(Rational::new(0, 0), Err(Error::DivisionByZero));
    assert!(Rational::new(BigInt::from(5), BigInt::from(-10)).is_ok());
}

#[test]
fn canonical() {
    for (numer, denom) in iproduct!(-12_i64..=12, -12_i64..=12) {
        if denom == 0 {
            continue;
        }

        let value = R!(numer, denom);
        assert!(value.denom() > &BigInt::zero(), "{}/{}", numer, denom);
        assert!(value.numer().gcd(value.denom()).is_one(), "{}/{}", numer, denom);
        if numer == 0 {
            assert_eq!(value.denom(), &BigInt::one());
        }
        assert_eq!(value.numer() * denom, value.denom() * numer);
    }

    let value = R!(-12, -40);
    assert_eq!(value.numer(), &BigInt::from(3));
    assert_eq!(value.denom(), &BigInt::from(10));
    assert_eq!(R!(12, 40), value);

    let value = R!(500_000, -1_000_000);
    assert_eq!(value.clone().into_parts(), (BigInt::from(-1), BigInt::from(2)));
    assert_eq!(value, R!(-1, 2));
}

#[test]
fn eq() {
    assert_eq!(R!(1, 1), R!(2, 2));
    assert_ne!(R!(2, 1), R!(2, 2));
    assert_eq!(R!(-1, 1), R!(2, -2));
    assert_eq!(R!(0, 1), R!(-0, 2));
    assert_eq!(R!(1, 2), R!(500_000, 1_000_000));
}

#[test]
fn hash() {
    let values = [R!(1, 2), R!(2, 4), R!(-3, -6), R!(0, 3), R!(0, -7), R!(-1, 2)];
    let set = values.into_iter().collect::<HashSet<_>>();

    assert_eq!(set.len(), 3);
    assert!(set.contains(&R!(50, 100)));
    assert!(set.contains(&R!(0)));
    assert!(set.contains(&R!(1, -2)));
}

#[test]
fn ord() {
    assert!(R!(1, 3) < R!(1, 2));
    assert!(R!(-1, 2) < R!(-1, 3));
    assert!(R!(-1, 3) < R!(0));
    assert!(R!(0) < R!(1, 1_000_000));
    assert!(R!(3, 7) > R!(2, 7));
    assert!(R!(7, 3) > R!(2));
    assert_eq!(R!(2, 4).cmp(&R!(1, 2)), std::cmp::Ordering::Equal);

    let mut values = vec![R!(1, 2), R!(-3), R!(2, 3), R!(0), R!(-1, 4)];
    values.sort();
    assert_eq!(values, vec![R!(-3), R!(-1, 4), R!(0), R!(1, 2), R!(2, 3)]);
    assert_eq!(values.iter().max(), Some(&R!(2, 3)));
}

#[test]
fn add() {
    assert_eq!(R!(1, 1) + R!(2, 2), R!(2));
    assert_eq!(R!(2, 1) + &R!(2, 2), R!(3));
    assert_eq!(&R!(-1, 1) + R!(2, -2), R!(-2));
    assert_eq!(&R!(0, 1) + &R!(-0, 2), R!(0));
    assert_eq!(R!(2, 15) + R!(6, 5), R!(4, 3));
    assert_eq!(R!(1, 6) + R!(1, 3), R!(1, 2));
    assert_eq!(R!(1, 3) + R!(2, 3), R!(1));

    let mut x = R!(1, 1);
    x += R!(2, 2);
    assert_eq!(x, R!(2));

    let mut x = R!(2, 1);
    x += &R!(2, 2);
    assert_eq!(x, R!(3));
}

#[test]
fn sub() {
    assert_eq!(R!(3, 2) - R!(1, 2), R!(1));
    assert_eq!(R!(8, 15) - R!(6, 5), R!(-2, 3));
    assert_eq!(&R!(1, 2) - &R!(1, 2), R!(0));
    assert_eq!(R!(-1, 3) - &R!(2, 3), R!(-1));

    let mut x = R!(1);
    x -= R!(1, 4);
    assert_eq!(x, R!(3, 4));

    assert_eq!(-R!(2, 3), R!(-2, 3));
    assert_eq!(-&R!(-2, 3), R!(2, 3));
    assert_eq!(-R!(0), R!(0));
    assert_eq!((-R!(0)).signum(), Sign::NoSign);
}

#[test]
fn mul() {
    assert_eq!(R!(1, 2) * R!(3, 4), R!(3, 8));
    assert_eq!(R!(5, 6) * &R!(7, 8), R!(35, 48));
    assert_eq!(&R!(-11, 12) * R!(13, -14), R!(11 * 13, 12 * 14));
    assert_eq!(&R!(0, 1) * &R!(-0, 2), R!(0));
    assert_eq!(R!(2, 3) * R!(-6, 7), R!(-4, 7));

    // Exact cancellation
    assert_eq!(R!(2, 3) * R!(3, 2), R!(1));
    assert_eq!(R!(3, 7) * R!(-5, 3), R!(-5, 7));
    assert_eq!(R!(-3, 7) * R!(7, 5), R!(-3, 5));
    assert_eq!(R!(3, 7) * R!(0), R!(0));

    let mut x = R!(2, 1);
    x *= R!(2, 2);
    assert_eq!(x, R!(2));
}

#[test]
fn div() {
    assert_eq!(R!(2, 3) / R!(6, 7), R!(7, 9));
    assert_eq!(&R!(1, 2) / R!(-1, 4), R!(-2));
    assert_eq!(R!(0) / &R!(3, 5), R!(0));

    let mut x = R!(1, 2);
    x /= &R!(1, 2);
    assert_eq!(x, R!(1));

    assert_eq!(R!(2, 3).checked_div(&R!(6, 7)), Ok(R!(7, 9)));
    assert_eq!(R!(2, 3).checked_div(&R!(0)), Err(Error::DivisionByZero));
}

#[test]
#[should_panic]
fn div_zero() {
    let _ = R!(1, 2) / R!(0);
}

#[test]
fn no_growth() {
    let three = R!(3);
    let mut value = R!(4, 7);
    for _ in 0..4 {
        value = &value / &three;
        value = &value * &three;
    }

    assert_eq!(value.numer(), &BigInt::from(4));
    assert_eq!(value.denom(), &BigInt::from(7));
}

#[test]
fn reciprocal() {
    assert_eq!(R!(2, 3).reciprocal(), Ok(R!(3, 2)));
    assert_eq!(R!(-2, 3).reciprocal(), Ok(R!(-3, 2)));
    assert_eq!(R!(-1).reciprocal(), Ok(R!(-1)));
    assert_eq!(R!(0).reciprocal(), Err(Error::DivisionByZero));

    let value = R!(-2, 3).reciprocal().unwrap();
    assert_eq!(value.denom(), &BigInt::from(2));
}

#[test]
fn pow() {
    assert_eq!(R!(-2, 3).pow(-3), Ok(R!(-27, 8)));
    assert_eq!(R!(-2, 3).pow(2), Ok(R!(4, 9)));
    assert_eq!(R!(2, 3).pow(1), Ok(R!(2, 3)));
    assert_eq!(R!(1, 10).pow(-2), Ok(R!(100)));
    assert_eq!(R!(2).pow(100).unwrap().numer(), &(BigInt::one() << 100));
    assert_eq!(R!(2).pow(-2_147), R!(1, 2).pow(2_147));

    for value in [R!(0), R!(5), R!(-2, 3)] {
        assert_eq!(value.pow(0), Ok(R!(1)));
    }
    assert_eq!(R!(0).pow(3), Ok(R!(0)));
    assert_eq!(R!(0).pow(-1), Err(Error::DivisionByZero));
}

#[test]
fn abs_and_sign() {
    assert_eq!(R!(-2, 3).abs(), R!(2, 3));
    assert_eq!(R!(2, 3).abs(), R!(2, 3));
    assert_eq!(R!(0).abs(), R!(0));

    assert_eq!(R!(-2, 3).signum(), Sign::Minus);
    assert_eq!(R!(2, -3).signum(), Sign::Minus);
    assert_eq!(R!(0, -3).signum(), Sign::NoSign);
    assert_eq!(R!(-2, -3).signum(), Sign::Plus);

    assert!(R!(1, 2).is_positive());
    assert!(R!(-1, 2).is_negative());
    assert!(!R!(0).is_positive() && !R!(0).is_negative());
    assert!(R!(6, 3).is_integer());
    assert!(!R!(6, 4).is_integer());
    assert_eq!(R!(-7, 2).truncate(), BigInt::from(-3));
}

#[test]
fn iterators() {
    let values = [R!(1, 2), R!(1, 3), R!(1, 6)];
    assert_eq!(values.iter().sum::<Rational>(), R!(1));
    assert_eq!(values.clone().into_iter().product::<Rational>(), R!(1, 36));
    assert_eq!(Vec::<Rational>::new().into_iter().sum::<Rational>(), R!(0));
    assert_eq!(Vec::<Rational>::new().iter().product::<Rational>(), R!(1));
}

#[test]
fn display() {
    assert_eq!(R!(2, 3).to_string(), "2/3");
    assert_eq!(R!(-4, 6).to_string(), "-2/3");
    assert_eq!(R!(6, 3).to_string(), "2");
    assert_eq!(R!(0, -3).to_string(), "0");
    assert_eq!(format!("{:#}", R!(6, 3)), "2/1");
    assert_eq!(format!("{:#}", R!(0)), "0/1");
    assert_eq!(R!(-4, 6).to_fraction_string(), "-2/3");
    assert_eq!(format!("{:?}", R!(-4, 6)), "Rational { numer: -2, denom: 3 }");
}

#[test]
fn macro_construction() {
    assert_eq!(R!(3), Rational::from_integer(3));
    assert_eq!(R!(3, 4), Rational::new(3, 4).unwrap());
    assert_eq!(R!(BigInt::from(-6), BigInt::from(8)), R!(-3, 4));
}

#[test]
fn clone_keeps_value() {
    let value = R!(1, 3);
    let text = value.to_decimal_string().to_owned();
    let copy = value.clone();

    assert_eq!(copy, value);
    assert_eq!(copy.to_decimal_string(), text);
}

#[test]
fn shared_between_threads() {
    let value = Arc::new(R!(1, 7));

    let handles = (0..8)
        .map(|_| {
            let value = Arc::clone(&value);
            thread::spawn(move || value.to_decimal_string().to_owned())
        })
        .collect::<Vec<_>>();
    let texts = handles.into_iter()
        .map(|handle| handle.join().unwrap())
        .collect::<Vec<_>>();

    assert!(texts.iter().all(|text| text == value.to_decimal_string()));
    assert!(texts[0].starts_with(&format!("0.{}", "142857".repeat(20))));
}
