//! Integration tests for `Month` parsing, chrono interop, and the clock.

use cel_core::errors::Error;
use cel_time::Month;
use proptest::prelude::*;

#[test]
fn parse_long_and_short_names() {
    assert_eq!("October".parse::<Month>(), Ok(Month::October));
    assert_eq!("oct".parse::<Month>(), Ok(Month::October));
    assert_eq!(" SEPTEMBER ".parse::<Month>(), Ok(Month::September));
    assert_eq!("may".parse::<Month>(), Ok(Month::May));
}

#[test]
fn parse_rejects_unknown_names() {
    let err = "Smarch".parse::<Month>().unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert!("".parse::<Month>().is_err());
    assert!("Septem".parse::<Month>().is_err());
}

#[test]
fn chrono_interop_preserves_number() {
    for m in Month::ALL {
        let c: chrono::Month = m.into();
        assert_eq!(c.number_from_month(), u32::from(m.number()));
        assert_eq!(Month::from(c), m);
    }
}

proptest! {
    #[test]
    fn next_then_previous_is_identity(n in 1u8..=12) {
        let m = Month::from_number(n).unwrap();
        prop_assert_eq!(m.next().previous(), m);
        prop_assert_eq!(m.previous().next(), m);
    }

    #[test]
    fn display_parses_back(n in 1u8..=12) {
        let m = Month::from_number(n).unwrap();
        prop_assert_eq!(m.to_string().parse::<Month>(), Ok(m));
        prop_assert_eq!(m.short_name().parse::<Month>(), Ok(m));
    }
}
