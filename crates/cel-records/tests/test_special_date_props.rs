//! Property tests for `SpecialDate` validation and identity.

use cel_core::{Error, InstanceCounter, Integer};
use cel_records::{SpecialDate, DAY_RANGE};
use cel_time::{Month, Timestamp};
use chrono::DateTime;
use proptest::prelude::*;

fn month() -> impl Strategy<Value = Month> {
    (1u8..=12).prop_map(|n| Month::from_number(n).unwrap())
}

fn timestamp() -> impl Strategy<Value = Timestamp> {
    (0i64..4_102_444_800).prop_map(|secs| DateTime::from_timestamp(secs, 0).unwrap().naive_utc())
}

proptest! {
    #[test]
    fn valid_fields_read_back(
        name in ".{0,24}",
        day in DAY_RANGE,
        month in month(),
        created in timestamp(),
    ) {
        static C: InstanceCounter = InstanceCounter::new();
        let d = SpecialDate::with_counter(name.clone(), day, month, created, &C).unwrap();
        prop_assert_eq!(d.name(), name.as_str());
        prop_assert_eq!(d.day(), day);
        prop_assert_eq!(d.month(), month);
        prop_assert_eq!(d.created(), created);
    }

    #[test]
    fn out_of_range_days_fail_without_counting(
        day in prop_oneof![Integer::MIN..1, 32..=Integer::MAX],
        month in month(),
        created in timestamp(),
    ) {
        static C: InstanceCounter = InstanceCounter::new();
        let before = C.get();
        let err = SpecialDate::with_counter("x", day, month, created, &C).unwrap_err();
        prop_assert_eq!(err, Error::InvalidArgument("Day must be on the interval 1-31.".into()));
        prop_assert_eq!(C.get(), before);
    }

    #[test]
    fn equal_inputs_give_equal_dates(
        name in "[a-z ]{1,12}",
        day in DAY_RANGE,
        month in month(),
        created in timestamp(),
    ) {
        static C: InstanceCounter = InstanceCounter::new();
        let a = SpecialDate::with_counter(name.clone(), day, month, created, &C).unwrap();
        let b = SpecialDate::with_counter(name, day, month, created, &C).unwrap();
        prop_assert_eq!(a, b);
    }
}
