//! `CelebrationRecord<T>` — an immutable record generic over its payload.

use cel_core::Integer;
use cel_time::Month;

use crate::celebration::Celebration;

/// A named day of a month carrying an arbitrary payload.
///
/// Fields are stored exactly as given; no validation is performed. Equality
/// and hashing cover all four fields, delegating to `T` for the payload.
///
/// ```
/// use cel_records::{CelebrationRecord, NationalHoliday};
/// use cel_time::Month;
///
/// let rec = CelebrationRecord::new(
///     NationalHoliday::new("Brazil"),
///     "Independence Day",
///     7,
///     Month::September,
/// );
/// assert_eq!(rec.contents().country(), "Brazil");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CelebrationRecord<T> {
    contents: T,
    name: String,
    day: Integer,
    month: Month,
}

impl<T> CelebrationRecord<T> {
    /// Build a record from its four parts.
    pub fn new(contents: T, name: impl Into<String>, day: Integer, month: Month) -> Self {
        CelebrationRecord {
            contents,
            name: name.into(),
            day,
            month,
        }
    }

    /// The payload.
    pub fn contents(&self) -> &T {
        &self.contents
    }

    /// Consume the record and hand back its payload.
    pub fn into_contents(self) -> T {
        self.contents
    }

    /// The name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The day, as given.
    pub fn day(&self) -> Integer {
        self.day
    }

    /// The month.
    pub fn month(&self) -> Month {
        self.month
    }
}

impl<T> Celebration for CelebrationRecord<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn day(&self) -> Integer {
        self.day
    }

    fn month(&self) -> Month {
        self.month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_validation_on_day() {
        let rec = CelebrationRecord::new((), "Nowhere", 99, Month::February);
        assert_eq!(rec.day(), 99);
        let rec = CelebrationRecord::new((), "Nowhere", -4, Month::February);
        assert_eq!(rec.day(), -4);
    }

    #[test]
    fn equality_covers_every_field() {
        let base = CelebrationRecord::new(1u8, "a", 1, Month::January);
        assert_eq!(base, CelebrationRecord::new(1u8, "a", 1, Month::January));
        assert_ne!(base, CelebrationRecord::new(2u8, "a", 1, Month::January));
        assert_ne!(base, CelebrationRecord::new(1u8, "b", 1, Month::January));
        assert_ne!(base, CelebrationRecord::new(1u8, "a", 2, Month::January));
        assert_ne!(base, CelebrationRecord::new(1u8, "a", 1, Month::March));
    }

    #[test]
    fn celebration_view() {
        let rec = CelebrationRecord::new("payload", "Christmas", 25, Month::December);
        assert!(rec.falls_on(Month::December, 25));
        assert!(!rec.falls_on(Month::December, 24));
        assert_eq!(rec.into_contents(), "payload");
    }
}
