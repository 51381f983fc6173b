//! `SpecialDate` — a validated celebration date.
//!
//! Construction is fallible: the day must lie in [`DAY_RANGE`]. The check is
//! purely on the number, so February 31 is accepted.
//!
//! Every successful construction bumps an [`InstanceCounter`]. By default
//! that is a process-wide counter shared by all special dates; the
//! `with_counter*` constructors take an explicit one instead. A failed
//! construction leaves the counter untouched.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

use cel_core::errors::Result;
use cel_core::{ensure, BigNatural, InstanceCounter, Integer};
use cel_time::{now, Month, Timestamp};

use crate::celebration::Celebration;

/// Accepted day-of-month values.
pub const DAY_RANGE: RangeInclusive<Integer> = 1..=31;

static TOTAL_DATES: InstanceCounter = InstanceCounter::new();

/// A named day of a month, stamped with its creation time.
///
/// Equality and hashing use `name`, `day`, `month` and `created`. The counter
/// the value was registered with plays no part in identity.
///
/// ```
/// use cel_records::SpecialDate;
/// use cel_time::Month;
///
/// let bday = SpecialDate::new_now("My Bday", 20, Month::October).unwrap();
/// assert_eq!(bday.day(), 20);
/// assert!(bday.total_dates() >= 1);
///
/// let err = SpecialDate::new_now("My Bday", 32, Month::October).unwrap_err();
/// assert_eq!(err.to_string(), "Day must be on the interval 1-31.");
/// ```
#[derive(Clone)]
pub struct SpecialDate {
    name: String,
    day: Integer,
    month: Month,
    created: Timestamp,
    counter: &'static InstanceCounter,
}

impl SpecialDate {
    /// Create a special date, counting it process-wide.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](cel_core::Error::InvalidArgument) if `day`
    /// is outside [`DAY_RANGE`].
    pub fn new(
        name: impl Into<String>,
        day: Integer,
        month: Month,
        created: Timestamp,
    ) -> Result<Self> {
        Self::with_counter(name, day, month, created, &TOTAL_DATES)
    }

    /// Like [`new`](Self::new), stamped with the current time.
    pub fn new_now(name: impl Into<String>, day: Integer, month: Month) -> Result<Self> {
        Self::new(name, day, month, now())
    }

    /// Create a special date counted against `counter`.
    pub fn with_counter(
        name: impl Into<String>,
        day: Integer,
        month: Month,
        created: Timestamp,
        counter: &'static InstanceCounter,
    ) -> Result<Self> {
        ensure!(
            DAY_RANGE.contains(&day),
            "Day must be on the interval {}-{}.",
            DAY_RANGE.start(),
            DAY_RANGE.end()
        );

        let name = name.into();
        let total = counter.increment();
        tracing::trace!(name = %name, day, month = %month, total, "special date created");

        Ok(SpecialDate {
            name,
            day,
            month,
            created,
            counter,
        })
    }

    /// Like [`with_counter`](Self::with_counter), stamped with the current
    /// time.
    pub fn with_counter_now(
        name: impl Into<String>,
        day: Integer,
        month: Month,
        counter: &'static InstanceCounter,
    ) -> Result<Self> {
        Self::with_counter(name, day, month, now(), counter)
    }

    /// The name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The day of the month (1–31).
    pub fn day(&self) -> Integer {
        self.day
    }

    /// The month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// When the date was created.
    pub fn created(&self) -> Timestamp {
        self.created
    }

    /// Number of special dates successfully built so far against the same
    /// counter as `self`.
    ///
    /// This is shared state, not a property of the instance: it keeps
    /// growing as other dates are created.
    pub fn total_dates(&self) -> BigNatural {
        self.counter.get()
    }

    /// Number of special dates successfully built against the process-wide
    /// counter.
    pub fn process_total() -> BigNatural {
        TOTAL_DATES.get()
    }
}

impl PartialEq for SpecialDate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.day == other.day
            && self.month == other.month
            && self.created == other.created
    }
}

impl Eq for SpecialDate {}

impl Hash for SpecialDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.day.hash(state);
        self.month.hash(state);
        self.created.hash(state);
    }
}

impl fmt::Debug for SpecialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecialDate")
            .field("name", &self.name)
            .field("day", &self.day)
            .field("month", &self.month)
            .field("created", &self.created)
            .finish()
    }
}

impl fmt::Display for SpecialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.day, self.month)
    }
}

impl Celebration for SpecialDate {
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
