//! Shared behaviour of date-like celebration values.

use cel_core::Integer;
use cel_time::Month;

/// Something celebrated on a given day of a given month.
///
/// Implementors are value types; the trait carries no state of its own.
pub trait Celebration {
    /// Name of the celebration.
    fn name(&self) -> &str;

    /// Day of the month.
    fn day(&self) -> Integer;

    /// Month of the year.
    fn month(&self) -> Month;

    /// Return `true` if the celebration is on `day` of `month`.
    fn falls_on(&self, month: Month, day: Integer) -> bool {
        self.month() == month && self.day() == day
    }
}
