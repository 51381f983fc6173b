//! Timestamps and the library clock.

use cel_core::Settings;
use chrono::{Local, NaiveDateTime};

/// A date and time of day without a time zone.
pub type Timestamp = NaiveDateTime;

/// The current local date and time.
///
/// Honours [`Settings::fixed_now`] when an override is installed.
pub fn now() -> Timestamp {
    Settings::instance()
        .fixed_now()
        .unwrap_or_else(|| Local::now().naive_local())
}
