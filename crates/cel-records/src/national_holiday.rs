//! `NationalHoliday` — a plain mutable data holder.

use std::fmt;

/// The country a national holiday belongs to.
///
/// Unlike the other celebration types this one is mutable: the country can
/// be replaced at any time through [`set_country`](Self::set_country).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NationalHoliday {
    country: String,
}

impl NationalHoliday {
    /// Create a holiday for `country`.
    pub fn new(country: impl Into<String>) -> Self {
        NationalHoliday {
            country: country.into(),
        }
    }

    /// The current country.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Replace the country unconditionally.
    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
    }
}

impl fmt::Display for NationalHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.country)
    }
}
