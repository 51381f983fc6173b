//! # celebration
//!
//! Immutable celebration value objects.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `cel-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use celebration::records::{CelebrationRecord, NationalHoliday, SpecialDate};
//! use celebration::time::Month;
//!
//! let bday = SpecialDate::new_now("My Bday", 20, Month::October)?;
//! assert_eq!(bday.month(), Month::October);
//!
//! let independence = CelebrationRecord::new(
//!     NationalHoliday::new("Brazil"),
//!     "Independence Day",
//!     7,
//!     Month::September,
//! );
//! assert_eq!(independence.contents().country(), "Brazil");
//! # Ok::<(), celebration::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases, error definitions, settings, and counters.
pub use cel_core as core;

/// Month and timestamp types.
pub use cel_time as time;

/// Celebration value objects.
pub use cel_records as records;
