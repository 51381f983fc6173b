//! # cel-records
//!
//! Celebration value objects.
//!
//! * [`NationalHoliday`] — a plain, mutable holder of a country name.
//! * [`CelebrationRecord`] — an immutable record generic over its payload.
//! * [`SpecialDate`] — an immutable, validated date with a creation
//!   timestamp and a process-wide construction count.
//!
//! Date-like values share the [`Celebration`] trait.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The `Celebration` trait.
pub mod celebration;

/// `CelebrationRecord<T>` — generic immutable record.
pub mod celebration_record;

/// `NationalHoliday` — mutable country holder.
pub mod national_holiday;

/// `SpecialDate` — validated, counted celebration date.
pub mod special_date;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use celebration::Celebration;
pub use celebration_record::CelebrationRecord;
pub use national_holiday::NationalHoliday;
pub use special_date::{SpecialDate, DAY_RANGE};
