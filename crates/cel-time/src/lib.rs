//! # cel-time
//!
//! Month-of-year and timestamp types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Timestamp` and the settings-aware `now()` clock.
pub mod clock;

/// `Month` — month of the year.
pub mod month;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use clock::{now, Timestamp};
pub use month::Month;
