//! Global library settings.
//!
//! [`Settings`] holds an optional **fixed now**: a timestamp that replaces
//! the system clock wherever the library needs "the current time" (for
//! instance when a special date is created without an explicit creation
//! timestamp). It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! Thread safety: the override lives behind a `Mutex` so that it can be
//! changed from any thread. Prefer [`ScopedFixedNow`] in tests so the
//! previous value is restored even when an assertion panics.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use chrono::NaiveDateTime;

/// Process-wide settings used by the celebration crates.
pub struct Settings {
    fixed_now: Mutex<Option<NaiveDateTime>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            fixed_now: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<NaiveDateTime>> {
        // Poisoning is ignored: the slot only ever holds a whole `Option`.
        self.fixed_now.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the fixed "now", or `None` if the system clock is in use.
    pub fn fixed_now(&self) -> Option<NaiveDateTime> {
        *self.slot()
    }

    /// Pin "now" to `ts`.
    pub fn set_fixed_now(&self, ts: NaiveDateTime) {
        tracing::debug!(%ts, "pinning current time");
        *self.slot() = Some(ts);
    }

    /// Clear the override, going back to the system clock.
    pub fn reset_fixed_now(&self) {
        tracing::debug!("releasing pinned current time");
        *self.slot() = None;
    }

    fn replace_fixed_now(&self, ts: Option<NaiveDateTime>) -> Option<NaiveDateTime> {
        std::mem::replace(&mut *self.slot(), ts)
    }
}

/// Pins "now" for as long as the guard is alive.
///
/// The value that was in place before the guard was created is restored on
/// drop.
///
/// ```
/// use cel_core::{ScopedFixedNow, Settings};
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2020, 10, 20)
///     .unwrap()
///     .and_hms_opt(9, 30, 0)
///     .unwrap();
/// {
///     let _guard = ScopedFixedNow::new(ts);
///     assert_eq!(Settings::instance().fixed_now(), Some(ts));
/// }
/// assert_ne!(Settings::instance().fixed_now(), Some(ts));
/// ```
#[must_use = "the override is released as soon as the guard is dropped"]
pub struct ScopedFixedNow {
    previous: Option<NaiveDateTime>,
}

impl ScopedFixedNow {
    /// Install `ts` as the fixed "now".
    pub fn new(ts: NaiveDateTime) -> Self {
        let previous = Settings::instance().replace_fixed_now(Some(ts));
        ScopedFixedNow { previous }
    }
}

impl Drop for ScopedFixedNow {
    fn drop(&mut self) {
        Settings::instance().replace_fixed_now(self.previous);
    }
}
