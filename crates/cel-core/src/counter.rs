//! Process-wide instance counters.
//!
//! An [`InstanceCounter`] records how many values of some type were
//! successfully constructed. It only ever grows: there is no reset and no
//! decrement. The increment is a single atomic read-modify-write, so
//! constructions racing on different threads never lose an update.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::BigNatural;

/// Monotonic, thread-safe construction counter.
///
/// `new` is `const`, so a counter can be declared directly as a `static`:
///
/// ```
/// use cel_core::InstanceCounter;
///
/// static BUILT: InstanceCounter = InstanceCounter::new();
///
/// assert_eq!(BUILT.get(), 0);
/// assert_eq!(BUILT.increment(), 1);
/// assert_eq!(BUILT.get(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InstanceCounter(AtomicU64);

impl InstanceCounter {
    /// Create a counter starting at zero.
    pub const fn new() -> Self {
        InstanceCounter(AtomicU64::new(0))
    }

    /// Add one and return the new total.
    pub fn increment(&self) -> BigNatural {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Current total.
    pub fn get(&self) -> BigNatural {
        self.0.load(Ordering::SeqCst)
    }
}
