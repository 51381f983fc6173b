//! # cel-core
//!
//! Core types, error definitions, and shared process state for the
//! celebration workspace.
//!
//! This crate provides the building blocks used by every other crate –
//! primitive aliases, the error type with its `ensure!` / `fail!` macros,
//! the process-wide [`Settings`], and the atomic [`InstanceCounter`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Monotonic instance counters.
pub mod counter;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Global library settings (fixed "now", etc.).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Signed integer used for day-of-month values.
///
/// Signed on purpose: callers may hand in negative days, which must be
/// rejected rather than wrapped.
pub type Integer = i32;

/// Large non-negative integer used for counts.
pub type BigNatural = u64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use counter::InstanceCounter;
pub use errors::{Error, Result};
pub use settings::{ScopedFixedNow, Settings};
