//! Error types for the celebration workspace.
//!
//! A single `thiserror`-derived enum covers every failure. Validation
//! failures are reported through the [`ensure!`](crate::ensure) and
//! [`fail!`](crate::fail) convenience macros defined here.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument violated a construction rule.
    ///
    /// Displays as the bare message, e.g. `Day must be on the interval 1-31.`
    #[error("{0}")]
    InvalidArgument(String),

    /// A textual value could not be parsed.
    #[error("cannot parse: {0}")]
    Parse(String),
}

impl Error {
    /// Return the carried message without any variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::InvalidArgument(msg) | Error::Parse(msg) => msg,
        }
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cel_core::{ensure, errors::Error};
/// fn positive(x: i32) -> cel_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::InvalidArgument("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use cel_core::{fail, errors::Error};
/// fn always_err() -> cel_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}
