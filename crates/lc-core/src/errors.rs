//! Error types for lunarcal.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here. Preconditions are checked
//! with the [`ensure!`](crate::ensure) convenience macro.

use thiserror::Error;

/// The top-level error type used throughout lunarcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A Gregorian date lies outside the span covered by the lunisolar table.
    #[error("date {year:04}-{month:02}-{day:02} is outside the supported range 1900-01-31 to 2100-12-31")]
    OutOfRange {
        /// Requested year.
        year: i32,
        /// Requested month (1-based, as passed by the caller).
        month: i32,
        /// Requested day of month.
        day: i32,
    },

    /// A numeric argument lies outside its permitted closed interval.
    #[error("{name} ({value}) out of range [{min}, {max}]")]
    ArgumentOutOfRange {
        /// Name of the offending argument.
        name: &'static str,
        /// The value that was passed.
        value: i64,
        /// Smallest permitted value.
        min: i64,
        /// Largest permitted value.
        max: i64,
    },

    /// Invalid date construction or date arithmetic.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Malformed input data (event catalogues, command-line dates).
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Build an [`Error::ArgumentOutOfRange`] for `value` outside `min..=max`.
    pub fn argument_out_of_range(
        name: &'static str,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Self {
        Error::ArgumentOutOfRange {
            name,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Return `true` for the "no lunar date for this day" condition.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}

/// Shorthand `Result` type used throughout lunarcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lc_core::{ensure, errors::Error};
/// fn positive(x: i32) -> lc_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
