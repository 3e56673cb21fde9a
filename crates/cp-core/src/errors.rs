//! Error types for creational-patterns.
//!
//! The identity check itself never fails; only the configurable variants
//! (sample counts, settings) have preconditions.  They are reported through a
//! single `thiserror`-derived enum and the [`ensure!`] macro defined here.

use thiserror::Error;

/// The top-level error type used throughout creational-patterns.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout creational-patterns.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cp_core::{ensure, errors::Error};
/// fn at_least_two(n: usize) -> cp_core::errors::Result<usize> {
///     ensure!(n >= 2, "need at least two samples, got {n}");
///     Ok(n)
/// }
/// assert!(at_least_two(2).is_ok());
/// assert_eq!(
///     at_least_two(1),
///     Err(Error::Precondition("need at least two samples, got 1".into()))
/// );
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

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(n: usize) -> Result<usize> {
        ensure!(n > 0, "n must be positive");
        Ok(n)
    }

    #[test]
    fn ensure_passes_through() {
        assert_eq!(checked(3), Ok(3));
    }

    #[test]
    fn precondition_message() {
        let err = checked(0).unwrap_err();
        assert_eq!(err.to_string(), "precondition not satisfied: n must be positive");
    }
}
