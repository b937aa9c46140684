//! Typed failures surfaced by range constructors and operations.

use thiserror::Error;

/// Error returned when a range operation's precondition does not hold.
///
/// These are contract violations, not transient conditions: an operation
/// that fails has run none of the caller's callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A structural parameter is malformed (zero step, zero segment size,
    /// a numeric progression that drifts under rounding).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// An index or window bound falls outside the range.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Ranges that must agree on length do not.
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

pub type Result<T, E = RangeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = RangeError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for length 3");

        let err = RangeError::LengthMismatch { expected: 2, found: 5 };
        assert_eq!(err.to_string(), "length mismatch: expected 2, found 5");

        let err = RangeError::InvalidArgument("zero step");
        assert_eq!(err.to_string(), "invalid argument: zero step");
    }
}
