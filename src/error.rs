//! Error types for the fallible sort entry points.

use std::fmt;

/// Errors reported by the `try_*` entry points and by [`check_range`](crate::primitives::check_range).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Two elements had no order relation, `partial_cmp` returned `None`.
    Incomparable,

    /// The inclusive range `lo..=hi` starts more than one past its end.
    RangeInverted { lo: usize, hi: usize },

    /// The inclusive range reaches past the end of a slice of length `len`.
    RangeOutOfBounds { hi: usize, len: usize },

    /// The empty range `lo..=lo - 1` starts past the end of a slice of length `len`.
    RangeStartOutOfBounds { lo: usize, len: usize },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::Incomparable => {
                write!(f, "elements are not comparable under their partial order")
            }
            SortError::RangeInverted { lo, hi } => {
                write!(f, "range start {} is greater than range end {}", lo, hi)
            }
            SortError::RangeOutOfBounds { hi, len } => {
                write!(
                    f,
                    "range end {} out of range for slice of length {}",
                    hi, len
                )
            }
            SortError::RangeStartOutOfBounds { lo, len } => {
                write!(
                    f,
                    "range start {} out of range for slice of length {}",
                    lo, len
                )
            }
        }
    }
}

impl std::error::Error for SortError {}
