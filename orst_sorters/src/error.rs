use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

/// Alias for `Result<T, orst_sorters::Error>`.
pub type Result<T> = StdResult<T, Error>;

/// Precondition violations raised by the ranged entry points (the ranged quick sorts and the
/// merge primitive). The whole-slice sorters never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Raised when `low > high + 1`, or for the merge primitive when `left <= mid <= right` does
    /// not hold.
    InvalidRange { low: usize, high: usize },

    /// Raised when a non-empty range reaches past the end of the slice.
    OutOfBounds { index: usize, len: usize },
}

/// Checks that the inclusive range `[low, high]` is either empty (`low == high + 1`) or lies
/// within a slice of length `len`. Returns `Ok(false)` for an empty range, which touches nothing
/// and is accepted wherever it points.
pub(crate) fn check_range(low: usize, high: usize, len: usize) -> Result<bool> {
    if low > high.saturating_add(1) {
        return Err(Error::InvalidRange { low, high });
    }
    if low > high {
        return Ok(false);
    }
    if high >= len {
        return Err(Error::OutOfBounds { index: high, len });
    }
    Ok(true)
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidRange { low, high } => {
                write!(f, "Invalid Range: [{low}, {high}] (expected: low <= high + 1)")
            }
            Error::OutOfBounds { index, len } => {
                write!(f, "Out Of Bounds: index {index} (expected: < {len})")
            }
        }
    }
}
