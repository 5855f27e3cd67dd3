// ============================================================================
// Range Errors
// Error types for numeric range operations
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing or querying a numeric range.
///
/// Every variant carries the offending value together with the applicable
/// bound(s), so the rendered message tells the caller exactly what was
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeError<T> {
    /// Minimum was not strictly less than maximum
    InvalidRange {
        /// The rejected minimum bound
        minimum: T,
        /// The rejected maximum bound
        maximum: T,
    },
    /// Supplied percentage fell outside `[0, 1]`
    PercentageOutOfRange {
        /// The rejected percentage
        percentage: T,
    },
    /// Supplied value fell outside `[minimum, maximum]`
    ValueOutOfRange {
        /// The rejected value
        value: T,
        /// The range's minimum bound
        minimum: T,
        /// The range's maximum bound
        maximum: T,
    },
}

impl<T: fmt::Display> fmt::Display for RangeError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::InvalidRange { minimum, maximum } => {
                write!(
                    f,
                    "invalid range: minimum {} must be strictly less than maximum {}",
                    minimum, maximum
                )
            },
            RangeError::PercentageOutOfRange { percentage } => {
                write!(f, "percentage {} must be between 0 and 1", percentage)
            },
            RangeError::ValueOutOfRange {
                value,
                minimum,
                maximum,
            } => {
                write!(
                    f,
                    "value {} must be within the range [{}, {}]",
                    value, minimum, maximum
                )
            },
        }
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for RangeError<T> {}

/// Result type alias for range operations
pub type RangeResult<T> = Result<T, RangeError<T>>;
