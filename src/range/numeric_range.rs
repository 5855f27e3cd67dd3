// ============================================================================
// Numeric Range
// Immutable closed interval [minimum, maximum] over an ordered numeric type
// ============================================================================

use super::errors::{RangeError, RangeResult};
use super::num::RangeNum;
use super::ops;

/// An immutable closed interval `[minimum, maximum]` over an ordered
/// numeric type.
///
/// The bounds are validated once at construction (`minimum` strictly less
/// than `maximum`; a zero-width range would make the percentage math divide
/// by zero) and never change afterwards. The type is `Copy` and has no
/// interior mutability, so sharing a range across threads needs no
/// synchronization.
///
/// Instance methods are thin delegators to the stateless functions in
/// [`crate::range::ops`], which hold the actual math and re-validate the
/// bounds on every call.
///
/// # Example
/// ```
/// use numeric_range::NumericRange;
///
/// let range = NumericRange::new(0.0, 800.0)?;
/// let target = NumericRange::new(0.0, 500.0)?;
///
/// assert_eq!(range.percentage_by_value(40.0)?, 0.05);
/// assert_eq!(range.interpolate(&target, 40.0)?, 25.0);
/// # Ok::<(), numeric_range::RangeError<f64>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericRange<T> {
    minimum: T,
    maximum: T,
}

impl<T: RangeNum> NumericRange<T> {
    /// Create a range with validated bounds.
    ///
    /// # Errors
    /// Returns `InvalidRange` if `minimum` is not strictly less than
    /// `maximum`. Equal bounds are rejected.
    #[inline]
    pub fn new(minimum: T, maximum: T) -> Result<Self, RangeError<T>> {
        if minimum >= maximum {
            return Err(RangeError::InvalidRange { minimum, maximum });
        }

        Ok(Self { minimum, maximum })
    }

    /// The minimum bound of the range.
    #[inline]
    pub fn minimum(&self) -> T {
        self.minimum
    }

    /// The maximum bound of the range.
    #[inline]
    pub fn maximum(&self) -> T {
        self.maximum
    }

    /// The value at a fractional position within the range.
    ///
    /// A percentage of zero yields exactly the minimum, one exactly the
    /// maximum.
    ///
    /// # Errors
    /// Returns `PercentageOutOfRange` if `percentage` is outside `[0, 1]`.
    #[inline]
    pub fn value_by_percentage(&self, percentage: T) -> RangeResult<T> {
        ops::value_by_percentage(self.minimum, self.maximum, percentage)
    }

    /// The fractional position of `value` within the range.
    ///
    /// A value equal to the minimum yields exactly zero, equal to the
    /// maximum exactly one.
    ///
    /// # Errors
    /// Returns `ValueOutOfRange` if `value` is outside
    /// `[minimum, maximum]`.
    #[inline]
    pub fn percentage_by_value(&self, value: T) -> RangeResult<T> {
        ops::percentage_by_value(self.minimum, self.maximum, value)
    }

    /// Bound `value` into the range.
    ///
    /// Unlike [`Self::percentage_by_value`], out-of-range values are not
    /// rejected; they are silently bounded to the nearer endpoint.
    #[inline]
    pub fn clamp(&self, value: T) -> RangeResult<T> {
        ops::clamp(self.minimum, self.maximum, value)
    }

    /// Map `value`, expressed in this range's units, to the value at the
    /// same fractional position within `target`.
    ///
    /// # Errors
    /// Returns `ValueOutOfRange` if `value` is outside this range.
    #[inline]
    pub fn interpolate(&self, target: &NumericRange<T>, value: T) -> RangeResult<T> {
        let percentage = ops::percentage_by_value(self.minimum, self.maximum, value)?;
        ops::value_by_percentage(target.minimum, target.maximum, percentage)
    }
}

// ============================================================================
// Type Aliases for Common Instantiations
// ============================================================================

/// Range over exact fixed-point decimals
pub type DecimalRange = NumericRange<rust_decimal::Decimal>;

/// Range over double-precision floats
pub type DoubleRange = NumericRange<f64>;

/// Range over single-precision floats
pub type FloatRange = NumericRange<f32>;

// ============================================================================
// Tests
// ============================================================================
