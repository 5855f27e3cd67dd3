// ============================================================================
// Stateless Range Operations
// Free-function entry points that own the math and the validation order
// ============================================================================
//
// Every function takes explicit bounds and re-validates them: unlike the
// instance methods on NumericRange, callers here can pass arbitrary
// (minimum, maximum) pairs, so nothing can be assumed about them.
//
// Validation order is part of the contract. The domain check on the
// supplied percentage/value runs before the bounds-validity check, and the
// first failing check determines the reported error.

use super::errors::{RangeError, RangeResult};
use super::num::RangeNum;

/// Check whether `percentage` lies in the closed unit interval `[0, 1]`,
/// using `T`'s own additive and multiplicative identities as the bounds.
#[inline]
pub fn is_valid_percentage<T: RangeNum>(percentage: T) -> bool {
    percentage >= T::zero() && percentage <= T::one()
}

/// Check whether `value` lies in `[minimum, maximum]`, inclusive both ends.
#[inline]
pub fn is_within_range<T: RangeNum>(value: T, minimum: T, maximum: T) -> bool {
    value >= minimum && value <= maximum
}

/// Compute the value at a fractional position within `[minimum, maximum]`.
///
/// This is a linear interpolation treating the bounds as weighted
/// endpoints: `minimum * (1 - percentage) + maximum * percentage`.
/// A percentage of zero yields exactly `minimum`, one yields exactly
/// `maximum`.
///
/// # Errors
/// - `PercentageOutOfRange` if `percentage` is outside `[0, 1]`
/// - `InvalidRange` if `minimum >= maximum`
#[inline]
pub fn value_by_percentage<T: RangeNum>(minimum: T, maximum: T, percentage: T) -> RangeResult<T> {
    if !is_valid_percentage(percentage) {
        return Err(RangeError::PercentageOutOfRange { percentage });
    }
    if minimum >= maximum {
        return Err(RangeError::InvalidRange { minimum, maximum });
    }

    Ok(minimum * (T::one() - percentage) + maximum * percentage)
}

/// Compute the fractional position of `value` within `[minimum, maximum]`.
///
/// Computes `(value - minimum) / (maximum - minimum)`. A value equal to
/// `minimum` yields exactly zero, equal to `maximum` exactly one. On valid
/// inputs this is the algebraic inverse of [`value_by_percentage`], up to
/// the precision of `T`'s arithmetic.
///
/// # Errors
/// - `ValueOutOfRange` if `value` is outside `[minimum, maximum]`
/// - `InvalidRange` if `minimum >= maximum`
#[inline]
pub fn percentage_by_value<T: RangeNum>(minimum: T, maximum: T, value: T) -> RangeResult<T> {
    if !is_within_range(value, minimum, maximum) {
        return Err(RangeError::ValueOutOfRange {
            value,
            minimum,
            maximum,
        });
    }
    if minimum >= maximum {
        return Err(RangeError::InvalidRange { minimum, maximum });
    }

    Ok((value - minimum) / (maximum - minimum))
}

/// Bound `value` into `[minimum, maximum]`.
///
/// Returns `minimum` if the value is below the range, `maximum` if above,
/// the value itself otherwise. Out-of-range values are never rejected
/// here; clamping silently bounds them instead.
///
/// # Errors
/// - `InvalidRange` if `minimum >= maximum`
#[inline]
pub fn clamp<T: RangeNum>(minimum: T, maximum: T, value: T) -> RangeResult<T> {
    if minimum >= maximum {
        return Err(RangeError::InvalidRange { minimum, maximum });
    }

    // min(maximum, max(minimum, value)) without requiring Ord
    let raised = if value < minimum { minimum } else { value };
    Ok(if raised > maximum { maximum } else { raised })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_value_by_percentage() {
        assert_eq!(value_by_percentage(0.0, 100.0, 0.5), Ok(50.0));
        assert_eq!(value_by_percentage(0.0, 100.0, 0.0), Ok(0.0));
        assert_eq!(value_by_percentage(0.0, 100.0, 1.0), Ok(100.0));
    }

    #[test]
    fn test_value_by_percentage_rejects_bad_percentage() {
        assert_eq!(
            value_by_percentage(1.0, 100.0, 3.3),
            Err(RangeError::PercentageOutOfRange { percentage: 3.3 })
        );
        assert_eq!(
            value_by_percentage(1.0, 100.0, -0.1),
            Err(RangeError::PercentageOutOfRange { percentage: -0.1 })
        );
    }

    #[test]
    fn test_value_by_percentage_rejects_bad_bounds() {
        assert_eq!(
            value_by_percentage(5.0, 4.0, 0.5),
            Err(RangeError::InvalidRange {
                minimum: 5.0,
                maximum: 4.0
            })
        );
        assert_eq!(
            value_by_percentage(5.0, 5.0, 0.5),
            Err(RangeError::InvalidRange {
                minimum: 5.0,
                maximum: 5.0
            })
        );
    }

    #[test]
    fn test_validation_order_percentage_check_wins() {
        // Both the percentage and the bounds are bad; the percentage
        // check runs first and determines the error.
        assert_eq!(
            value_by_percentage(5.0, 4.0, 2.0),
            Err(RangeError::PercentageOutOfRange { percentage: 2.0 })
        );
    }

    #[test]
    fn test_percentage_by_value() {
        assert_eq!(percentage_by_value(0.0, 200.0, 50.0), Ok(0.25));
        assert_eq!(percentage_by_value(150.0, 250.0, 225.0), Ok(0.75));
        assert_eq!(percentage_by_value(0.0, 200.0, 0.0), Ok(0.0));
        assert_eq!(percentage_by_value(0.0, 200.0, 200.0), Ok(1.0));
    }

    #[test]
    fn test_percentage_by_value_rejects_outside_value() {
        assert_eq!(
            percentage_by_value(0.0, 200.0, 250.0),
            Err(RangeError::ValueOutOfRange {
                value: 250.0,
                minimum: 0.0,
                maximum: 200.0
            })
        );
        assert_eq!(
            percentage_by_value(150.0, 250.0, 100.0),
            Err(RangeError::ValueOutOfRange {
                value: 100.0,
                minimum: 150.0,
                maximum: 250.0
            })
        );
    }

    #[test]
    fn test_validation_order_value_check_wins() {
        // Value outside the (also invalid) bounds: the value check runs
        // first and determines the error.
        assert_eq!(
            percentage_by_value(5.0, 4.0, 10.0),
            Err(RangeError::ValueOutOfRange {
                value: 10.0,
                minimum: 5.0,
                maximum: 4.0
            })
        );
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(10.0, 45.0, 50.0), Ok(45.0));
        assert_eq!(clamp(10.0, 45.0, 30.0), Ok(30.0));
        assert_eq!(clamp(10.0, 45.0, 5.0), Ok(10.0));
    }

    #[test]
    fn test_clamp_accepts_boundary_values() {
        assert_eq!(clamp(10.0, 45.0, 10.0), Ok(10.0));
        assert_eq!(clamp(10.0, 45.0, 45.0), Ok(45.0));
    }

    #[test]
    fn test_clamp_rejects_bad_bounds() {
        assert_eq!(
            clamp(45.0, 10.0, 30.0),
            Err(RangeError::InvalidRange {
                minimum: 45.0,
                maximum: 10.0
            })
        );
    }

    #[test]
    fn test_predicates() {
        assert!(is_valid_percentage(0.0));
        assert!(is_valid_percentage(0.5));
        assert!(is_valid_percentage(1.0));
        assert!(!is_valid_percentage(-0.1));
        assert!(!is_valid_percentage(1.1));

        assert!(is_within_range(5, 0, 10));
        assert!(is_within_range(0, 0, 10));
        assert!(is_within_range(10, 0, 10));
        assert!(!is_within_range(11, 0, 10));
        assert!(!is_within_range(-1, 0, 10));
    }

    #[test]
    fn test_integer_arithmetic_is_used_as_is() {
        // Integer division truncates; the operations impose no widening.
        assert_eq!(percentage_by_value(0i64, 200, 50), Ok(0));
        assert_eq!(percentage_by_value(0i64, 200, 200), Ok(1));
        assert_eq!(clamp(10i64, 45, 50), Ok(45));
    }

    proptest! {
        #[test]
        fn prop_roundtrip_value_through_percentage(
            minimum in -1.0e6f64..1.0e6,
            width in 1.0e-3f64..1.0e6,
            fraction in 0.0f64..=1.0,
        ) {
            let maximum = minimum + width;
            let value = minimum + fraction * width;
            let value = clamp(minimum, maximum, value).unwrap();

            let percentage = percentage_by_value(minimum, maximum, value).unwrap();
            let roundtripped = value_by_percentage(minimum, maximum, percentage).unwrap();

            prop_assert!((roundtripped - value).abs() <= 1e-6 * width.max(1.0));
        }

        #[test]
        fn prop_clamp_is_idempotent_and_within_bounds(
            minimum in -1.0e6f64..1.0e6,
            width in 1.0e-3f64..1.0e6,
            value in -1.0e7f64..1.0e7,
        ) {
            let maximum = minimum + width;

            let once = clamp(minimum, maximum, value).unwrap();
            let twice = clamp(minimum, maximum, once).unwrap();

            prop_assert_eq!(once, twice);
            prop_assert!(is_within_range(once, minimum, maximum));
        }

        #[test]
        fn prop_percentage_stays_in_unit_interval(
            minimum in -1.0e6f64..1.0e6,
            width in 1.0e-3f64..1.0e6,
            fraction in 0.0f64..=1.0,
        ) {
            let maximum = minimum + width;
            let value = clamp(minimum, maximum, minimum + fraction * width).unwrap();

            let percentage = percentage_by_value(minimum, maximum, value).unwrap();
            prop_assert!(is_valid_percentage(percentage));
        }
    }
}
