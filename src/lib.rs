// ============================================================================
// Numeric Range Library
// Generic closed intervals with percentage mapping, clamping and
// cross-range interpolation
// ============================================================================

//! # Numeric Range
//!
//! A small library for working with closed numeric intervals
//! `[minimum, maximum]` over any ordered numeric type.
//!
//! ## Features
//!
//! - **Value/percentage conversion** — map a value to its fractional
//!   position within a range and back (linear interpolation)
//! - **Clamping** — bound a value into a range without rejecting it
//! - **Cross-range interpolation** — re-express a value's relative
//!   position from one range's units into another's
//! - **Generic over the numeric representation** — exact decimals
//!   (`rust_decimal`), floats, or any type satisfying [`RangeNum`]
//! - **Strict validation** — invalid bounds, out-of-domain percentages and
//!   out-of-range values surface as typed errors carrying the offending
//!   value and the applicable bounds
//!
//! ## Example
//!
//! ```rust
//! use numeric_range::prelude::*;
//! use rust_decimal::Decimal;
//!
//! // A sensor reports in [0, 800]; the display works in [0, 500]
//! let sensor = DecimalRange::new(Decimal::ZERO, Decimal::from(800)).unwrap();
//! let display = DecimalRange::new(Decimal::ZERO, Decimal::from(500)).unwrap();
//!
//! let reading = Decimal::from(40);
//! assert_eq!(
//!     sensor.interpolate(&display, reading).unwrap(),
//!     Decimal::from(25)
//! );
//!
//! // Out-of-range readings can be clamped instead of rejected
//! let clamped = sensor.clamp(Decimal::from(900)).unwrap();
//! assert_eq!(clamped, Decimal::from(800));
//! ```

pub mod range;

pub use range::{
    DecimalRange, DoubleRange, FloatRange, NumericRange, RangeError, RangeNum, RangeResult,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::range::ops::{
        clamp, is_valid_percentage, is_within_range, percentage_by_value, value_by_percentage,
    };
    pub use crate::range::{
        DecimalRange, DoubleRange, FloatRange, NumericRange, RangeError, RangeNum, RangeResult,
    };
}
