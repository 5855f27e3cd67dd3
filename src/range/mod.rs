// ============================================================================
// Range Module
// Generic closed numeric intervals with validated percentage math
// ============================================================================
//
// This module provides:
// - NumericRange<T>: immutable [minimum, maximum] interval over any type
//   satisfying the RangeNum capability set
// - Stateless free-function forms of every operation in `ops`
// - RangeError/RangeResult: error types for validation failures
// - DecimalRange/DoubleRange/FloatRange aliases for common instantiations
//
// Design principles:
// - Bounds validated at construction, re-validated by every stateless
//   entry point (they accept arbitrary bounds)
// - All fallible operations return Result (no panics)
// - T's own arithmetic is used as-is; no widening or rounding policy

mod errors;
mod num;
mod numeric_range;
pub mod ops;

pub use errors::{RangeError, RangeResult};
pub use num::RangeNum;
pub use numeric_range::{DecimalRange, DoubleRange, FloatRange, NumericRange};
