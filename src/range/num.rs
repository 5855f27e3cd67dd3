// ============================================================================
// Numeric Capability Trait
// The contract every range operation is written against
// ============================================================================

use std::ops::{Add, Div, Mul, Sub};

use num_traits::{One, Zero};

/// Capability set required of a range's numeric type.
///
/// A type qualifies when it is a totally-ordered, copyable number with
/// additive and multiplicative identities ([`Zero`] / [`One`] from
/// `num-traits`) and closed `+`, `-`, `*`, `/` operators. Floating-point
/// types, `rust_decimal::Decimal`, and the primitive integers all qualify
/// through the blanket impl; no manual impl is ever needed.
///
/// The arithmetic is used as-is: fixed-point types produce exact results
/// for exact inputs, floating-point types round the way floating point
/// rounds, integer types truncate on division. The range operations impose
/// no widening or rounding policy of their own.
pub trait RangeNum:
    Copy
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

impl<T> RangeNum for T where
    T: Copy
        + PartialOrd
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
{
}
