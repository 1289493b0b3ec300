//! Floating-point arithmetic kernels.
//!
//! Provides addition, subtraction, multiplication, exponentiation and
//! division on `f64` operands. These are pure functions; the register
//! bookkeeping lives in [`crate::calc::Accumulator`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a result that is not a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NonFinite {
    /// NaN, e.g. a negative base with a fractional exponent.
    NotANumber,
    /// -inf
    NegativeInfinity,
    /// +inf
    PositiveInfinity,
}

impl fmt::Display for NonFinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonFinite::NotANumber => write!(f, "result is not a number"),
            NonFinite::NegativeInfinity => write!(f, "result is minus infinity"),
            NonFinite::PositiveInfinity => write!(f, "result is plus infinity"),
        }
    }
}

/// Marker error for a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZero;

/// Classify a value, returning `None` when it is finite.
pub fn classify(x: f64) -> Option<NonFinite> {
    if x.is_nan() {
        Some(NonFinite::NotANumber)
    } else if x == f64::NEG_INFINITY {
        Some(NonFinite::NegativeInfinity)
    } else if x == f64::INFINITY {
        Some(NonFinite::PositiveInfinity)
    } else {
        None
    }
}

/// `a + b`
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `a - b`
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// `a * b`
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Raise `a` to the power `b`.
///
/// The raw `powf` result is classified afterwards; NaN and either infinity
/// are rejected. There is no separate zero-base check: `0^-n` is `+inf` and
/// falls out of the classification.
pub fn power(a: f64, b: f64) -> Result<f64, NonFinite> {
    let result = a.powf(b);
    match classify(result) {
        Some(kind) => Err(kind),
        None => Ok(result),
    }
}

/// Divide `a` by `b`.
///
/// Only an exact zero divisor (either sign) is rejected. Overflowing or
/// otherwise non-finite quotients are returned unchecked.
pub fn divide(a: f64, b: f64) -> Result<f64, DivisionByZero> {
    if b == 0.0 {
        return Err(DivisionByZero);
    }
    Ok(a / b)
}
