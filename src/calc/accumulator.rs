//! The accumulator register and its operations.
//!
//! Every operation comes in two forms:
//! - two-operand (`add(a, b)`): computes `a <op> b` and stores it
//! - one-operand (`then_add(b)`): the same with the register as `a`
//!
//! The register is written only after a successful computation, so a
//! rejected `power` or `divide` leaves the previous value in place.

use crate::arith::{self, NonFinite};
use crate::calc::Operation;
use serde::Serialize;
use thiserror::Error;

/// Result alias for accumulator operations.
pub type Result<T> = std::result::Result<T, CalcError>;

/// A single-register floating-point accumulator.
///
/// Only `new`/`Default` create one; the state can be serialized for
/// inspection but not loaded back:
///
/// ```compile_fail
/// let acc: accum::Accumulator = serde_json::from_str(r#"{"register":7.0}"#).unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Accumulator {
    register: f64,
}

impl Accumulator {
    /// Create an accumulator holding `0.0`.
    pub fn new() -> Self {
        Self { register: 0.0 }
    }

    /// The result of the last successful operation.
    #[inline]
    pub fn register(&self) -> f64 {
        self.register
    }

    /// Compute `a <op> b` and store it in the register.
    pub fn apply(&mut self, op: Operation, a: f64, b: f64) -> Result<f64> {
        match op.evaluate(a, b) {
            Ok(result) => Ok(self.store(op, a, b, result)),
            Err(error) => {
                tracing::debug!(%op, a, b, %error, "operation rejected");
                Err(error)
            }
        }
    }

    /// Compute `register <op> b` and store it in the register.
    pub fn chain(&mut self, op: Operation, b: f64) -> Result<f64> {
        self.apply(op, self.register, b)
    }

    // ==================== Two-operand ====================

    /// `a + b`
    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.store(Operation::Add, a, b, arith::add(a, b))
    }

    /// `a - b`
    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        self.store(Operation::Subtract, a, b, arith::subtract(a, b))
    }

    /// `a * b`
    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        self.store(Operation::Multiply, a, b, arith::multiply(a, b))
    }

    /// `a ^ b`, rejecting NaN and infinite results.
    pub fn power(&mut self, a: f64, b: f64) -> Result<f64> {
        self.apply(Operation::Power, a, b)
    }

    /// `a / b`, rejecting a zero divisor.
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64> {
        self.apply(Operation::Divide, a, b)
    }

    // ==================== One-operand ====================

    /// `register + b`
    pub fn then_add(&mut self, b: f64) -> f64 {
        self.add(self.register, b)
    }

    /// `register - b`
    pub fn then_subtract(&mut self, b: f64) -> f64 {
        self.subtract(self.register, b)
    }

    /// `register * b`
    pub fn then_multiply(&mut self, b: f64) -> f64 {
        self.multiply(self.register, b)
    }

    /// `register ^ b`; on failure the register keeps its value.
    pub fn then_power(&mut self, b: f64) -> Result<f64> {
        self.power(self.register, b)
    }

    /// `register / b`; on failure the register keeps its value.
    pub fn then_divide(&mut self, b: f64) -> Result<f64> {
        self.divide(self.register, b)
    }

    /// The only place the register is written.
    fn store(&mut self, op: Operation, a: f64, b: f64, result: f64) -> f64 {
        tracing::trace!(%op, a, b, result, "register updated");
        self.register = result;
        result
    }
}

/// Errors raised by accumulator operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The divisor was exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The power result was NaN or infinite (argument out of range).
    #[error("invalid result: {0}")]
    InvalidResult(NonFinite),
}

impl CalcError {
    /// True for [`CalcError::DivisionByZero`].
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, CalcError::DivisionByZero)
    }

    /// True for [`CalcError::InvalidResult`].
    pub fn is_invalid_result(&self) -> bool {
        matches!(self, CalcError::InvalidResult(_))
    }
}
