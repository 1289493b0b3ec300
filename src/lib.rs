//! # Accum
//!
//! A stateful floating-point accumulator.
//!
//! The accumulator remembers the result of its last successful operation.
//! Each of add, subtract, multiply, power and divide can be called with two
//! explicit operands, or with one operand to continue from that result.
//!
//! ```
//! use accum::Accumulator;
//!
//! let mut acc = Accumulator::new();
//! acc.add(2.0, 3.0);
//! assert_eq!(acc.then_multiply(4.0), 20.0);
//! assert!(acc.then_divide(0.0).is_err());
//! assert_eq!(acc.register(), 20.0);
//! ```

pub mod arith;
pub mod calc;

// Re-export commonly used types
pub use arith::NonFinite;
pub use calc::{Accumulator, CalcError, Operation, ParseOperationError, Result};

#[cfg(feature = "sync")]
pub use calc::SharedAccumulator;
