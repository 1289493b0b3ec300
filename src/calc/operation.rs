//! The five accumulator operations.

use crate::arith::{self, DivisionByZero};
use crate::calc::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An elementary binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// a + b
    Add,
    /// a - b
    Subtract,
    /// a * b
    Multiply,
    /// a ^ b
    Power,
    /// a / b
    Divide,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Power,
        Operation::Divide,
    ];

    /// Single-character operator symbol.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Power => '^',
            Operation::Divide => '/',
        }
    }

    /// Lowercase operation name.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Power => "power",
            Operation::Divide => "divide",
        }
    }

    /// Whether this operation has a failure condition at all.
    pub fn can_fail(self) -> bool {
        matches!(self, Operation::Power | Operation::Divide)
    }

    /// Compute `a <op> b` without touching any register.
    pub fn evaluate(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Operation::Add => Ok(arith::add(a, b)),
            Operation::Subtract => Ok(arith::subtract(a, b)),
            Operation::Multiply => Ok(arith::multiply(a, b)),
            Operation::Power => arith::power(a, b).map_err(CalcError::InvalidResult),
            Operation::Divide => {
                arith::divide(a, b).map_err(|DivisionByZero| CalcError::DivisionByZero)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// The string named no operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {0:?}")]
pub struct ParseOperationError(pub String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Accepts an operator symbol (`+`) or a mnemonic (`add`, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| {
                (trimmed.len() == 1 && trimmed.starts_with(op.symbol()))
                    || trimmed.eq_ignore_ascii_case(op.mnemonic())
            })
            .ok_or_else(|| ParseOperationError(s.to_string()))
    }
}
