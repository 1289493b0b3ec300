//! The stateful accumulator.
//!
//! - [`Accumulator`] - single-owner register with the ten operations
//! - [`Operation`] - the five binary operations as values
//! - [`SharedAccumulator`] - lock-guarded handle (feature `sync`)

pub mod accumulator;
pub mod operation;

#[cfg(feature = "sync")]
pub mod shared;

pub use accumulator::{Accumulator, CalcError, Result};
pub use operation::{Operation, ParseOperationError};

#[cfg(feature = "sync")]
pub use shared::SharedAccumulator;
