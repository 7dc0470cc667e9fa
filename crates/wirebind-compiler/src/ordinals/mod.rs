//! Method dispatch ordinal assignment.
//!
//! Every method in an interface gets a unique, non-zero 32-bit ordinal.
//! Events share the ordinal space with calls.

mod assigner;
mod error;

#[cfg(test)]
mod assigner_tests;

pub use assigner::{OrdinalPolicy, assign};
pub use error::{OrdinalError, OrdinalResult};
