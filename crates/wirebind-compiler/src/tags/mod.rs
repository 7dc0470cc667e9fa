//! Union discriminant assignment.
//!
//! Assigns tag values to union variants and derives the union's overall
//! wire layout from the per-variant layout facts.

mod assigner;
mod error;


pub use assigner::{TAG_LAYOUT, UnionDescriptor, VariantDescriptor, assign, overall_layout};
pub use error::{DiscriminantError, DiscriminantResult};
