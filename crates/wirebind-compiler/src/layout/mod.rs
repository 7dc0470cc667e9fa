//! Wire layout computation.
//!
//! Computes `(size, alignment)` for every type reachable from the
//! declaration graph, bottom-up and memoized per declaration name.

mod engine;
mod error;


pub use engine::{LayoutEngine, LayoutFact, MemberLayout, StructLayout, round_up};
pub use error::{LayoutError, LayoutResult};
