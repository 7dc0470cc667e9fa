//! Deterministic text rendering of a binding model.
//!
//! This is the fixed renderer the verification harness drives. Output is
//! line-oriented and stable: the same model always renders to the same
//! bytes, and layout constants can be parsed back out of it.

mod dump;


pub use dump::{render, type_name};
