//! Wirebind compiler: the backend of an IDL binding generator.
//!
//! This crate turns a resolved declaration graph (`wirebind-ir`) into a
//! language-neutral binding model:
//! - `layout` - wire size and alignment for every type
//! - `tags` - union discriminant assignment
//! - `ordinals` - method dispatch ordinal assignment
//! - `model` - binding model construction (call/proxy/stub/service/event
//!   descriptors) and the runtime binding-set arena
//! - `render` - deterministic text rendering of a binding model
//! - `verify` - golden-output comparison for regression testing
//!
//! Compilation is a pure, synchronous function of the declaration graph:
//! the same library always produces a bit-identical model, and any failure
//! aborts the whole build with the offending declaration's identity.

pub mod layout;
pub mod model;
pub mod ordinals;
pub mod render;
pub mod tags;
pub mod verify;

#[cfg(test)]
pub mod test_utils;

pub use layout::{LayoutEngine, LayoutError, LayoutFact};
pub use model::{BindingModel, BuilderError, Config, build};
pub use ordinals::OrdinalPolicy;
pub use render::render;
