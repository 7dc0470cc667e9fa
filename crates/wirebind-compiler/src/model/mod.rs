//! Binding model construction.
//!
//! Combines the layout engine, discriminant assigner, and ordinal
//! assigner into the final artifact descriptions: marshal descriptors for
//! structs and unions, and per-interface call/proxy/stub/service/event
//! descriptors. The model is the complete, language-neutral input to any
//! downstream renderer.

mod bindings;
mod builder;
mod descriptors;
mod error;

#[cfg(test)]
mod builder_tests;

pub use bindings::{BindingFault, BindingKey, BindingSet, ErrorCallback};
pub use builder::{Config, build};
pub use descriptors::{
    BindingModel, CallDescriptor, DispatchError, EventDescriptor, EventProxyDescriptor,
    InterfaceModel, MemberDescriptor, ProxyDescriptor, ProxyMethod, ServiceDescriptor,
    StructDescriptor, StubDescriptor,
};
pub use error::{BuilderError, BuilderResult, PhaseError};
