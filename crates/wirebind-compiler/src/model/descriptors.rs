//! Binding model artifact descriptors.
//!
//! Everything here is pure data: the compile-time shape of the artifacts
//! a renderer emits. Runtime behavior (locking, transport, correlation)
//! belongs to the generated bindings and their runtime library, not here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use wirebind_ir::{ConstDecl, Name, Type};

use crate::layout::LayoutFact;
use crate::tags::UnionDescriptor;

/// Marshal facts for one struct member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    pub name: String,
    pub ty: Type,
    pub offset: u32,
    pub layout: LayoutFact,
}

/// Marshal descriptor for one struct: everything a runtime codec needs
/// to validate and traverse a buffer. Padding locations are implied by
/// gaps between consecutive member spans and the rounded-up total size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructDescriptor {
    pub name: Name,
    pub layout: LayoutFact,
    pub members: Vec<MemberDescriptor>,
}

/// One method's call shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallDescriptor {
    pub name: String,
    pub ordinal: u32,
    pub request: LayoutFact,
    /// Absent for one-way calls: the caller gets no reply.
    pub response: Option<LayoutFact>,
}

impl CallDescriptor {
    pub fn is_one_way(&self) -> bool {
        self.response.is_none()
    }
}

/// Caller-side artifact: one callable per method.
///
/// A caller encodes the request with these facts; for two-way methods it
/// correlates the eventual response by ordinal plus a transaction id the
/// transport assigns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyDescriptor {
    pub interface: Name,
    pub methods: Vec<ProxyMethod>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyMethod {
    pub name: String,
    pub ordinal: u32,
    pub request: LayoutFact,
    pub expects_response: bool,
}

/// Incoming ordinal the stub has no entry for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown ordinal {0}")]
pub struct DispatchError(pub u32);

/// Callee-side artifact: a dispatch table keyed by ordinal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubDescriptor {
    pub interface: Name,
    /// Ordinal to index into the interface's call descriptor table.
    dispatch: IndexMap<u32, usize>,
}

impl StubDescriptor {
    pub fn new(interface: Name, dispatch: IndexMap<u32, usize>) -> Self {
        Self {
            interface,
            dispatch,
        }
    }

    /// Resolve an incoming ordinal to a method table index.
    ///
    /// Unrecognized ordinals fail loudly and locally rather than being
    /// dropped, so protocol skew between old and new programs surfaces
    /// at the boundary instead of corrupting state.
    pub fn dispatch(&self, ordinal: u32) -> Result<usize, DispatchError> {
        self.dispatch
            .get(&ordinal)
            .copied()
            .ok_or(DispatchError(ordinal))
    }

    pub fn ordinals(&self) -> impl Iterator<Item = u32> + '_ {
        self.dispatch.keys().copied()
    }
}

/// Shape of the runtime binding registry for one interface: a keyed
/// collection of live (stub, transport endpoint) pairs, each with an
/// error callback. Add/remove and dispatch lookups are independently
/// atomic operations; the locking discipline belongs to the transport
/// runtime, not the model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub interface: Name,
    /// Whether bindings can hand out an event proxy for a live key.
    pub has_events: bool,
}

/// One server-initiated message: structurally a one-way call that
/// originates from the callee side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDescriptor {
    pub name: String,
    pub ordinal: u32,
    pub payload: LayoutFact,
}

/// Callee-to-caller artifact for unsolicited messages. Reuses the proxy
/// encoding machinery; there is no associated request to dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventProxyDescriptor {
    pub interface: Name,
    pub events: Vec<EventDescriptor>,
}

/// Everything derived for one interface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceModel {
    pub name: Name,
    /// Call descriptors for request-bearing methods, declaration order.
    pub methods: Vec<CallDescriptor>,
    pub proxy: ProxyDescriptor,
    pub stub: StubDescriptor,
    pub service: ServiceDescriptor,
    /// Present only for interfaces that declare events.
    pub event_proxy: Option<EventProxyDescriptor>,
}

/// The fully-derived output of one compilation: immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BindingModel {
    pub library: String,
    pub consts: Vec<ConstDecl>,
    pub structs: Vec<StructDescriptor>,
    pub unions: Vec<UnionDescriptor>,
    pub interfaces: Vec<InterfaceModel>,
}
