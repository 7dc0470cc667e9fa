//! Runtime binding-set arena.
//!
//! The compiler emits only the `ServiceDescriptor` shape; this module is
//! the owned, explicitly-scoped realization of that shape: a slot arena
//! addressed by generated keys, with clear ownership transfer from `add`
//! to `remove`. No ambient global registry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque key addressing one live binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BindingKey(u32);

/// Why a binding terminated. Passed to its error callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingFault {
    TransportClosed,
    DecodeFailure,
    ImplementationError,
}

/// Callback invoked at most once when a specific binding terminates.
pub type ErrorCallback = Box<dyn FnOnce(BindingFault) + Send>;

struct Binding<S, E> {
    stub: S,
    endpoint: E,
    /// Taken on first fault so the callback can never fire twice.
    on_error: Option<ErrorCallback>,
}

/// Live bindings for one service instance: each slot pairs a stub
/// instantiation with a transport endpoint and an error callback.
///
/// Mutation (add/remove/fail) requires `&mut self`; lookups take `&self`.
/// Whatever lock the surrounding runtime uses must keep the two atomic
/// with respect to each other.
pub struct BindingSet<S, E> {
    bindings: IndexMap<BindingKey, Binding<S, E>>,
    next_key: u32,
}

impl<S, E> BindingSet<S, E> {
    pub fn new() -> Self {
        Self {
            bindings: IndexMap::new(),
            next_key: 0,
        }
    }

    /// Install a binding and return its key. Keys are never reused, even
    /// after removal, so a stale key can only miss.
    pub fn add(&mut self, stub: S, endpoint: E, on_error: ErrorCallback) -> BindingKey {
        let key = BindingKey(self.next_key);
        self.next_key += 1;
        self.bindings.insert(
            key,
            Binding {
                stub,
                endpoint,
                on_error: Some(on_error),
            },
        );
        key
    }

    /// Remove a binding without invoking its callback (explicit teardown
    /// is not a fault). Idempotent: removing an absent key is a no-op
    /// and reports `false`, since removal can race with a fault.
    pub fn remove(&mut self, key: BindingKey) -> bool {
        self.bindings.shift_remove(&key).is_some()
    }

    /// Terminate a binding with a fault, invoking its callback exactly
    /// once. Returns `false` if the key was already gone.
    pub fn fail(&mut self, key: BindingKey, fault: BindingFault) -> bool {
        let Some(mut binding) = self.bindings.shift_remove(&key) else {
            return false;
        };
        if let Some(on_error) = binding.on_error.take() {
            on_error(fault);
        }
        true
    }

    /// The (stub, endpoint) pair for a live key. This is what an event
    /// proxy is built from on the callee side.
    pub fn get(&self, key: BindingKey) -> Option<(&S, &E)> {
        self.bindings.get(&key).map(|b| (&b.stub, &b.endpoint))
    }

    pub fn contains(&self, key: BindingKey) -> bool {
        self.bindings.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<S, E> Default for BindingSet<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
