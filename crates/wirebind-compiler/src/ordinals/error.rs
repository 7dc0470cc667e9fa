//! Ordinal failure conditions.

use wirebind_ir::Name;

/// Errors from ordinal assignment. Collisions are surfaced, never
/// silently renumbered: renumbering across compiler versions would break
/// wire compatibility between independently built programs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrdinalError {
    /// Two methods resolved to the same ordinal.
    #[error("ordinal collision in {interface}: {first} and {second} both map to {ordinal}")]
    Collision {
        interface: Name,
        ordinal: u32,
        first: String,
        second: String,
    },

    /// A method's ordinal came out zero, which is reserved.
    #[error("method {method} in {interface} maps to reserved ordinal 0")]
    ZeroOrdinal { interface: Name, method: String },
}

pub type OrdinalResult<T> = std::result::Result<T, OrdinalError>;
