//! Ordinal assignment policies.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use wirebind_ir::InterfaceDecl;

use super::error::{OrdinalError, OrdinalResult};

/// How ordinals are derived.
///
/// Both policies are deterministic. Which one a library uses is part of
/// its wire contract: switching policies renumbers every method.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrdinalPolicy {
    /// 1-based declaration order.
    #[default]
    Sequential,
    /// Stable 32-bit hash of the fully-qualified method name, masked to
    /// 31 bits. Robust against method reordering; collisions are fatal.
    NameHash,
}

/// Assign an ordinal to every method of an interface.
///
/// Returns one ordinal per method, positionally matching the interface's
/// declaration order. Ordinals are keyed by position rather than by
/// method name so that identically-named methods each keep their own
/// ordinal instead of collapsing into one entry. Ordinals are unique
/// within the interface and non-zero.
pub fn assign(interface: &InterfaceDecl, policy: OrdinalPolicy) -> OrdinalResult<Vec<u32>> {
    let mut ordinals = Vec::with_capacity(interface.methods.len());
    let mut seen: IndexMap<u32, String> = IndexMap::with_capacity(interface.methods.len());

    for (position, method) in interface.methods.iter().enumerate() {
        let ordinal = match policy {
            OrdinalPolicy::Sequential => position as u32 + 1,
            OrdinalPolicy::NameHash => {
                crc32fast::hash(interface.name.member(&method.name).as_bytes()) & 0x7fff_ffff
            }
        };

        if ordinal == 0 {
            return Err(OrdinalError::ZeroOrdinal {
                interface: interface.name.clone(),
                method: method.name.clone(),
            });
        }
        if let Some(first) = seen.insert(ordinal, method.name.clone()) {
            return Err(OrdinalError::Collision {
                interface: interface.name.clone(),
                ordinal,
                first,
                second: method.name.clone(),
            });
        }

        ordinals.push(ordinal);
    }

    Ok(ordinals)
}
