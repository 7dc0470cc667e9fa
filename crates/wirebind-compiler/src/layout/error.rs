//! Layout failure conditions.

use wirebind_ir::Name;

/// Errors from wire layout computation. All are fatal to the compilation:
/// layout must be total over the declaration graph or the build aborts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Reference to a name with no declaration, or to a declaration that
    /// is not a wire type (e.g. embedding an interface by value).
    #[error("unresolved type reference: {0}")]
    UnresolvedType(Name),

    /// A struct or union embeds itself, directly or transitively. Such a
    /// type has no finite wire footprint; cycles are only permitted
    /// through indirect types (handles, endpoints, vectors, strings).
    #[error("cyclic embedding: {0} contains itself by value")]
    CyclicEmbedding(Name),

    /// A computed size or offset does not fit in 32 bits. The wire format
    /// measures every footprint as a `u32`; a declaration that exceeds it
    /// has no representable layout.
    #[error("layout exceeds the 32-bit wire size limit")]
    TooLarge,
}

pub type LayoutResult<T> = std::result::Result<T, LayoutError>;
