//! Discriminant failure conditions.

use wirebind_ir::Name;

/// Errors from union tag assignment. All fatal to the compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiscriminantError {
    /// Two variants resolved to the same tag value. Never auto-resolved:
    /// silent renumbering would break wire compatibility.
    #[error("duplicate tag {tag} in {union}: {first} and {second}")]
    DuplicateTag {
        union: Name,
        tag: u32,
        first: String,
        second: String,
    },

    /// Tag 0 is reserved for "no value / invalid" and may not be pinned
    /// to a real variant.
    #[error("variant {variant} in {union} pins reserved tag 0")]
    ZeroTag { union: Name, variant: String },

    /// A union with no variants has no valid tag value.
    #[error("union {0} has no variants")]
    EmptyUnion(Name),
}

pub type DiscriminantResult<T> = std::result::Result<T, DiscriminantError>;
