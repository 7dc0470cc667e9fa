//! Builder failure conditions.

use wirebind_ir::Name;

use crate::layout::LayoutError;
use crate::ordinals::OrdinalError;
use crate::tags::DiscriminantError;

/// Any phase failure, re-surfaced with the owning declaration's identity
/// so the end user sees which type or interface failed, not just which
/// rule. Fatal: no partial model is ever published.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to compile {name}")]
pub struct BuilderError {
    /// The declaration being compiled when the phase failed.
    pub name: Name,
    #[source]
    pub source: PhaseError,
}

impl BuilderError {
    pub fn new(name: &Name, source: impl Into<PhaseError>) -> Self {
        Self {
            name: name.clone(),
            source: source.into(),
        }
    }
}

/// The underlying phase failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhaseError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Discriminant(#[from] DiscriminantError),
    #[error(transparent)]
    Ordinal(#[from] OrdinalError),
}

pub type BuilderResult<T> = std::result::Result<T, BuilderError>;
