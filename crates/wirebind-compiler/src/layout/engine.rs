//! Core layout computation.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use wirebind_ir::{DeclRef, Library, Name, Parameter, StructMember, Type};

use super::error::{LayoutError, LayoutResult};

/// Inline footprint of any handle-like reference (handles, endpoints).
const HANDLE: LayoutFact = LayoutFact { size: 4, alignment: 4 };

/// Inline header of vectors and strings: a count plus an out-of-line
/// pointer. The header layout is independent of the element type.
const VECTOR_HEADER: LayoutFact = LayoutFact { size: 16, alignment: 8 };

/// A type's computed on-wire size and alignment.
///
/// Nonempty layouts have power-of-two alignment and a size that is a
/// multiple of it. Empty payloads are the one exception: they occupy no
/// bytes and carry `alignment 0`, matching what generated bindings report
/// for a zero-field message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutFact {
    pub size: u32,
    pub alignment: u32,
}

impl LayoutFact {
    /// Layout of a zero-field payload.
    pub const EMPTY: Self = Self { size: 0, alignment: 0 };

    pub const fn new(size: u32, alignment: u32) -> Self {
        Self { size, alignment }
    }

    pub fn is_empty(self) -> bool {
        self.size == 0
    }
}

/// Round `value` up to the next multiple of `alignment`.
///
/// `alignment` 0 or 1 leaves the value unchanged.
pub fn round_up(value: u32, alignment: u32) -> u32 {
    if alignment <= 1 {
        return value;
    }
    value.div_ceil(alignment) * alignment
}

/// `round_up` for cumulative sizes, where the result may not fit.
fn checked_round_up(value: u32, alignment: u32) -> Option<u32> {
    if alignment <= 1 {
        return Some(value);
    }
    value.div_ceil(alignment).checked_mul(alignment)
}

/// Resolved layout of one struct member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberLayout {
    pub offset: u32,
    pub layout: LayoutFact,
}

/// Layout of an ordered member sequence: overall fact plus per-member
/// offsets. Padding falls between consecutive `(offset, size)` spans and
/// before the rounded-up end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructLayout {
    pub fact: LayoutFact,
    pub members: Vec<MemberLayout>,
}

/// Memoizing layout computer over one library.
///
/// Facts are computed once per declaration name and never recomputed;
/// repeated references are O(1). The in-progress set turns self-embedding
/// into a `CyclicEmbedding` error instead of unbounded recursion.
pub struct LayoutEngine<'a> {
    library: &'a Library,
    memo: IndexMap<Name, LayoutFact>,
    in_progress: IndexSet<Name>,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(library: &'a Library) -> Self {
        Self {
            library,
            memo: IndexMap::new(),
            in_progress: IndexSet::new(),
        }
    }

    /// Layout of any field/parameter type.
    pub fn layout_of(&mut self, ty: &Type) -> LayoutResult<LayoutFact> {
        match ty {
            Type::Primitive(p) => Ok(LayoutFact::new(p.size(), p.alignment())),
            Type::Handle(_) | Type::ClientEnd(_) | Type::ServerEnd(_) => Ok(HANDLE),
            Type::Vector { .. } | Type::String { .. } => Ok(VECTOR_HEADER),
            Type::Array { element, length } => {
                let element = self.layout_of(element)?;
                let size = element
                    .size
                    .checked_mul(*length)
                    .ok_or(LayoutError::TooLarge)?;
                Ok(LayoutFact::new(size, element.alignment))
            }
            Type::Identifier(name) => self.layout_of_decl(name),
        }
    }

    /// Layout of a declared struct or union, by name. Memoized.
    pub fn layout_of_decl(&mut self, name: &Name) -> LayoutResult<LayoutFact> {
        if let Some(&fact) = self.memo.get(name) {
            return Ok(fact);
        }
        if self.in_progress.contains(name) {
            return Err(LayoutError::CyclicEmbedding(name.clone()));
        }

        let decl = self
            .library
            .lookup(name)
            .ok_or_else(|| LayoutError::UnresolvedType(name.clone()))?;

        self.in_progress.insert(name.clone());
        let fact = match decl {
            DeclRef::Struct(s) => self.struct_layout(&s.members)?.fact,
            DeclRef::Union(u) => {
                let mut variants = Vec::with_capacity(u.members.len());
                for member in &u.members {
                    variants.push(self.layout_of(&member.ty)?);
                }
                crate::tags::overall_layout(&variants).ok_or(LayoutError::TooLarge)?
            }
            // Constants and interfaces are not wire types.
            DeclRef::Const(_) | DeclRef::Interface(_) => {
                self.in_progress.shift_remove(name);
                return Err(LayoutError::UnresolvedType(name.clone()));
            }
        };
        self.in_progress.shift_remove(name);

        self.memo.insert(name.clone(), fact);
        Ok(fact)
    }

    /// Layout of an ordered struct member list, with per-member offsets.
    pub fn struct_layout(&mut self, members: &[StructMember]) -> LayoutResult<StructLayout> {
        self.layout_sequence(members.iter().map(|m| &m.ty))
    }

    /// Layout of a method payload: the parameter list laid out as an
    /// anonymous struct.
    pub fn message_layout(&mut self, params: &[Parameter]) -> LayoutResult<LayoutFact> {
        Ok(self.layout_sequence(params.iter().map(|p| &p.ty))?.fact)
    }

    /// Sequential field placement.
    ///
    /// Each member lands at the prior cumulative size rounded up to its
    /// alignment; the total is rounded up to the overall alignment, which
    /// is the maximum member alignment. Zero members yield `EMPTY`.
    fn layout_sequence<'t>(
        &mut self,
        types: impl Iterator<Item = &'t Type>,
    ) -> LayoutResult<StructLayout> {
        let mut laid_out = Vec::new();
        let mut size = 0u32;
        let mut alignment = 0u32;

        for ty in types {
            let layout = self.layout_of(ty)?;
            let offset = checked_round_up(size, layout.alignment).ok_or(LayoutError::TooLarge)?;
            laid_out.push(MemberLayout { offset, layout });
            size = offset.checked_add(layout.size).ok_or(LayoutError::TooLarge)?;
            alignment = alignment.max(layout.alignment);
        }

        let total = checked_round_up(size, alignment).ok_or(LayoutError::TooLarge)?;
        Ok(StructLayout {
            fact: LayoutFact::new(total, alignment),
            members: laid_out,
        })
    }

    /// Facts resolved so far, in first-computed order.
    pub fn facts(&self) -> &IndexMap<Name, LayoutFact> {
        &self.memo
    }
}
