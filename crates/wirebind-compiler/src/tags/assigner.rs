//! Tag assignment and union layout math.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use wirebind_ir::{Name, UnionDecl};

use crate::layout::{LayoutFact, round_up};

use super::error::{DiscriminantError, DiscriminantResult};

/// Wire layout of the discriminant itself: a 32-bit tag.
pub const TAG_LAYOUT: LayoutFact = LayoutFact { size: 4, alignment: 4 };

/// One union variant with its assigned tag and layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDescriptor {
    pub name: String,
    pub tag: u32,
    pub layout: LayoutFact,
}

/// Discriminant table and overall layout for one union.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionDescriptor {
    pub name: Name,
    pub layout: LayoutFact,
    /// Where the variant payload starts, after the tag and its padding.
    pub payload_offset: u32,
    pub variants: Vec<VariantDescriptor>,
}

/// Overall union layout from per-variant facts.
///
/// Alignment is the maximum of the tag alignment and every variant
/// alignment; size is the tag plus the largest variant, rounded up.
/// `None` when the rounded size does not fit the 32-bit wire limit.
pub fn overall_layout(variants: &[LayoutFact]) -> Option<LayoutFact> {
    let alignment = variants
        .iter()
        .map(|v| v.alignment)
        .fold(TAG_LAYOUT.alignment, u32::max);
    let payload = variants.iter().map(|v| v.size).max().unwrap_or(0);
    let size = (u64::from(TAG_LAYOUT.size) + u64::from(payload))
        .div_ceil(u64::from(alignment))
        * u64::from(alignment);
    Some(LayoutFact::new(u32::try_from(size).ok()?, alignment))
}

/// Assign tags to a union's variants and derive its descriptor.
///
/// `variant_layouts` are the layout engine's facts for each variant, in
/// declaration order, and `layout` is the union's overall fact (see
/// [`overall_layout`]); the engine validates it against the wire size
/// limit before assignment runs. Tags are the 1-based declaration
/// position unless a variant pins an explicit value; pinned values take
/// precedence and must be unique and non-zero.
pub fn assign(
    union: &UnionDecl,
    variant_layouts: &[LayoutFact],
    layout: LayoutFact,
) -> DiscriminantResult<UnionDescriptor> {
    if union.members.is_empty() {
        return Err(DiscriminantError::EmptyUnion(union.name.clone()));
    }
    debug_assert_eq!(union.members.len(), variant_layouts.len());

    let mut seen: IndexMap<u32, String> = IndexMap::new();
    let mut variants = Vec::with_capacity(union.members.len());

    for (position, (member, &variant_layout)) in union.members.iter().zip(variant_layouts).enumerate() {
        let tag = match member.explicit_tag {
            Some(0) => {
                return Err(DiscriminantError::ZeroTag {
                    union: union.name.clone(),
                    variant: member.name.clone(),
                });
            }
            Some(pinned) => pinned,
            None => position as u32 + 1,
        };

        if let Some(first) = seen.insert(tag, member.name.clone()) {
            return Err(DiscriminantError::DuplicateTag {
                union: union.name.clone(),
                tag,
                first,
                second: member.name.clone(),
            });
        }

        variants.push(VariantDescriptor {
            name: member.name.clone(),
            tag,
            layout: variant_layout,
        });
    }

    Ok(UnionDescriptor {
        name: union.name.clone(),
        layout,
        payload_offset: round_up(TAG_LAYOUT.size, layout.alignment),
        variants,
    })
}
