//! The closed wire type set.
//!
//! Every field, variant, and parameter type is drawn from this enum:
//! primitives, handle-like references, nested declared types, and
//! containers of the above. There is no open extension point; the layout
//! engine matches exhaustively.

use serde::{Deserialize, Serialize};

use crate::name::Name;

/// Built-in scalar types with fixed wire layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Bool,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
}

impl Primitive {
    /// On-wire size in bytes.
    pub fn size(self) -> u32 {
        match self {
            Self::Bool | Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Int64 | Self::Uint64 | Self::Float64 => 8,
        }
    }

    /// On-wire alignment in bytes. Primitives are naturally aligned.
    pub fn alignment(self) -> u32 {
        self.size()
    }

    /// Schema-level spelling.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Uint8 => "uint8",
            Self::Int16 => "int16",
            Self::Uint16 => "uint16",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }
}

/// Kernel object kind carried by a handle reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleSubtype {
    Handle,
    Channel,
    Event,
    Socket,
    Vmo,
}

/// A field, variant, or parameter type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Type {
    Primitive(Primitive),
    /// Untyped or kernel-typed handle reference.
    Handle(HandleSubtype),
    /// Client end of an interface channel.
    ClientEnd(Name),
    /// Server end of an interface channel.
    ServerEnd(Name),
    /// Fixed-length inline array.
    Array { element: Box<Type>, length: u32 },
    /// Variable-length sequence; only its header is inline.
    Vector {
        element: Box<Type>,
        max_length: Option<u32>,
    },
    /// UTF-8 string; only its header is inline.
    String { max_length: Option<u32> },
    /// Reference to a declared struct or union, embedded inline.
    Identifier(Name),
}
