//! Declarations and the library container.
//!
//! A `Library` is one compilation unit's worth of resolved declarations.
//! It is produced once by the front end and read-only afterwards; the
//! compiler never mutates it. Declaration order is significant everywhere:
//! it fixes wire position for members and default tag/ordinal assignment.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::name::Name;
use crate::types::Type;

/// A resolved constant value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConstValue {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
}

/// `const` declaration. Constants have no wire layout; they flow through
/// the binding model untouched for renderers to emit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstDecl {
    pub name: Name,
    pub ty: Type,
    pub value: ConstValue,
}

/// Named struct field. Position in the member list fixes wire position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructMember {
    pub name: String,
    pub ty: Type,
}

/// `struct` declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructDecl {
    pub name: Name,
    pub members: Vec<StructMember>,
}

/// Tagged-union variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnionMember {
    pub name: String,
    pub ty: Type,
    /// Schema-pinned tag. Pinned values take precedence over positional
    /// assignment and must be unique and non-zero.
    pub explicit_tag: Option<u32>,
}

/// `union` declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnionDecl {
    pub name: Name,
    pub members: Vec<UnionMember>,
}

/// Method parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: Type,
}

/// Call shape of a method, derived from which payloads it declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodKind {
    /// Request only; the caller gets no reply.
    OneWay,
    /// Request and response; the caller awaits a typed reply.
    TwoWay,
    /// Response only: an unsolicited server-initiated message.
    Event,
}

/// Interface method.
///
/// At least one of `request`/`response` is present; the front end
/// guarantees this. A method with no request is an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub request: Option<Vec<Parameter>>,
    pub response: Option<Vec<Parameter>>,
}

impl Method {
    pub fn kind(&self) -> MethodKind {
        match (&self.request, &self.response) {
            (Some(_), None) => MethodKind::OneWay,
            (Some(_), Some(_)) => MethodKind::TwoWay,
            (None, _) => MethodKind::Event,
        }
    }

    pub fn is_event(&self) -> bool {
        self.kind() == MethodKind::Event
    }
}

/// `interface` declaration: an ordered sequence of methods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub name: Name,
    pub methods: Vec<Method>,
}

/// One compilation unit's resolved declarations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    pub consts: IndexMap<Name, ConstDecl>,
    pub structs: IndexMap<Name, StructDecl>,
    pub unions: IndexMap<Name, UnionDecl>,
    pub interfaces: IndexMap<Name, InterfaceDecl>,
}

/// Borrowed view of one declaration, for name lookups across all kinds.
#[derive(Clone, Copy, Debug)]
pub enum DeclRef<'a> {
    Const(&'a ConstDecl),
    Struct(&'a StructDecl),
    Union(&'a UnionDecl),
    Interface(&'a InterfaceDecl),
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn declare_const(&mut self, decl: ConstDecl) {
        self.consts.insert(decl.name.clone(), decl);
    }

    pub fn declare_struct(&mut self, decl: StructDecl) {
        self.structs.insert(decl.name.clone(), decl);
    }

    pub fn declare_union(&mut self, decl: UnionDecl) {
        self.unions.insert(decl.name.clone(), decl);
    }

    pub fn declare_interface(&mut self, decl: InterfaceDecl) {
        self.interfaces.insert(decl.name.clone(), decl);
    }

    /// Look up any declaration by fully-qualified name.
    pub fn lookup(&self, name: &Name) -> Option<DeclRef<'_>> {
        if let Some(d) = self.structs.get(name) {
            return Some(DeclRef::Struct(d));
        }
        if let Some(d) = self.unions.get(name) {
            return Some(DeclRef::Union(d));
        }
        if let Some(d) = self.interfaces.get(name) {
            return Some(DeclRef::Interface(d));
        }
        self.consts.get(name).map(DeclRef::Const)
    }
}
