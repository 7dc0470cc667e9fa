//! Resolved declaration graph consumed by the wirebind compiler.
//!
//! This crate contains:
//! - Fully-qualified declaration names (`Name`)
//! - The closed wire type set (`Type`, `Primitive`, `HandleSubtype`)
//! - Declarations (const, struct, union, interface/method) and the
//!   read-only `Library` container
//!
//! The graph is produced by an external front end; nothing here parses
//! schema text. All collections preserve declaration order.

pub mod decl;
pub mod name;
pub mod types;


pub use decl::{
    ConstDecl, ConstValue, DeclRef, InterfaceDecl, Library, Method, MethodKind, Parameter,
    StructDecl, StructMember, UnionDecl, UnionMember,
};
pub use name::Name;
pub use types::{HandleSubtype, Primitive, Type};
