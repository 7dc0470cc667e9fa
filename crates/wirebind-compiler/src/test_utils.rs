//! Test fixtures shared across the compiler test modules.

use wirebind_ir::{
    ConstDecl, ConstValue, InterfaceDecl, Library, Method, Name, Parameter, Primitive, StructDecl,
    StructMember, Type, UnionDecl, UnionMember,
};

pub fn name(ident: &str) -> Name {
    Name::new("test", ident)
}

pub fn int32() -> Type {
    Type::Primitive(Primitive::Int32)
}

pub fn struct_decl(ident: &str, members: &[(&str, Type)]) -> StructDecl {
    StructDecl {
        name: name(ident),
        members: members
            .iter()
            .map(|(member_name, ty)| StructMember {
                name: member_name.to_string(),
                ty: ty.clone(),
            })
            .collect(),
    }
}

pub fn union_decl(ident: &str, members: &[(&str, Type)]) -> UnionDecl {
    UnionDecl {
        name: name(ident),
        members: members
            .iter()
            .map(|(member_name, ty)| UnionMember {
                name: member_name.to_string(),
                ty: ty.clone(),
                explicit_tag: None,
            })
            .collect(),
    }
}

pub fn params(list: &[(&str, Type)]) -> Vec<Parameter> {
    list.iter()
        .map(|(param_name, ty)| Parameter {
            name: param_name.to_string(),
            ty: ty.clone(),
        })
        .collect()
}

/// The reference fixture: one const, one single-field struct, one
/// single-variant union, and one interface with a single zero-argument,
/// no-response method.
pub fn fixture_library() -> Library {
    let mut library = Library::new("test");
    library.declare_const(ConstDecl {
        name: name("C"),
        ty: int32(),
        value: ConstValue::Int(4),
    });
    library.declare_struct(struct_decl("Struct", &[("field", int32())]));
    library.declare_union(union_decl("Union", &[("field", int32())]));
    library.declare_interface(InterfaceDecl {
        name: name("Interface"),
        methods: vec![Method {
            name: "method".to_string(),
            request: Some(vec![]),
            response: None,
        }],
    });
    library
}
