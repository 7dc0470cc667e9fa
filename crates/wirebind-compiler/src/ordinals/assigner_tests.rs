//! Unit tests for ordinal assignment.

use wirebind_ir::{InterfaceDecl, Method};

use crate::ordinals::{OrdinalError, OrdinalPolicy, assign};
use crate::test_utils::{int32, name, params};

fn interface(methods: &[(&str, bool)]) -> InterfaceDecl {
    InterfaceDecl {
        name: name("Calculator"),
        methods: methods
            .iter()
            .map(|(method_name, two_way)| Method {
                name: method_name.to_string(),
                request: Some(params(&[("x", int32())])),
                response: two_way.then(|| params(&[("y", int32())])),
            })
            .collect(),
    }
}

#[test]
fn sequential_starts_at_one_in_declaration_order() {
    let decl = interface(&[("add", true), ("sub", true), ("reset", false)]);
    let ordinals = assign(&decl, OrdinalPolicy::Sequential).unwrap();

    assert_eq!(ordinals, [1, 2, 3]);
}

#[test]
fn ordinals_are_unique_and_nonzero() {
    for policy in [OrdinalPolicy::Sequential, OrdinalPolicy::NameHash] {
        let decl = interface(&[("add", true), ("sub", true), ("mul", true), ("div", true)]);
        let mut values = assign(&decl, policy).unwrap();

        assert!(values.iter().all(|&o| o != 0));
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), decl.methods.len());
    }
}

#[test]
fn hash_policy_is_stable_across_runs() {
    let decl = interface(&[("add", true), ("sub", true)]);

    let first = assign(&decl, OrdinalPolicy::NameHash).unwrap();
    let second = assign(&decl, OrdinalPolicy::NameHash).unwrap();
    assert_eq!(first, second);
}

#[test]
fn hash_covers_interface_identity() {
    // Same method name under a different interface hashes differently,
    // because the hash input is the fully-qualified name.
    let a = interface(&[("add", true)]);
    let mut b = interface(&[("add", true)]);
    b.name = name("Other");

    let oa = assign(&a, OrdinalPolicy::NameHash).unwrap();
    let ob = assign(&b, OrdinalPolicy::NameHash).unwrap();
    assert_ne!(oa[0], ob[0]);
}

#[test]
fn identically_named_methods_keep_their_own_ordinals() {
    // Positional keying: the second `m` must not overwrite the first.
    let decl = interface(&[("m", true), ("m", true)]);
    let ordinals = assign(&decl, OrdinalPolicy::Sequential).unwrap();

    assert_eq!(ordinals, [1, 2]);
}

#[test]
fn identically_named_methods_collide_under_the_hash_policy() {
    // Equal fully-qualified names hash to the same ordinal, which must
    // surface as a collision rather than one entry replacing the other.
    let decl = interface(&[("m", true), ("m", true)]);
    let err = assign(&decl, OrdinalPolicy::NameHash).unwrap_err();

    assert!(matches!(err, OrdinalError::Collision { .. }));
}

#[test]
fn hash_collision_is_fatal() {
    // `plumless` and `buckeroo` are a classic CRC-32 colliding pair;
    // equal lengths keep the collision under the shared qualified prefix.
    let decl = interface(&[("plumless", true), ("buckeroo", true)]);
    let err = assign(&decl, OrdinalPolicy::NameHash).unwrap_err();

    match err {
        OrdinalError::Collision { interface, ordinal, first, second } => {
            assert_eq!(interface, name("Calculator"));
            assert_ne!(ordinal, 0);
            assert_eq!(first, "plumless");
            assert_eq!(second, "buckeroo");
        }
        other => panic!("expected a collision, got {other:?}"),
    }
}

#[test]
fn events_share_the_ordinal_space() {
    let mut decl = interface(&[("add", true)]);
    decl.methods.push(Method {
        name: "on_change".to_string(),
        request: None,
        response: Some(params(&[("value", int32())])),
    });

    let ordinals = assign(&decl, OrdinalPolicy::Sequential).unwrap();
    assert_eq!(ordinals, [1, 2]);
}

#[test]
fn empty_interface_assigns_nothing() {
    let decl = InterfaceDecl {
        name: name("Empty"),
        methods: vec![],
    };
    assert!(assign(&decl, OrdinalPolicy::Sequential).unwrap().is_empty());
}
