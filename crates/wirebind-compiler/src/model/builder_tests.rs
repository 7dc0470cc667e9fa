//! End-to-end builder tests.

use wirebind_ir::{InterfaceDecl, Library, Method, Type};

use crate::layout::{LayoutError, LayoutFact};
use crate::model::{Config, DispatchError, PhaseError, build};
use crate::ordinals::OrdinalPolicy;
use crate::tags::DiscriminantError;
use crate::test_utils::{fixture_library, int32, name, params, struct_decl, union_decl};

#[test]
fn fixture_struct_and_union_facts() {
    let model = build(&fixture_library(), Config::default()).unwrap();

    assert_eq!(model.structs.len(), 1);
    assert_eq!(model.structs[0].layout, LayoutFact::new(4, 4));
    assert_eq!(model.structs[0].members[0].offset, 0);

    assert_eq!(model.unions.len(), 1);
    assert_eq!(model.unions[0].layout, LayoutFact::new(8, 4));
    assert_eq!(model.unions[0].variants[0].tag, 1);
}

#[test]
fn fixture_interface_has_one_one_way_call() {
    let model = build(&fixture_library(), Config::default()).unwrap();
    let interface = &model.interfaces[0];

    assert_eq!(interface.methods.len(), 1);
    let call = &interface.methods[0];
    assert_eq!(call.ordinal, 1);
    assert_eq!(call.request, LayoutFact::EMPTY);
    assert_eq!(call.response, None);
    assert!(call.is_one_way());

    // Proxy sends the request and awaits nothing.
    assert_eq!(interface.proxy.methods.len(), 1);
    let proxy = &interface.proxy.methods[0];
    assert_eq!(proxy.ordinal, 1);
    assert!(!proxy.expects_response);

    // No events declared, so no event proxy.
    assert!(interface.event_proxy.is_none());
    assert!(!interface.service.has_events);
}

#[test]
fn unknown_ordinal_dispatch_fails_loudly() {
    let model = build(&fixture_library(), Config::default()).unwrap();
    let stub = &model.interfaces[0].stub;

    assert_eq!(stub.dispatch(1), Ok(0));
    assert_eq!(stub.dispatch(999), Err(DispatchError(999)));
}

#[test]
fn identically_named_methods_get_distinct_ordinals() {
    // Ordinals pair with methods by position, so a repeated method name
    // must not collapse two calls onto one ordinal.
    let mut library = Library::new("test");
    let call = Method {
        name: "m".to_string(),
        request: Some(vec![]),
        response: None,
    };
    library.declare_interface(InterfaceDecl {
        name: name("Twin"),
        methods: vec![call.clone(), call],
    });

    let model = build(&library, Config::default()).unwrap();
    let ordinals: Vec<u32> = model.interfaces[0].methods.iter().map(|m| m.ordinal).collect();
    assert_eq!(ordinals, [1, 2]);
}

#[test]
fn constants_flow_through() {
    let model = build(&fixture_library(), Config::default()).unwrap();

    assert_eq!(model.consts.len(), 1);
    assert_eq!(model.consts[0].name, name("C"));
}

#[test]
fn building_twice_is_bit_identical() {
    let library = fixture_library();

    let first = build(&library, Config::default()).unwrap();
    let second = build(&library, Config::default()).unwrap();
    assert_eq!(first, second);

    let hashed = Config {
        ordinal_policy: OrdinalPolicy::NameHash,
    };
    assert_eq!(build(&library, hashed).unwrap(), build(&library, hashed).unwrap());
}

#[test]
fn events_land_on_the_event_proxy_only() {
    let mut library = fixture_library();
    library.declare_interface(InterfaceDecl {
        name: name("Watcher"),
        methods: vec![
            Method {
                name: "watch".to_string(),
                request: Some(vec![]),
                response: Some(params(&[("state", int32())])),
            },
            Method {
                name: "on_change".to_string(),
                request: None,
                response: Some(params(&[("state", int32())])),
            },
        ],
    });

    let model = build(&library, Config::default()).unwrap();
    let watcher = model
        .interfaces
        .iter()
        .find(|i| i.name == name("Watcher"))
        .unwrap();

    assert_eq!(watcher.methods.len(), 1);
    assert_eq!(watcher.methods[0].name, "watch");
    assert!(!watcher.methods[0].is_one_way());

    let events = &watcher.event_proxy.as_ref().unwrap().events;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "on_change");
    assert_eq!(events[0].ordinal, 2);
    assert_eq!(events[0].payload, LayoutFact::new(4, 4));

    // The stub never dispatches an event ordinal.
    assert_eq!(watcher.stub.dispatch(2), Err(DispatchError(2)));
    assert!(watcher.service.has_events);
}

#[test]
fn layout_failure_names_the_owning_struct() {
    let mut library = Library::new("test");
    library.declare_struct(struct_decl(
        "Broken",
        &[("field", Type::Identifier(name("Missing")))],
    ));

    let err = build(&library, Config::default()).unwrap_err();
    assert_eq!(err.name, name("Broken"));
    assert_eq!(
        err.source,
        PhaseError::Layout(LayoutError::UnresolvedType(name("Missing")))
    );
}

#[test]
fn cyclic_embedding_aborts_the_build() {
    let mut library = Library::new("test");
    library.declare_struct(struct_decl(
        "Node",
        &[("next", Type::Identifier(name("Node")))],
    ));

    let err = build(&library, Config::default()).unwrap_err();
    assert_eq!(err.name, name("Node"));
    assert!(matches!(
        err.source,
        PhaseError::Layout(LayoutError::CyclicEmbedding(_))
    ));
}

#[test]
fn empty_union_aborts_the_build() {
    let mut library = fixture_library();
    library.declare_union(union_decl("Empty", &[]));

    let err = build(&library, Config::default()).unwrap_err();
    assert_eq!(err.name, name("Empty"));
    assert_eq!(
        err.source,
        PhaseError::Discriminant(DiscriminantError::EmptyUnion(name("Empty")))
    );
}

#[test]
fn no_partial_model_on_failure() {
    // A failure in a later declaration still yields Err, not a model
    // missing that declaration.
    let mut library = fixture_library();
    library.declare_struct(struct_decl(
        "Broken",
        &[("field", Type::Identifier(name("Missing")))],
    ));

    assert!(build(&library, Config::default()).is_err());
}
