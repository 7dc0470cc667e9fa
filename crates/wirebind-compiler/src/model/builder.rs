//! Binding model assembly.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use wirebind_ir::{InterfaceDecl, Library, MethodKind};

use crate::layout::{LayoutEngine, LayoutFact};
use crate::ordinals::{self, OrdinalPolicy};
use crate::tags;

use super::descriptors::{
    BindingModel, CallDescriptor, EventDescriptor, EventProxyDescriptor, InterfaceModel,
    MemberDescriptor, ProxyDescriptor, ProxyMethod, ServiceDescriptor, StructDescriptor,
    StubDescriptor,
};
use super::error::{BuilderError, BuilderResult};

/// Compilation configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub ordinal_policy: OrdinalPolicy,
}

/// Build the binding model for one library.
///
/// Runs layout, discriminant, and ordinal assignment over every
/// declaration and assembles the derived artifacts. Any phase failure
/// aborts the whole build: a model missing even one artifact is unsafe
/// to render into working code.
pub fn build(library: &Library, config: Config) -> BuilderResult<BindingModel> {
    let mut engine = LayoutEngine::new(library);

    let mut structs = Vec::with_capacity(library.structs.len());
    for decl in library.structs.values() {
        let laid_out = engine
            .struct_layout(&decl.members)
            .map_err(|e| BuilderError::new(&decl.name, e))?;
        let members = decl
            .members
            .iter()
            .zip(&laid_out.members)
            .map(|(member, m)| MemberDescriptor {
                name: member.name.clone(),
                ty: member.ty.clone(),
                offset: m.offset,
                layout: m.layout,
            })
            .collect();
        structs.push(StructDescriptor {
            name: decl.name.clone(),
            layout: laid_out.fact,
            members,
        });
    }

    let mut unions = Vec::with_capacity(library.unions.len());
    for decl in library.unions.values() {
        // Computes the overall fact up front, so size overflow surfaces
        // as a layout error before tag assignment runs.
        let layout = engine
            .layout_of_decl(&decl.name)
            .map_err(|e| BuilderError::new(&decl.name, e))?;
        let mut variant_layouts = Vec::with_capacity(decl.members.len());
        for member in &decl.members {
            let fact = engine
                .layout_of(&member.ty)
                .map_err(|e| BuilderError::new(&decl.name, e))?;
            variant_layouts.push(fact);
        }
        let descriptor = tags::assign(decl, &variant_layouts, layout)
            .map_err(|e| BuilderError::new(&decl.name, e))?;
        unions.push(descriptor);
    }

    let mut interfaces = Vec::with_capacity(library.interfaces.len());
    for decl in library.interfaces.values() {
        interfaces.push(build_interface(decl, config, &mut engine)?);
    }

    Ok(BindingModel {
        library: library.name.clone(),
        consts: library.consts.values().cloned().collect(),
        structs,
        unions,
        interfaces,
    })
}

fn build_interface(
    decl: &InterfaceDecl,
    config: Config,
    engine: &mut LayoutEngine<'_>,
) -> BuilderResult<InterfaceModel> {
    let ordinals = ordinals::assign(decl, config.ordinal_policy)
        .map_err(|e| BuilderError::new(&decl.name, e))?;

    let mut methods = Vec::new();
    let mut proxy_methods = Vec::new();
    let mut dispatch: IndexMap<u32, usize> = IndexMap::new();
    let mut events = Vec::new();

    for (method, &ordinal) in decl.methods.iter().zip(&ordinals) {
        let payload = |engine: &mut LayoutEngine<'_>, params: &Option<Vec<_>>| {
            params
                .as_ref()
                .map(|p| engine.message_layout(p))
                .transpose()
                .map_err(|e| BuilderError::new(&decl.name, e))
        };
        let request = payload(engine, &method.request)?;
        let response = payload(engine, &method.response)?;

        match method.kind() {
            MethodKind::Event => {
                events.push(EventDescriptor {
                    name: method.name.clone(),
                    ordinal,
                    payload: response.unwrap_or(LayoutFact::EMPTY),
                });
            }
            MethodKind::OneWay | MethodKind::TwoWay => {
                let request = request.unwrap_or(LayoutFact::EMPTY);
                proxy_methods.push(ProxyMethod {
                    name: method.name.clone(),
                    ordinal,
                    request,
                    expects_response: response.is_some(),
                });
                dispatch.insert(ordinal, methods.len());
                methods.push(CallDescriptor {
                    name: method.name.clone(),
                    ordinal,
                    request,
                    response,
                });
            }
        }
    }

    let has_events = !events.is_empty();
    Ok(InterfaceModel {
        name: decl.name.clone(),
        methods,
        proxy: ProxyDescriptor {
            interface: decl.name.clone(),
            methods: proxy_methods,
        },
        stub: StubDescriptor::new(decl.name.clone(), dispatch),
        service: ServiceDescriptor {
            interface: decl.name.clone(),
            has_events,
        },
        event_proxy: has_events.then(|| EventProxyDescriptor {
            interface: decl.name.clone(),
            events,
        }),
    })
}
