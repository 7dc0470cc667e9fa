//! Section-by-section model dump.

use std::fmt::Write as _;

use wirebind_ir::{ConstValue, Type};

use crate::layout::LayoutFact;
use crate::model::BindingModel;

/// Render a binding model to its canonical text form.
///
/// One section per declaration, blank-line separated, in model order
/// (which is declaration order). Layout lines use the fixed shape
/// `size N align M` that `verify::parse_layout_constants` re-reads.
pub fn render(model: &BindingModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "library {}", model.library);

    for c in &model.consts {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "const {} {} = {}",
            c.name,
            type_name(&c.ty),
            const_value(&c.value)
        );
    }

    for s in &model.structs {
        let _ = writeln!(out);
        let _ = writeln!(out, "struct {} {}", s.name, fact(s.layout));
        for m in &s.members {
            let _ = writeln!(
                out,
                "  {} {} offset {} {}",
                m.name,
                type_name(&m.ty),
                m.offset,
                fact(m.layout)
            );
        }
    }

    for u in &model.unions {
        let _ = writeln!(out);
        let _ = writeln!(out, "union {} {} payload {}", u.name, fact(u.layout), u.payload_offset);
        for v in &u.variants {
            let _ = writeln!(out, "  tag {} {} {}", v.tag, v.name, fact(v.layout));
        }
    }

    for i in &model.interfaces {
        let _ = writeln!(out);
        let _ = writeln!(out, "interface {}", i.name);
        for m in &i.methods {
            match m.response {
                Some(response) => {
                    let _ = writeln!(
                        out,
                        "  method {} ordinal {} request {} response {}",
                        m.name,
                        m.ordinal,
                        fact(m.request),
                        fact(response)
                    );
                }
                None => {
                    let _ = writeln!(
                        out,
                        "  method {} ordinal {} request {} one_way",
                        m.name,
                        m.ordinal,
                        fact(m.request)
                    );
                }
            }
        }
        for p in &i.proxy.methods {
            let kind = if p.expects_response { "call" } else { "send" };
            let _ = writeln!(out, "  proxy {} ordinal {} {}", p.name, p.ordinal, kind);
        }
        for ordinal in i.stub.ordinals() {
            // Dispatch targets are call-descriptor indices; name them.
            if let Ok(index) = i.stub.dispatch(ordinal) {
                let _ = writeln!(out, "  stub {} -> {}", ordinal, i.methods[index].name);
            }
        }
        let _ = writeln!(out, "  service bindings keyed, events {}", i.service.has_events);
        if let Some(ep) = &i.event_proxy {
            for e in &ep.events {
                let _ = writeln!(
                    out,
                    "  event {} ordinal {} payload {}",
                    e.name,
                    e.ordinal,
                    fact(e.payload)
                );
            }
        }
    }

    out
}

fn fact(layout: LayoutFact) -> String {
    format!("size {} align {}", layout.size, layout.alignment)
}

/// Schema-level spelling of a type.
pub fn type_name(ty: &Type) -> String {
    match ty {
        Type::Primitive(p) => p.name().to_string(),
        Type::Handle(subtype) => format!("handle<{:?}>", subtype).to_lowercase(),
        Type::ClientEnd(name) => format!("client_end<{}>", name),
        Type::ServerEnd(name) => format!("server_end<{}>", name),
        Type::Array { element, length } => format!("array<{},{}>", type_name(element), length),
        Type::Vector {
            element,
            max_length,
        } => match max_length {
            Some(max) => format!("vector<{}>:{}", type_name(element), max),
            None => format!("vector<{}>", type_name(element)),
        },
        Type::String { max_length } => match max_length {
            Some(max) => format!("string:{}", max),
            None => "string".to_string(),
        },
        Type::Identifier(name) => name.to_string(),
    }
}

fn const_value(value: &ConstValue) -> String {
    match value {
        ConstValue::Bool(v) => v.to_string(),
        ConstValue::Int(v) => v.to_string(),
        ConstValue::Uint(v) => v.to_string(),
        ConstValue::Float(v) => v.to_string(),
        ConstValue::String(v) => format!("{:?}", v),
    }
}
