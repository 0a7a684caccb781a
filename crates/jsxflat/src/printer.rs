//! Human- and machine-readable dumps of render records.
//! These are debugging aids, not code generation.

use std::fmt::Write;

use jsxflat_core::{Attribute, AttributeValue, RenderRecord};
use serde::Serialize;
use swc_core::common::{sync::Lrc, SourceMap};
use swc_ecma_codegen::{text_writer::JsWriter, Emitter, Node};

/// One line per record, in emission order:
///
/// ```text
/// _el2 = text "Hello"
/// _el3 = expr name
/// _el = native <div> [_el2, _el3]
/// ```
pub fn dump_records(records: &[RenderRecord]) -> String {
    let mut out = String::new();

    for record in records {
        let _ = match record {
            RenderRecord::Text(text) => {
                writeln!(out, "{} = text {:?}", text.identifier.sym, &*text.value)
            }
            RenderRecord::Expr(expr) => writeln!(
                out,
                "{} = expr {}",
                expr.identifier.sym,
                stringify(&*expr.expression)
            ),
            RenderRecord::Node(node) => {
                let kind = if node.is_native { "native" } else { "component" };
                let attributes: String = node
                    .attributes
                    .iter()
                    .map(|attr| format!(" {}", format_attribute(attr)))
                    .collect();
                let children: Vec<&str> = node.children.iter().map(|c| &*c.sym).collect();

                writeln!(
                    out,
                    "{} = {} <{}{}> [{}]",
                    node.identifier.sym,
                    kind,
                    node.tag,
                    attributes,
                    children.join(", ")
                )
            }
        };
    }

    out
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecordSummary {
    Node {
        identifier: String,
        tag: String,
        is_native: bool,
        attributes: Vec<String>,
        children: Vec<String>,
    },
    Text {
        identifier: String,
        value: String,
    },
    Expr {
        identifier: String,
        expression: String,
    },
}

pub fn summarize_records(records: &[RenderRecord]) -> Vec<RecordSummary> {
    records
        .iter()
        .map(|record| match record {
            RenderRecord::Node(node) => RecordSummary::Node {
                identifier: node.identifier.sym.to_string(),
                tag: node.tag.to_string(),
                is_native: node.is_native,
                attributes: node.attributes.iter().map(format_attribute).collect(),
                children: node.children.iter().map(|c| c.sym.to_string()).collect(),
            },
            RenderRecord::Text(text) => RecordSummary::Text {
                identifier: text.identifier.sym.to_string(),
                value: text.value.to_string(),
            },
            RenderRecord::Expr(expr) => RecordSummary::Expr {
                identifier: expr.identifier.sym.to_string(),
                expression: stringify(&*expr.expression),
            },
        })
        .collect()
}

/// `name`, `name="value"`, `name={expr}` or `{...expr}`
fn format_attribute(attr: &Attribute) -> String {
    match attr {
        Attribute::Regular { name, value, .. } => match value {
            None => name.to_string(),
            Some(AttributeValue::Str(s)) => format!("{}={:?}", name, &**s),
            Some(AttributeValue::Expr(expr)) => format!("{}={{{}}}", name, stringify(&**expr)),
        },
        Attribute::Spread { argument, .. } => format!("{{...{}}}", stringify(&**argument)),
    }
}

pub fn stringify(item: &impl Node) -> String {
    // Emitting the result requires some setup with SWC
    let cm: Lrc<SourceMap> = Default::default();
    let mut buff: Vec<u8> = Vec::new();
    let writer: JsWriter<&mut Vec<u8>> = JsWriter::new(cm.clone(), "\n", &mut buff, None);

    let mut emitter_cfg = swc_ecma_codegen::Config::default();
    emitter_cfg.minify = true;

    let mut emitter = Emitter {
        cfg: emitter_cfg,
        comments: None,
        wr: writer,
        cm,
    };

    let _ = item.emit_with(&mut emitter);

    String::from_utf8_lossy(&buff).into_owned()
}
