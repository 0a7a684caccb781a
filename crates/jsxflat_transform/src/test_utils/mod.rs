use jsxflat_core::{InputNode, NodeRecord, RenderRecord};
use jsxflat_parser::{parse_jsx, JsxLang};
use swc_core::ecma::ast::{Expr, ExprOrSpread};

pub fn jsx(raw: &str) -> InputNode {
    let mut errors = Vec::new();
    let node = parse_jsx(raw, JsxLang::Jsx, &mut errors).unwrap();
    assert!(errors.is_empty(), "{:?}", errors);
    node
}

/// Renders an identifier as its name and an array of identifiers as `[a,b]`
pub fn ident_list(expr: &Expr) -> String {
    match expr {
        Expr::Ident(ident) => ident.sym.to_string(),
        Expr::Array(array) => {
            let names: Vec<String> = array
                .elems
                .iter()
                .map(|elem| match elem {
                    Some(ExprOrSpread { spread: None, expr }) => ident_list(expr),
                    other => panic!("Expected a plain element, got {:?}", other),
                })
                .collect();
            format!("[{}]", names.join(","))
        }
        other => panic!("Expected an identifier or an array, got {:?}", other),
    }
}

/// Identifier names of the records, in emission order
pub fn record_names(records: &[RenderRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.identifier().sym.to_string())
        .collect()
}

pub fn as_node(record: &RenderRecord) -> &NodeRecord {
    match record {
        RenderRecord::Node(node) => node,
        other => panic!("Expected a node record, got {:?}", other),
    }
}
