//! Converts the swc JSX AST into the parser-agnostic [`InputNode`] tree.

use jsxflat_core::{
    Attribute, AttributeValue, ElementNode, InputNode, JsxAtom, UnsupportedKind, UnsupportedNode,
};
use swc_core::{
    common::Spanned,
    ecma::ast::{
        Expr, JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement, JSXElementChild,
        JSXElementName, JSXExpr, JSXMemberExpr, JSXObject, Lit,
    },
};

/// Converts a JSX element and its whole subtree
pub fn convert_element(element: JSXElement) -> ElementNode {
    let JSXElement {
        span,
        opening,
        children,
        ..
    } = element;

    let tag_name = element_name_to_atom(&opening.name);

    let attributes = opening.attrs.into_iter().map(convert_attribute).collect();

    let children = children.into_iter().map(convert_child).collect();

    ElementNode {
        tag_name,
        attributes,
        children,
        span,
    }
}

/// Converts a single JSX child.
/// Fragments and spread children are kept as [`InputNode::Unsupported`].
pub fn convert_child(child: JSXElementChild) -> InputNode {
    match child {
        JSXElementChild::JSXText(text) => InputNode::Text(text.value, text.span),

        JSXElementChild::JSXExprContainer(container) => match container.expr {
            JSXExpr::Expr(expr) => InputNode::Expression(expr, container.span),
            JSXExpr::JSXEmptyExpr(_) => InputNode::EmptyHole(container.span),
        },

        JSXElementChild::JSXElement(element) => InputNode::Element(convert_element(*element)),

        JSXElementChild::JSXFragment(fragment) => InputNode::Unsupported(UnsupportedNode {
            kind: UnsupportedKind::Fragment,
            span: fragment.span,
        }),

        JSXElementChild::JSXSpreadChild(spread) => InputNode::Unsupported(UnsupportedNode {
            kind: UnsupportedKind::SpreadChild,
            span: spread.span,
        }),
    }
}

fn convert_attribute(attr: JSXAttrOrSpread) -> Attribute {
    match attr {
        JSXAttrOrSpread::JSXAttr(JSXAttr {
            span, name, value, ..
        }) => Attribute::Regular {
            name: attr_name_to_atom(&name),
            value: value.and_then(convert_attribute_value),
            span,
        },
        JSXAttrOrSpread::SpreadElement(spread) => {
            let span = spread.span();
            Attribute::Spread {
                argument: spread.expr,
                span,
            }
        }
    }
}

fn convert_attribute_value(value: JSXAttrValue) -> Option<AttributeValue> {
    let converted = match value {
        JSXAttrValue::Lit(Lit::Str(s)) => AttributeValue::Str(s.value),
        JSXAttrValue::Lit(lit) => AttributeValue::Expr(Box::new(Expr::Lit(lit))),
        JSXAttrValue::JSXExprContainer(container) => match container.expr {
            JSXExpr::Expr(expr) => AttributeValue::Expr(expr),
            // `attr={}` carries nothing
            JSXExpr::JSXEmptyExpr(_) => return None,
        },
        JSXAttrValue::JSXElement(element) => AttributeValue::Expr(Box::new(Expr::JSXElement(element))),
        JSXAttrValue::JSXFragment(fragment) => {
            AttributeValue::Expr(Box::new(Expr::JSXFragment(fragment)))
        }
    };

    Some(converted)
}

/// `div`, `ui.Button`, `svg:rect`
fn element_name_to_atom(name: &JSXElementName) -> JsxAtom {
    match name {
        JSXElementName::Ident(ident) => ident.sym.clone(),
        JSXElementName::JSXMemberExpr(member) => JsxAtom::from(member_expr_to_string(member)),
        JSXElementName::JSXNamespacedName(namespaced) => {
            JsxAtom::from(format!("{}:{}", namespaced.ns.sym, namespaced.name.sym))
        }
    }
}

fn member_expr_to_string(member: &JSXMemberExpr) -> String {
    let obj = match &member.obj {
        JSXObject::Ident(ident) => ident.sym.to_string(),
        JSXObject::JSXMemberExpr(inner) => member_expr_to_string(inner),
    };

    format!("{}.{}", obj, member.prop.sym)
}

fn attr_name_to_atom(name: &JSXAttrName) -> JsxAtom {
    match name {
        JSXAttrName::Ident(ident) => ident.sym.clone(),
        JSXAttrName::JSXNamespacedName(namespaced) => {
            JsxAtom::from(format!("{}:{}", namespaced.ns.sym, namespaced.name.sym))
        }
    }
}
