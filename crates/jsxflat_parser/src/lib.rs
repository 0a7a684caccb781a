//! Parses JSX source into the [`InputNode`] tree consumed by `jsxflat_transform`.
//!
//! ## Example
//! ```
//! use jsxflat_core::InputNode;
//! use jsxflat_parser::{parse_jsx, JsxLang};
//!
//! let mut errors = Vec::new();
//! let root = parse_jsx("<div>hello</div>", JsxLang::Jsx, &mut errors).unwrap();
//!
//! assert!(matches!(root, InputNode::Element(_)));
//! assert!(errors.is_empty());
//! ```

mod error;
mod jsx;
mod script;

use jsxflat_core::{InputNode, UnsupportedKind, UnsupportedNode};
use swc_core::{
    common::{BytePos, Span},
    ecma::ast::Expr,
};

pub use error::{ParseError, ParseErrorKind};
pub use jsx::{convert_child, convert_element};
pub use script::{parse_expr_stmt, JsxLang};

/// Parses a source containing a single JSX expression, e.g. `<div>{count}</div>`.
/// Parentheses around the element are allowed.
///
/// A top-level fragment is returned as [`InputNode::Unsupported`],
/// anything other than JSX is a [`ParseErrorKind::NotJsx`]
/// and a statement after the element is a [`ParseErrorKind::TrailingInput`].
pub fn parse_jsx(
    source: &str,
    lang: JsxLang,
    errors: &mut Vec<ParseError>,
) -> Result<InputNode, ParseError> {
    // Positions start at 1, 0 is reserved for dummy spans
    let span = Span::new(BytePos(1), BytePos(1 + source.len() as u32));

    let expr = parse_expr_stmt(source, lang.syntax(), span, errors)?;

    match unwrap_parens(*expr) {
        Expr::JSXElement(element) => Ok(InputNode::Element(convert_element(*element))),
        Expr::JSXFragment(fragment) => Ok(InputNode::Unsupported(UnsupportedNode {
            kind: UnsupportedKind::Fragment,
            span: fragment.span,
        })),
        _ => Err(ParseError {
            kind: ParseErrorKind::NotJsx,
            span,
        }),
    }
}

fn unwrap_parens(expr: Expr) -> Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(*paren.expr),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use jsxflat_core::{Attribute, AttributeValue, ElementNode, InputNode};
    use swc_core::ecma::ast::Expr;

    use super::*;

    fn parse_element(source: &str) -> ElementNode {
        let mut errors = Vec::new();
        let result = parse_jsx(source, JsxLang::Jsx, &mut errors).expect("should parse");
        assert!(errors.is_empty(), "{:?}", errors);
        match result {
            InputNode::Element(element) => element,
            other => panic!("Expected element, got {:?}", other),
        }
    }

    #[test]
    fn it_converts_children_in_order() {
        let element = parse_element("<div>hi {name}<span /></div>");

        assert_eq!("div", &*element.tag_name);
        assert_eq!(3, element.children.len());
        assert!(matches!(&element.children[0], InputNode::Text(t, _) if &**t == "hi "));
        assert!(matches!(&element.children[1], InputNode::Expression(e, _) if matches!(**e, Expr::Ident(_))));
        assert!(matches!(&element.children[2], InputNode::Element(e) if &*e.tag_name == "span"));
    }

    #[test]
    fn it_converts_empty_and_unsupported_children() {
        let element = parse_element("<div>{}{/* c */}<></>{...rest}</div>");

        assert!(matches!(element.children[0], InputNode::EmptyHole(_)));
        assert!(matches!(element.children[1], InputNode::EmptyHole(_)));
        assert!(matches!(
            &element.children[2],
            InputNode::Unsupported(UnsupportedNode { kind: UnsupportedKind::Fragment, .. })
        ));
        assert!(matches!(
            &element.children[3],
            InputNode::Unsupported(UnsupportedNode { kind: UnsupportedKind::SpreadChild, .. })
        ));
    }

    #[test]
    fn it_converts_attributes() {
        let element = parse_element(r#"<input type="text" disabled value={v} {...rest} />"#);

        assert_eq!(4, element.attributes.len());
        assert!(matches!(
            &element.attributes[0],
            Attribute::Regular { name, value: Some(AttributeValue::Str(s)), .. } if &**name == "type" && &**s == "text"
        ));
        assert!(matches!(
            &element.attributes[1],
            Attribute::Regular { name, value: None, .. } if &**name == "disabled"
        ));
        assert!(matches!(
            &element.attributes[2],
            Attribute::Regular { name, value: Some(AttributeValue::Expr(_)), .. } if &**name == "value"
        ));
        assert!(matches!(&element.attributes[3], Attribute::Spread { .. }));
    }

    #[test]
    fn it_names_member_and_namespaced_tags() {
        assert_eq!("ui.forms.Button", &*parse_element("<ui.forms.Button />").tag_name);
        assert_eq!("svg:rect", &*parse_element("<svg:rect />").tag_name);
    }

    #[test]
    fn it_unwraps_parens() {
        let element = parse_element("(\n  <p>text</p>\n)");
        assert_eq!("p", &*element.tag_name);
    }

    #[test]
    fn it_parses_tsx() {
        let mut errors = Vec::new();
        let result = parse_jsx("<Foo value={x as string} />", JsxLang::Tsx, &mut errors);
        assert!(matches!(result, Ok(InputNode::Element(e)) if &*e.tag_name == "Foo"));
    }

    #[test]
    fn it_rejects_non_jsx() {
        let mut errors = Vec::new();
        let result = parse_jsx("a + b", JsxLang::Jsx, &mut errors);
        assert!(matches!(
            result,
            Err(ParseError { kind: ParseErrorKind::NotJsx, .. })
        ));
    }

    #[test]
    fn it_reports_syntax_errors() {
        let mut errors = Vec::new();
        let result = parse_jsx("<div>", JsxLang::Jsx, &mut errors);
        assert!(matches!(
            result,
            Err(ParseError { kind: ParseErrorKind::BadExpr(_), .. })
        ));
    }

    #[test]
    fn it_rejects_trailing_input() {
        let mut errors = Vec::new();
        let result = parse_jsx("<div />; more", JsxLang::Jsx, &mut errors);
        assert!(matches!(
            result,
            Err(ParseError { kind: ParseErrorKind::TrailingInput, span }) if span.lo.0 == 10
        ));
        assert!(errors.is_empty());

        let result = parse_jsx("<div />\n<span />", JsxLang::Jsx, &mut errors);
        assert!(matches!(
            result,
            Err(ParseError { kind: ParseErrorKind::TrailingInput, .. })
        ));

        // No statement separator at all
        let result = parse_jsx("<div /> foo", JsxLang::Jsx, &mut errors);
        assert!(matches!(
            result,
            Err(ParseError { kind: ParseErrorKind::BadExpr(_), .. })
        ));
    }

    #[test]
    fn it_allows_a_trailing_semicolon() {
        let element = parse_element("<div />;\n");
        assert_eq!("div", &*element.tag_name);
    }

    #[test]
    fn it_rejects_empty_source() {
        let mut errors = Vec::new();
        let result = parse_jsx("  ", JsxLang::Jsx, &mut errors);
        assert!(matches!(
            result,
            Err(ParseError { kind: ParseErrorKind::NotJsx, .. })
        ));
    }
}
