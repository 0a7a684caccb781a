use swc_core::{
    common::{Span, Spanned},
    ecma::ast::{Expr, Ident},
};

use crate::JsxAtom;

/// An `InputNode` is a single node of the markup tree fed into the flattener.
/// There are several possible node types:
///
/// ### `Element`
/// A tag with attributes and zero or more children, e.g. `<div class="a">...</div>`.
/// The tree does not add any meaning to the tag name,
/// classifying it is up to a [`crate::NativeTagOracle`].
///
/// ### `Text`
/// Raw static text between tags, whitespace included.
///
/// ### `Expression`
/// An expression hole, e.g. `{ count + 1 }`. The expression is never inspected.
///
/// ### `EmptyHole`
/// A hole without an expression, e.g. `{}` or `{/* comment */}`.
///
/// ### `Unsupported`
/// Any other child kind the source markup may contain, e.g. a fragment `<>...</>`.
/// These are kept in the tree so that the flattener can report them.
#[derive(Debug, Clone, PartialEq)]
pub enum InputNode {
    Element(ElementNode),
    Text(JsxAtom, Span),
    Expression(Box<Expr>, Span),
    EmptyHole(Span),
    Unsupported(UnsupportedNode),
}

/// Element node has a tag name, ordered attributes and ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    pub tag_name: JsxAtom,
    pub attributes: Vec<Attribute>,
    pub children: Vec<InputNode>,
    pub span: Span,
}

/// Attribute is either `Regular` (`name` or `name="value"` or `name={expr}`)
/// or a `Spread` (`{...props}`)
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Regular {
        name: JsxAtom,
        value: Option<AttributeValue>,
        span: Span,
    },
    Spread {
        argument: Box<Expr>,
        span: Span,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Str(JsxAtom),
    Expr(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedNode {
    pub kind: UnsupportedKind,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedKind {
    /// `<>...</>`
    Fragment,
    /// `{...children}`
    SpreadChild,
}

/// A flat unit of output. Every record carries an identifier
/// which is unique within one flattening run.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderRecord {
    Node(NodeRecord),
    Text(TextRecord),
    Expr(ExprRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub tag: JsxAtom,
    pub attributes: Vec<Attribute>,
    pub is_native: bool,
    pub identifier: Ident,
    /// Identifiers of the retained children. Always empty for custom elements,
    /// their children live in the `children` attribute instead.
    pub children: Vec<Ident>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRecord {
    pub identifier: Ident,
    pub value: JsxAtom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprRecord {
    pub identifier: Ident,
    pub expression: Box<Expr>,
}

impl RenderRecord {
    pub fn identifier(&self) -> &Ident {
        match self {
            RenderRecord::Node(n) => &n.identifier,
            RenderRecord::Text(t) => &t.identifier,
            RenderRecord::Expr(e) => &e.identifier,
        }
    }
}

impl Attribute {
    /// Name of a regular attribute, `None` for spreads
    pub fn name(&self) -> Option<&JsxAtom> {
        match self {
            Attribute::Regular { name, .. } => Some(name),
            Attribute::Spread { .. } => None,
        }
    }
}

impl Spanned for InputNode {
    fn span(&self) -> Span {
        match self {
            InputNode::Element(e) => e.span,
            InputNode::Text(_, span)
            | InputNode::Expression(_, span)
            | InputNode::EmptyHole(span) => *span,
            InputNode::Unsupported(u) => u.span,
        }
    }
}

impl std::fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsupportedKind::Fragment => write!(f, "fragment"),
            UnsupportedKind::SpreadChild => write!(f, "spread child"),
        }
    }
}
