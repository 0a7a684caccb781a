use jsxflat_core::{
    Attribute, AttributeValue, ElementNode, ExprRecord, FlattenWarning, FlattenWarningKind,
    HtmlTags, InputNode, NativeTagOracle, NodeRecord, RenderRecord, TextRecord,
};
use smallvec::SmallVec;
use swc_core::{
    common::Span,
    ecma::ast::{ArrayLit, Expr, ExprOrSpread, Ident},
};
use tracing::warn;

use crate::{
    atoms::CHILDREN, text::normalize_text, FlattenOptions, Flattened, TrimPolicy, UidGenerator,
    UidScope,
};

/// Receives recoverable problems found while flattening
pub trait DiagnosticsSink {
    fn warn(&mut self, warning: FlattenWarning);
}

impl DiagnosticsSink for Vec<FlattenWarning> {
    #[inline]
    fn warn(&mut self, warning: FlattenWarning) {
        self.push(warning);
    }
}

/// State of one flattening run.
///
/// `records` only ever grows: every call to [`FlattenContext::flatten`] appends
/// the records of the subtree, children first, the element itself last.
pub struct FlattenContext<G = UidScope, O = HtmlTags, D = Vec<FlattenWarning>> {
    pub records: Vec<RenderRecord>,
    pub uids: G,
    pub oracle: O,
    pub diagnostics: D,
}

impl FlattenContext {
    /// Context with the default collaborators, honoring `reserved_bindings`
    pub fn from_options(options: &FlattenOptions) -> Self {
        let uids = UidScope::with_bindings(options.reserved_bindings.iter().map(|it| &**it));
        FlattenContext::new(uids, HtmlTags, Vec::new())
    }
}

impl<G: UidGenerator, O: NativeTagOracle, D: DiagnosticsSink> FlattenContext<G, O, D> {
    pub fn new(uids: G, oracle: O, diagnostics: D) -> Self {
        FlattenContext {
            records: Vec::new(),
            uids,
            oracle,
            diagnostics,
        }
    }

    /// Flattens a top-level node, no trimming is applied to it
    pub fn flatten_root(&mut self, root: InputNode, name_prefix: &str) -> Flattened {
        self.flatten(root, name_prefix, TrimPolicy::None)
    }

    /// Flattens `node` and its subtree into `self.records`.
    ///
    /// Returns the identifier of `node`, or [`Flattened::Discarded`]
    /// if it was whitespace-only text at a trimmed edge.
    pub fn flatten(&mut self, node: InputNode, name_prefix: &str, trim: TrimPolicy) -> Flattened {
        // Taken unconditionally, even when the node ends up discarded
        let identifier = self.uids.generate_uid(name_prefix);

        match node {
            InputNode::Element(element) => self.flatten_element(element, identifier),

            InputNode::Text(raw, _) => {
                let Some(value) = normalize_text(&raw, trim) else {
                    return Flattened::Discarded;
                };

                self.records.push(RenderRecord::Text(TextRecord {
                    identifier: identifier.clone(),
                    value,
                }));
                Flattened::Retained(identifier)
            }

            InputNode::Expression(expression, _) => {
                self.records.push(RenderRecord::Expr(ExprRecord {
                    identifier: identifier.clone(),
                    expression,
                }));
                Flattened::Retained(identifier)
            }

            InputNode::EmptyHole(span) => {
                self.report(FlattenWarningKind::EmptyExpression, span);
                Flattened::Retained(identifier)
            }

            InputNode::Unsupported(unsupported) => {
                self.report(
                    FlattenWarningKind::UnsupportedChild(unsupported.kind),
                    unsupported.span,
                );
                Flattened::Retained(identifier)
            }
        }
    }

    fn flatten_element(&mut self, element: ElementNode, identifier: Ident) -> Flattened {
        let ElementNode {
            tag_name,
            mut attributes,
            children,
            span,
        } = element;

        // Descendants are named after their nearest ancestor
        let children_len = children.len();
        let mut retained: SmallVec<[Ident; 4]> = SmallVec::with_capacity(children_len);
        for (index, child) in children.into_iter().enumerate() {
            let trim = TrimPolicy::for_child(index, children_len);
            if let Flattened::Retained(child_identifier) = self.flatten(child, &identifier.sym, trim)
            {
                retained.push(child_identifier);
            }
        }

        let is_native = self.oracle.is_native(&tag_name);

        // Components receive their children as a `children` attribute
        let children = if is_native {
            retained.into_vec()
        } else {
            if !retained.is_empty() {
                attributes.push(children_attribute(retained, span));
            }
            Vec::new()
        };

        self.records.push(RenderRecord::Node(NodeRecord {
            tag: tag_name,
            attributes,
            is_native,
            identifier: identifier.clone(),
            children,
        }));

        Flattened::Retained(identifier)
    }

    fn report(&mut self, kind: FlattenWarningKind, span: Span) {
        warn!(lo = span.lo.0, hi = span.hi.0, "{}", kind);
        self.diagnostics.warn(FlattenWarning { kind, span });
    }
}

/// `children={_el2}` for a single child, `children={[_el2, _el3]}` otherwise
fn children_attribute(mut children: SmallVec<[Ident; 4]>, span: Span) -> Attribute {
    let value = if children.len() == 1 {
        Expr::Ident(children.remove(0))
    } else {
        Expr::Array(ArrayLit {
            span,
            elems: children
                .into_iter()
                .map(|ident| {
                    Some(ExprOrSpread {
                        spread: None,
                        expr: Box::new(Expr::Ident(ident)),
                    })
                })
                .collect(),
        })
    };

    Attribute::Regular {
        name: (*CHILDREN).clone(),
        value: Some(AttributeValue::Expr(Box::new(value))),
        span,
    }
}
