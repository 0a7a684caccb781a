use swc_core::{
    common::{comments::SingleThreadedComments, Span, Spanned},
    ecma::ast::{EsVersion, Expr, ExprStmt, Stmt},
};
use swc_ecma_parser::{lexer::Lexer, EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::{ParseError, ParseErrorKind};

/// Source dialect of the input
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum JsxLang {
    /// `.jsx`
    #[default]
    Jsx,
    /// `.tsx`
    Tsx,
}

impl JsxLang {
    pub fn syntax(self) -> Syntax {
        match self {
            JsxLang::Jsx => Syntax::Es(EsSyntax {
                jsx: true,
                ..Default::default()
            }),
            JsxLang::Tsx => Syntax::Typescript(TsSyntax {
                tsx: true,
                ..Default::default()
            }),
        }
    }
}

/// Parses a source which must consist of exactly one expression statement.
/// Errors the parser managed to recover from are pushed to `errors`.
///
/// Empty statements (stray `;`) are ignored, any other statement
/// after the first one is a [`ParseErrorKind::TrailingInput`].
pub fn parse_expr_stmt(
    raw: &str,
    syntax: Syntax,
    span: Span,
    errors: &mut Vec<ParseError>,
) -> Result<Box<Expr>, ParseError> {
    let comments = SingleThreadedComments::default();

    let lexer = Lexer::new(
        syntax,
        EsVersion::EsNext,
        StringInput::new(raw, span.lo, span.hi),
        Some(&comments),
    );

    let mut parser = Parser::new_from(lexer);

    let result = parser.parse_script();
    errors.extend(parser.take_errors().into_iter().map(ParseError::from));

    let mut statements = result?
        .body
        .into_iter()
        .filter(|stmt| !matches!(stmt, Stmt::Empty(_)));

    let first = statements.next();
    if let Some(extra) = statements.next() {
        return Err(ParseError {
            kind: ParseErrorKind::TrailingInput,
            span: extra.span(),
        });
    }

    match first {
        Some(Stmt::Expr(ExprStmt { expr, .. })) => Ok(expr),
        Some(other) => Err(ParseError {
            kind: ParseErrorKind::NotJsx,
            span: other.span(),
        }),
        None => Err(ParseError {
            kind: ParseErrorKind::NotJsx,
            span,
        }),
    }
}
