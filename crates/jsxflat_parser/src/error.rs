use jsxflat_core::{Severity, SeverityLevel};
use swc_core::common::{Span, Spanned};

#[derive(Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    /// Error while parsing EcmaScript/TypeScript
    BadExpr(swc_ecma_parser::error::SyntaxError),
    /// Source parsed fine, but it is not a JSX element or fragment
    NotJsx,
    /// Another statement follows the JSX expression
    TrailingInput,
}

impl From<swc_ecma_parser::error::Error> for ParseError {
    fn from(value: swc_ecma_parser::error::Error) -> ParseError {
        let span = value.span();

        ParseError {
            kind: ParseErrorKind::BadExpr(value.into_kind()),
            span,
        }
    }
}

impl Severity for ParseError {
    fn get_severity(&self) -> SeverityLevel {
        SeverityLevel::Error
    }
}

impl Spanned for ParseError {
    fn span(&self) -> Span {
        self.span
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::BadExpr(e) => write!(f, "{}", e.msg()),
            ParseErrorKind::NotJsx => write!(f, "expected a JSX element"),
            ParseErrorKind::TrailingInput => write!(f, "unexpected input after the JSX element"),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}..{}", self.kind, self.span.lo.0, self.span.hi.0)
    }
}
