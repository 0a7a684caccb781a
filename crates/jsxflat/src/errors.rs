//! Error definitions for the glue code of `jsxflat`

use jsxflat_core::{Severity, SeverityLevel};
use jsxflat_parser::ParseError;
use swc_core::common::{Span, Spanned};

#[derive(Debug)]
pub enum CompileError {
    /// An error occurred during the parsing of the JSX source.
    ///
    /// This can be due to:
    /// - bad ES/TS syntax;
    /// - a source which is not a JSX element;
    /// - input following the JSX element.
    Parse(ParseError),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<ParseError> for CompileError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl Severity for CompileError {
    fn get_severity(&self) -> SeverityLevel {
        match self {
            CompileError::Parse(e) => e.get_severity(),
        }
    }
}

impl Spanned for CompileError {
    fn span(&self) -> Span {
        match self {
            CompileError::Parse(e) => e.span,
        }
    }
}
