use swc_core::common::{Span, Spanned};

use crate::UnsupportedKind;

pub trait Severity {
    fn get_severity(&self) -> SeverityLevel;

    /// Returns `true` if the severity level is [`Error`].
    ///
    /// [`Error`]: SeverityLevel::Error
    #[must_use]
    fn is_error(&self) -> bool {
        matches!(self.get_severity(), SeverityLevel::Error)
    }

    /// Returns `true` if the severity level is [`Warning`].
    ///
    /// [`Warning`]: SeverityLevel::Warning
    #[must_use]
    fn is_warning(&self) -> bool {
        matches!(self.get_severity(), SeverityLevel::Warning)
    }
}

#[derive(Debug, PartialEq)]
pub enum SeverityLevel {
    /// The input cannot be flattened
    Error,
    /// The input was flattened, but a part of it was ignored
    Warning,
}

/// A recoverable problem found while flattening.
/// The node which caused it produced no record.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenWarning {
    pub kind: FlattenWarningKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlattenWarningKind {
    /// `{}` or `{/* comment */}` as a child
    EmptyExpression,
    /// A child kind the flattener does not handle, e.g. a fragment
    UnsupportedChild(UnsupportedKind),
}

impl Severity for FlattenWarning {
    fn get_severity(&self) -> SeverityLevel {
        SeverityLevel::Warning
    }
}

impl Spanned for FlattenWarning {
    fn span(&self) -> Span {
        self.span
    }
}

impl std::fmt::Display for FlattenWarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlattenWarningKind::EmptyExpression => write!(f, "empty expression child ignored"),
            FlattenWarningKind::UnsupportedChild(kind) => {
                write!(f, "unsupported child ({kind}) ignored")
            }
        }
    }
}

impl std::fmt::Display for FlattenWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}..{}", self.kind, self.span.lo.0, self.span.hi.0)
    }
}

#[cfg(test)]
mod tests {
    use swc_core::common::DUMMY_SP;

    use super::*;

    #[test]
    fn flatten_warnings_are_warnings() {
        let warning = FlattenWarning {
            kind: FlattenWarningKind::EmptyExpression,
            span: DUMMY_SP,
        };

        assert!(warning.is_warning());
        assert!(!warning.is_error());
    }
}
