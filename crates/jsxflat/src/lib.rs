//! The main public crate of the `jsxflat` project.
//!
//! Here's how you can flatten a JSX source into render records:
//!
//! ```
//! use jsxflat::{flatten_source, JsxLang, RenderRecord};
//! use jsxflat_transform::FlattenOptions;
//!
//! let mut errors = Vec::new();
//! let result = flatten_source(
//!     "<Card title=\"Hi\"><p>body</p></Card>",
//!     JsxLang::Jsx,
//!     &FlattenOptions::default(),
//!     &mut errors,
//! )
//! .unwrap();
//!
//! // `<p>` text, `<p>` itself, then `<Card>` which carries `<p>` in its `children` attribute
//! assert_eq!(3, result.records.len());
//! assert!(matches!(&result.records[2], RenderRecord::Node(card) if !card.is_native));
//! assert!(errors.is_empty());
//! ```

pub mod errors;
pub mod printer;

pub use errors::CompileError;
pub use jsxflat_core::*;
pub use jsxflat_parser::JsxLang;

use jsxflat_parser::parse_jsx;
use jsxflat_transform::{flatten_tree, FlattenOptions, FlattenResult};

/// Parses `source` and flattens it.
///
/// Errors the parser recovered from are pushed to `errors`,
/// an unrecoverable one is returned.
pub fn flatten_source(
    source: &str,
    lang: JsxLang,
    options: &FlattenOptions,
    errors: &mut Vec<CompileError>,
) -> Result<FlattenResult, CompileError> {
    let mut parse_errors = Vec::new();
    let root = parse_jsx(source, lang, &mut parse_errors);
    errors.extend(parse_errors.into_iter().map(CompileError::from));

    Ok(flatten_tree(root?, options))
}

#[cfg(test)]
mod tests {
    use jsxflat_parser::{ParseError, ParseErrorKind};

    use super::*;

    #[test]
    fn it_flattens_source() {
        let mut errors = Vec::new();
        let result = flatten_source(
            "<ul><li>{a}</li><li>{b}</li></ul>",
            JsxLang::Jsx,
            &FlattenOptions::default(),
            &mut errors,
        )
        .unwrap();

        assert!(errors.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(5, result.records.len());
        assert!(matches!(
            &result.records[4],
            RenderRecord::Node(ul) if ul.children.len() == 2
        ));
    }

    #[test]
    fn it_returns_parse_errors() {
        let mut errors = Vec::new();
        let result = flatten_source(
            "const a = 1",
            JsxLang::Jsx,
            &FlattenOptions::default(),
            &mut errors,
        );

        assert!(matches!(result, Err(CompileError::Parse(_))));
    }

    #[test]
    fn it_rejects_source_with_trailing_statements() {
        let mut errors = Vec::new();
        let result = flatten_source(
            "<div />; <span />",
            JsxLang::Jsx,
            &FlattenOptions::default(),
            &mut errors,
        );

        match result {
            Err(e) => {
                assert!(e.is_error());
                assert!(matches!(
                    e,
                    CompileError::Parse(ParseError {
                        kind: ParseErrorKind::TrailingInput,
                        ..
                    })
                ));
            }
            Ok(_) => panic!("Expected trailing input to be rejected"),
        }
    }

    #[test]
    fn it_reports_warnings() {
        let mut errors = Vec::new();
        let result = flatten_source(
            "<div>{/* todo */}</div>",
            JsxLang::Tsx,
            &FlattenOptions::default(),
            &mut errors,
        )
        .unwrap();

        assert_eq!(1, result.warnings.len());
        assert!(result.warnings[0].is_warning());
    }
}
