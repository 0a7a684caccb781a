//! Flattens a JSX tree into an ordered list of [`RenderRecord`]s.
//!
//! ## Example
//! ```
//! use jsxflat_core::RenderRecord;
//! use jsxflat_parser::{parse_jsx, JsxLang};
//! use jsxflat_transform::{flatten_tree, FlattenOptions};
//!
//! let mut errors = Vec::new();
//! let root = parse_jsx("<div>Hello, {name}</div>", JsxLang::Jsx, &mut errors).unwrap();
//!
//! let result = flatten_tree(root, &FlattenOptions::default());
//!
//! // Children come first, the element itself last
//! assert_eq!(3, result.records.len());
//! assert!(matches!(result.records[0], RenderRecord::Text(_)));
//! assert!(matches!(result.records[1], RenderRecord::Expr(_)));
//! assert!(matches!(result.records[2], RenderRecord::Node(_)));
//! ```

use jsxflat_core::InputNode;
use tracing::debug;

#[macro_use]
extern crate lazy_static;

pub mod atoms;
mod flatten;
mod structs;
mod text;
mod uid;

#[cfg(test)]
mod test_utils;

pub use flatten::{DiagnosticsSink, FlattenContext};
pub use structs::*;
pub use text::{collapse_whitespace, normalize_text};
pub use uid::{UidGenerator, UidScope};

/// Flattens a whole tree with the default collaborators:
/// [`UidScope`] for naming and [`jsxflat_core::HtmlTags`] for classification.
///
/// Use [`FlattenContext`] directly to plug in other ones.
pub fn flatten_tree(root: InputNode, options: &FlattenOptions) -> FlattenResult {
    let mut ctx = FlattenContext::from_options(options);

    let root = ctx.flatten_root(root, &options.name_prefix);

    debug!(
        records = ctx.records.len(),
        warnings = ctx.diagnostics.len(),
        "flattened tree"
    );

    FlattenResult {
        root,
        records: ctx.records,
        warnings: ctx.diagnostics,
    }
}
