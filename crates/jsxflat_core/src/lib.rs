//! Core structures shared by the `jsxflat` crates.
//!
//! The input side is [`InputNode`], a parser-agnostic markup tree.
//! The output side is [`RenderRecord`], one flat unit produced per retained node.

mod error;
mod native_tags;
mod structs;

pub use error::*;
pub use native_tags::{is_native_tag, HtmlTags, NativeTagOracle};
pub use structs::*;

/// Shorthand for the string type used across the IR
pub type JsxAtom = swc_core::ecma::atoms::Atom;
