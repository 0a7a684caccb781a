//! Exports data structs used by the crate

use jsxflat_core::{FlattenWarning, JsxAtom, RenderRecord};
use swc_core::ecma::ast::Ident;

use crate::atoms::ELEMENT_VAR;

/// Which end of a text node gets its whitespace stripped
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TrimPolicy {
    #[default]
    None,
    Left,
    Right,
}

impl TrimPolicy {
    /// Policy for the child at `index` among `len` siblings.
    /// The first child wins over the last one, so an only child is `Left`.
    #[inline]
    pub fn for_child(index: usize, len: usize) -> TrimPolicy {
        if index == 0 {
            TrimPolicy::Left
        } else if index + 1 == len {
            TrimPolicy::Right
        } else {
            TrimPolicy::None
        }
    }
}

/// Outcome of flattening a single node
#[derive(Debug, Clone, PartialEq)]
pub enum Flattened {
    /// Node got an identifier. A record may or may not have been emitted for it.
    Retained(Ident),
    /// Node was whitespace at an element edge and must be left out of its parent
    Discarded,
}

impl Flattened {
    pub fn ident(&self) -> Option<&Ident> {
        match self {
            Flattened::Retained(ident) => Some(ident),
            Flattened::Discarded => None,
        }
    }

    pub fn into_ident(self) -> Option<Ident> {
        match self {
            Flattened::Retained(ident) => Some(ident),
            Flattened::Discarded => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FlattenOptions {
    /// Naming hint for the root identifier, `el` produces `_el`
    pub name_prefix: JsxAtom,
    /// Names which already exist where the records will be emitted
    pub reserved_bindings: Vec<JsxAtom>,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            name_prefix: (*ELEMENT_VAR).clone(),
            reserved_bindings: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct FlattenResult {
    pub root: Flattened,
    pub records: Vec<RenderRecord>,
    pub warnings: Vec<FlattenWarning>,
}
