//! Unique identifier generation.

use fxhash::FxHashSet;
use jsxflat_core::JsxAtom;
use swc_core::{common::DUMMY_SP, ecma::ast::Ident};

/// Produces identifiers which never collide within one generator.
pub trait UidGenerator {
    /// Returns a fresh identifier which incorporates `hint` where possible
    fn generate_uid(&mut self, hint: &str) -> Ident;
}

/// A naming scope which hands out `_hint`, `_hint2`, `_hint3`, ...
///
/// The scope may be seeded with bindings which already exist in the surrounding code,
/// generated names skip them.
#[derive(Debug, Default)]
pub struct UidScope {
    used: FxHashSet<String>,
}

impl UidScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings<'b>(bindings: impl IntoIterator<Item = &'b str>) -> Self {
        let mut scope = Self::default();
        for binding in bindings {
            scope.reserve(binding);
        }
        scope
    }

    /// Marks a name as taken without generating it
    pub fn reserve(&mut self, name: &str) {
        self.used.insert(name.to_owned());
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }
}

impl UidGenerator for UidScope {
    fn generate_uid(&mut self, hint: &str) -> Ident {
        let base = uid_base(hint);

        let mut i = 1;
        let sym = loop {
            let candidate = if i > 1 {
                format!("_{base}{i}")
            } else {
                format!("_{base}")
            };

            if !self.used.contains(&candidate) {
                break candidate;
            }

            i += 1;
        };

        let ident = Ident::new_no_ctxt(JsxAtom::from(sym.as_str()), DUMMY_SP);
        self.used.insert(sym);
        ident
    }
}

/// Derives the stable part of a uid from a hint.
/// Leading underscores and trailing digits are dropped,
/// so that hints which are uids themselves (`_el2`) map back to their base (`el`).
fn uid_base(hint: &str) -> String {
    let ident = to_identifier(hint);
    let ident = ident.trim_start_matches('_');
    ident.trim_end_matches(|c: char| c.is_ascii_digit()).to_owned()
}

/// Turns an arbitrary string into an identifier:
/// invalid characters separate words which are then camel-cased,
/// e.g. `my-element` becomes `myElement`.
fn to_identifier(input: &str) -> String {
    let sanitized: String = input
        .chars()
        .map(|c| if Ident::is_valid_continue(c) { c } else { '-' })
        .collect();

    let sanitized = sanitized.trim_start_matches(|c: char| c == '-' || c.is_ascii_digit());

    let mut out = String::with_capacity(sanitized.len());
    let mut uppercase_next = false;
    for c in sanitized.chars() {
        if c == '-' || c.is_whitespace() {
            uppercase_next = true;
            continue;
        }

        if uppercase_next {
            out.extend(c.to_uppercase());
            uppercase_next = false;
        } else {
            out.push(c);
        }
    }

    match out.chars().next() {
        None => "_".to_owned(),
        Some(first) if !Ident::is_valid_start(first) => format!("_{out}"),
        Some(_) => out,
    }
}
