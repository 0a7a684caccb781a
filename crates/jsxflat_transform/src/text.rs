//! Whitespace handling for text nodes.

use jsxflat_core::JsxAtom;

use crate::TrimPolicy;

/// Collapses every run of two or more whitespace characters into a single space.
/// A lone whitespace character (including a lone `\n`) is kept as is.
pub fn collapse_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            out.push(c);
            continue;
        }

        if !chars.peek().is_some_and(|next| next.is_whitespace()) {
            out.push(c);
            continue;
        }

        // Swallow the rest of the run
        while chars.next_if(|next| next.is_whitespace()).is_some() {}
        out.push(' ');
    }

    out
}

/// Normalizes the text of a node according to its position among siblings.
///
/// Returns `None` when the node is at a trimmed edge and consists only of whitespace,
/// such node must not produce a record.
pub fn normalize_text(raw: &str, trim: TrimPolicy) -> Option<JsxAtom> {
    let collapsed = collapse_whitespace(raw);

    let value = match trim {
        TrimPolicy::None => collapsed.as_str(),
        _ if collapsed.trim().is_empty() => return None,
        TrimPolicy::Left => collapsed.trim_start(),
        TrimPolicy::Right => collapsed.trim_end(),
    };

    Some(JsxAtom::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_collapses_runs() {
        assert_eq!("a b c", collapse_whitespace("a   b\n\n c"));
        assert_eq!("a b", collapse_whitespace("a\r\n\t b"));
        assert_eq!(" x ", collapse_whitespace("  x  "));
    }

    #[test]
    fn it_keeps_single_whitespace() {
        assert_eq!("a\nb", collapse_whitespace("a\nb"));
        assert_eq!("a b", collapse_whitespace("a b"));
        assert_eq!("", collapse_whitespace(""));
    }

    #[test]
    fn it_keeps_untrimmed_whitespace_only_text() {
        assert_eq!(Some(JsxAtom::from(" ")), normalize_text("   \n  ", TrimPolicy::None));
    }

    #[test]
    fn it_discards_whitespace_at_edges() {
        assert_eq!(None, normalize_text("   \n  ", TrimPolicy::Left));
        assert_eq!(None, normalize_text(" ", TrimPolicy::Right));
        assert_eq!(None, normalize_text("", TrimPolicy::Left));
    }

    #[test]
    fn it_trims_one_side() {
        // Runs are collapsed first, so only a single space survives on the kept side
        assert_eq!(Some(JsxAtom::from(" hello")), normalize_text("  hello  ", TrimPolicy::Right));
        assert_eq!(Some(JsxAtom::from("hello ")), normalize_text("  hello  ", TrimPolicy::Left));
        assert_eq!(Some(JsxAtom::from(" hello ")), normalize_text("  hello  ", TrimPolicy::None));
        assert_eq!(Some(JsxAtom::from(" hello")), normalize_text(" hello ", TrimPolicy::Right));
    }

    #[test]
    fn it_collapses_before_trimming() {
        assert_eq!(
            Some(JsxAtom::from("Hello, world ")),
            normalize_text("\n    Hello,\n    world\n  ", TrimPolicy::Left)
        );
    }

    #[test]
    fn it_uses_unicode_white_space() {
        // NEL is whitespace, BOM is not
        assert_eq!("a b", collapse_whitespace("a\u{85}\u{85}b"));
        assert_eq!("a\u{feff}\u{feff}b", collapse_whitespace("a\u{feff}\u{feff}b"));
    }
}
