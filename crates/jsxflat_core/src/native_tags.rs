use phf::phf_set;

/// Decides whether a tag name denotes a built-in element (`div`, `svg`)
/// or a user-defined component (`Counter`, `ui.Button`).
///
/// Implementations must be pure: the answer depends only on `tag_name`.
pub trait NativeTagOracle {
    fn is_native(&self, tag_name: &str) -> bool;
}

impl<F> NativeTagOracle for F
where
    F: Fn(&str) -> bool,
{
    #[inline]
    fn is_native(&self, tag_name: &str) -> bool {
        self(tag_name)
    }
}

/// Default oracle backed by the static HTML and SVG tag table
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlTags;

impl NativeTagOracle for HtmlTags {
    #[inline]
    fn is_native(&self, tag_name: &str) -> bool {
        is_native_tag(tag_name)
    }
}

/// Checks the tag name against the known HTML and SVG element names.
/// The check is case-sensitive, so `<Button>` is a component while `<button>` is not.
#[inline]
pub fn is_native_tag(tag_name: &str) -> bool {
    HTML_TAGS.contains(tag_name) || SVG_TAGS.contains(tag_name)
}

static HTML_TAGS: phf::Set<&'static str> = phf_set! {
    "a", "abbr", "address", "area", "article", "aside", "audio",
    "b", "base", "bdi", "bdo", "blockquote", "body", "br", "button",
    "canvas", "caption", "cite", "code", "col", "colgroup",
    "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt",
    "em", "embed",
    "fieldset", "figcaption", "figure", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html",
    "i", "iframe", "img", "input", "ins",
    "kbd",
    "label", "legend", "li", "link",
    "main", "map", "mark", "menu", "meta", "meter",
    "nav", "noscript",
    "object", "ol", "optgroup", "option", "output",
    "p", "param", "picture", "pre", "progress",
    "q",
    "rp", "rt", "ruby",
    "s", "samp", "script", "search", "section", "select", "slot", "small", "source",
    "span", "strong", "style", "sub", "summary", "sup",
    "table", "tbody", "td", "template", "textarea", "tfoot", "th", "thead", "time",
    "title", "tr", "track",
    "u", "ul",
    "var", "video",
    "wbr",
};

static SVG_TAGS: phf::Set<&'static str> = phf_set! {
    "svg", "animate", "animateMotion", "animateTransform", "circle", "clipPath",
    "defs", "desc", "ellipse",
    "feBlend", "feColorMatrix", "feComponentTransfer", "feComposite", "feConvolveMatrix",
    "feDiffuseLighting", "feDisplacementMap", "feDistantLight", "feDropShadow", "feFlood",
    "feFuncA", "feFuncB", "feFuncG", "feFuncR", "feGaussianBlur", "feImage", "feMerge",
    "feMergeNode", "feMorphology", "feOffset", "fePointLight", "feSpecularLighting",
    "feSpotLight", "feTile", "feTurbulence",
    "filter", "foreignObject", "g", "image", "line", "linearGradient", "marker", "mask",
    "metadata", "mpath", "path", "pattern", "polygon", "polyline", "radialGradient",
    "rect", "set", "stop", "switch", "symbol", "text", "textPath", "tspan", "use", "view",
};
