use jsxflat_core::JsxAtom;

lazy_static! {
    /// Name of the synthetic attribute which carries the children of a component
    pub static ref CHILDREN: JsxAtom = JsxAtom::from("children");

    /// Default naming hint of the root element
    pub static ref ELEMENT_VAR: JsxAtom = JsxAtom::from("el");
}
