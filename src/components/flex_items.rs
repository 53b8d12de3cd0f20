//! `<flex-items>`: a flex container whose layout is set through atomic
//! classes read by its shadow stylesheet.

use std::io::Write;

use html5ever::LocalName;

use crate::custom_elements::{self, Definition};
use crate::element::{BaseElement, Element};
use crate::error::Result;
use crate::registrar::Registrar;
use crate::style::{Align, ClassRegistry, ClassToken, Direction, Size};

const ELEMENT_NAME: &str = "flex-items";
const TEMPLATE: &str = include_str!("../markup/flex-items.html");
const MARKUP: &str = "<flex-items{{.Attributes}}>{{.Content}}</flex-items>";

pub struct FlexItems {
    base: BaseElement,
    classes: ClassRegistry,
}

impl FlexItems {
    pub fn new(classes: &ClassRegistry, direction: Direction) -> Self {
        let mut base = BaseElement::new(LocalName::from(ELEMENT_NAME), MARKUP);
        base.add_class(classes.flex_direction(direction).as_str());
        Self {
            base,
            classes: classes.clone(),
        }
    }

    pub fn definition() -> Definition {
        Definition::defaults(ELEMENT_NAME, TEMPLATE)
    }

    fn with_token(mut self, token: ClassToken) -> Self {
        self.base.add_class(token.as_str());
        self
    }

    pub fn row_gap(self, s: Size) -> Self {
        let token = self.classes.row_gap(s);
        self.with_token(token)
    }

    pub fn column_gap(self, s: Size) -> Self {
        let token = self.classes.column_gap(s);
        self.with_token(token)
    }

    pub fn align_content(self, a: Align) -> Self {
        let token = self.classes.align_content(a);
        self.with_token(token)
    }

    pub fn align_items(self, a: Align) -> Self {
        let token = self.classes.align_items(a);
        self.with_token(token)
    }

    pub fn justify_content(self, a: Align) -> Self {
        let token = self.classes.justify_content(a);
        self.with_token(token)
    }

    pub fn justify_items(self, a: Align) -> Self {
        let token = self.classes.justify_items(a);
        self.with_token(token)
    }
}

impl Element for FlexItems {
    fn base(&self) -> &BaseElement {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseElement {
        &mut self.base
    }

    fn write_requirements(&self, r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        custom_elements::require(r, w, &Self::definition())?;
        self.base.write_children_requirements(r, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementExt;
    use crate::els;
    use crate::registrar::DocumentRegistrar;

    fn render(el: &dyn Element) -> String {
        let mut out = Vec::new();
        el.write(&mut DocumentRegistrar::new(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_classes_registered() {
        let classes = ClassRegistry::new();
        let flex = FlexItems::new(&classes, Direction::Row)
            .row_gap(Size::Small)
            .justify_content(Align::SpaceBetween);

        assert!(flex.has_classes(&["fd-row", "rg-small", "jc-spacebetween"]));
        assert_eq!(classes.len(), 3);
        let css = classes.generate_stylesheet().unwrap();
        assert!(css.contains(".jc-spacebetween{--jc:space-between}"));
    }

    #[test]
    fn test_definition_written_once() {
        let classes = ClassRegistry::new();
        let outer = FlexItems::new(&classes, Direction::Column)
            .with_child(FlexItems::new(&classes, Direction::Row).with_child(els::text("a")))
            .with_child(FlexItems::new(&classes, Direction::Row).with_child(els::text("b")));

        let html = render(&outer);
        assert_eq!(html.matches(r#"<template id="flex-items">"#).count(), 1);
        assert!(html.contains(r#"<flex-items class="fd-row">a</flex-items>"#));
        let template_at = html.find("<template").unwrap();
        let content_at = html.find("<flex-items").unwrap();
        assert!(template_at < content_at);
    }
}
