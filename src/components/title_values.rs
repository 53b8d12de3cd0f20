//! `<title-values>`: a small heading slotted above a row of values.

use std::io::Write;

use html5ever::LocalName;

use crate::custom_elements::{self, Definition};
use crate::element::{BaseElement, Element, ElementExt};
use crate::els;
use crate::error::Result;
use crate::registrar::Registrar;
use crate::style::{ClassRegistry, Direction, Size};

use super::FlexItems;

const ELEMENT_NAME: &str = "title-values";
const TEMPLATE: &str = include_str!("../markup/title-values.html");
const MARKUP: &str = "<title-values{{.Attributes}}>{{.Content}}</title-values>";
const TITLE_SLOT: &str = "title";

pub struct TitleValues {
    base: BaseElement,
}

impl TitleValues {
    /// A titled block with no values yet; append them as children.
    pub fn new(title: &str) -> Self {
        Self::with_title(els::heading_text(title, 3))
    }

    fn with_title<E: Element + 'static>(title: E) -> Self {
        let mut base = BaseElement::new(LocalName::from(ELEMENT_NAME), MARKUP);
        base.children.push(title.with_attr("slot", TITLE_SLOT).boxed());
        Self { base }
    }

    /// A search input titled by a label bound to it.
    pub fn search_input(title: &str, input_id: &str) -> Self {
        let label = els::label(input_id).with_child(els::heading_text(title, 3));
        let input = els::input("search")
            .with_attr("placeholder", title)
            .with_attr("name", input_id)
            .with_id(input_id);
        Self::with_title(label).with_child(input)
    }

    /// Values written as text, sorted.
    pub fn text(classes: &ClassRegistry, title: &str, values: &[&str]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let mut row = row(classes);
        for value in sorted {
            row.append(els::span_text(value).boxed());
        }
        Self::new(title).with_child(row)
    }

    /// Values written as links, in the order given.
    pub fn links(classes: &ClassRegistry, title: &str, links: &[(&str, &str)]) -> Self {
        let mut row = row(classes);
        for (text, href) in links {
            row.append(els::a_text(text, href).boxed());
        }
        Self::new(title).with_child(row)
    }

    pub fn definition() -> Definition {
        Definition::defaults(ELEMENT_NAME, TEMPLATE)
    }
}

fn row(classes: &ClassRegistry) -> FlexItems {
    FlexItems::new(classes, Direction::Row).column_gap(Size::Small)
}

impl Element for TitleValues {
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
