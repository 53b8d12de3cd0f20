//! Collapsible section: `<details>` with a styled `<summary>`.

use std::io::Write;

use html5ever::local_name;

use crate::element::{BaseElement, Element, ElementExt};
use crate::els;
use crate::error::Result;
use crate::registrar::Registrar;
use crate::style::{ClassRegistry, ClassToken, Color, Size};

const STYLE_ID: &str = "style-details-summary";
const STYLE: &str = include_str!("../markup/details-summary.css");

/// Wraps a `<details>` element and stands in for it: tag, attributes,
/// classes, and children all read and write through to the `<details>`, so
/// tree queries see the wrapper as the `<details>` itself.
pub struct DetailsSummary {
    base: BaseElement,
    details: Box<dyn Element>,
    classes: ClassRegistry,
}

impl DetailsSummary {
    pub fn closed<E: Element + 'static>(classes: &ClassRegistry, summary: E) -> Self {
        let details = els::details().with_child(els::summary().with_child(summary));
        Self {
            base: BaseElement::new(local_name!("details"), ""),
            details: details.boxed(),
            classes: classes.clone(),
        }
    }

    pub fn open<E: Element + 'static>(classes: &ClassRegistry, summary: E) -> Self {
        Self::toggle(classes, summary, true)
    }

    pub fn toggle<E: Element + 'static>(classes: &ClassRegistry, summary: E, open: bool) -> Self {
        let mut ds = Self::closed(classes, summary);
        if open {
            ds.details.set_attr("open", "");
        }
        ds
    }

    pub fn is_open(&self) -> bool {
        self.details.attr("open").is_some()
    }

    fn with_summary_token(mut self, token: ClassToken) -> Self {
        if let Some(summary) = self.details.first_element_by_tag_name_mut(&local_name!("summary")) {
            summary.add_class(token.as_str());
        }
        self
    }

    /// Space between the summary and the content while open.
    pub fn summary_margin_block_end(self, s: Size) -> Self {
        let token = self.classes.margin_block_end(s);
        self.with_summary_token(token)
    }

    pub fn background_color(self, c: Color) -> Self {
        let token = self.classes.background_color(c);
        self.with_summary_token(token)
    }

    pub fn foreground_color(self, c: Color) -> Self {
        let token = self.classes.foreground_color(c);
        self.with_summary_token(token)
    }

    pub fn marker_color(self, c: Color) -> Self {
        let token = self.classes.marker_color(c);
        self.with_summary_token(token)
    }

    pub fn details_margin_block_end(mut self, s: Size) -> Self {
        let token = self.classes.margin_block_end(s);
        self.details.add_class(token.as_str());
        self
    }
}

impl Element for DetailsSummary {
    fn base(&self) -> &BaseElement {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseElement {
        &mut self.base
    }

    fn children(&self) -> &[Box<dyn Element>] {
        self.details.children()
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Element>] {
        self.details.children_mut()
    }

    fn append(&mut self, child: Box<dyn Element>) {
        self.details.append(child);
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.details.attr(name)
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        self.details.set_attr(name, value);
    }

    fn add_class(&mut self, name: &str) {
        self.details.add_class(name);
    }

    fn has_class(&self, name: &str) -> bool {
        self.details.has_class(name)
    }

    fn write_requirements(&self, r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        els::style(STYLE, STYLE_ID).write_content(r, w)?;
        self.details.write_requirements(r, w)
    }

    fn write_content(&self, r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        self.details.write_content(r, w)
    }
}
