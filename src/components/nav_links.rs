//! `<nav-links>`: a wrapping row of navigation targets.

use std::io::Write;

use html5ever::LocalName;

use crate::custom_elements::{self, Definition};
use crate::element::{BaseElement, Element, ElementExt};
use crate::els;
use crate::error::Result;
use crate::registrar::Registrar;

const ELEMENT_NAME: &str = "nav-links";
const TEMPLATE: &str = include_str!("../markup/nav-links.html");
const MARKUP: &str = "<nav-links{{.Attributes}}>{{.Content}}</nav-links>";
const CURRENT_CLASS: &str = "current";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub title: String,
    pub href: String,
    pub current: bool,
}

impl Target {
    pub fn new(title: &str, href: &str) -> Self {
        Self {
            title: title.to_string(),
            href: href.to_string(),
            current: false,
        }
    }

    /// Mark this target as the page being viewed.
    pub fn current(mut self) -> Self {
        self.current = true;
        self
    }
}

pub struct NavLinks {
    base: BaseElement,
}

impl NavLinks {
    pub fn new() -> Self {
        Self {
            base: BaseElement::new(LocalName::from(ELEMENT_NAME), MARKUP),
        }
    }

    pub fn with_targets(targets: &[Target]) -> Self {
        targets.iter().fold(Self::new(), |nav, target| nav.target(target))
    }

    /// Append one target as `<li><a>`.
    pub fn target(self, target: &Target) -> Self {
        let mut link = els::a_text(&target.title, &target.href);
        if target.current {
            link.add_class(CURRENT_CLASS);
            link.set_attr("aria-current", "page");
        }
        self.with_child(els::li().with_child(link))
    }

    pub fn definition() -> Definition {
        Definition::defaults(ELEMENT_NAME, TEMPLATE)
    }
}

impl Default for NavLinks {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for NavLinks {
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
