//! Component tree: the capability set every node exposes.
//!
//! Concrete components implement [`Element`] by composing a [`BaseElement`]
//! (tag, markup template, children, attributes) and overriding only what
//! differs. Writing a node happens in three phases, each a walk over the
//! whole subtree:
//!
//! 1. **Requirements**: one-time definitions, gated by the [`Registrar`]
//! 2. **Content**: the element's markup, children written recursively
//! 3. **Deferrals**: resources that must come after the content
//!
//! # Example
//!
//! ```
//! use compton::element::{Element, ElementExt};
//! use compton::els;
//! use compton::registrar::DocumentRegistrar;
//!
//! let mut list = els::ul().with_id("fruit");
//! list.append(els::li().with_child(els::text("apple")).boxed());
//!
//! let mut out = Vec::new();
//! list.write(&mut DocumentRegistrar::new(), &mut out)?;
//! assert_eq!(out, br#"<ul id="fruit"><li>apple</li></ul>"#);
//! # Ok::<(), compton::Error>(())
//! ```

mod query;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use html5ever::LocalName;

use crate::error::{Error, Result};
use crate::escape::escape_html;
use crate::registrar::Registrar;
use crate::template::{
    ATTRIBUTES_TOKEN, CONTENT_TOKEN, DEFERRALS_TOKEN, REQUIREMENTS_TOKEN, write_template,
};

pub use query::{collect_matching, find_first, find_first_mut};

/// Interned tag identity. Custom elements use their element name.
pub type Tag = LocalName;

pub const ID_ATTR: &str = "id";
pub const CLASS_ATTR: &str = "class";

/// Upcast to a trait object; implemented for every sized [`Element`].
pub trait AsElement {
    fn as_element(&self) -> &dyn Element;
    fn as_element_mut(&mut self) -> &mut dyn Element;
}

impl<T: Element> AsElement for T {
    fn as_element(&self) -> &dyn Element {
        self
    }

    fn as_element_mut(&mut self) -> &mut dyn Element {
        self
    }
}

/// The capability set shared by every node in a document.
pub trait Element: AsElement {
    fn base(&self) -> &BaseElement;
    fn base_mut(&mut self) -> &mut BaseElement;

    fn tag(&self) -> &Tag {
        &self.base().tag
    }

    /// Children as they are written (and queried).
    fn children(&self) -> &[Box<dyn Element>] {
        &self.base().children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Element>] {
        &mut self.base_mut().children
    }

    fn append(&mut self, child: Box<dyn Element>) {
        self.base_mut().children.push(child);
    }

    fn id(&self) -> Option<&str> {
        self.attr(ID_ATTR)
    }

    fn set_id(&mut self, id: &str) {
        self.set_attr(ID_ATTR, id);
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.base().attr(name)
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        self.base_mut().set_attr(name, value);
    }

    /// Add a class; already present classes are not repeated.
    fn add_class(&mut self, name: &str) {
        self.base_mut().add_class(name);
    }

    fn has_class(&self, name: &str) -> bool {
        self.base().has_class(name)
    }

    /// Check that every one of `names` is present.
    fn has_classes(&self, names: &[&str]) -> bool {
        names.iter().all(|n| self.has_class(n))
    }

    /// First node (pre-order, including self) with the given id.
    fn get_element_by_id(&self, id: &str) -> Option<&dyn Element> {
        find_first(self.as_element(), &|e| e.id() == Some(id))
    }

    fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut dyn Element> {
        find_first_mut(self.as_element_mut(), &|e| e.id() == Some(id))
    }

    /// All nodes (pre-order, including self) with the given tag.
    fn get_elements_by_tag_name(&self, tag: &Tag) -> Vec<&dyn Element> {
        collect_matching(self.as_element(), &|e| e.tag() == tag)
    }

    fn first_element_by_tag_name_mut(&mut self, tag: &Tag) -> Option<&mut dyn Element> {
        find_first_mut(self.as_element_mut(), &|e| e.tag() == tag)
    }

    /// All nodes (pre-order, including self) carrying every one of `names`.
    fn get_elements_by_class_name(&self, names: &[&str]) -> Vec<&dyn Element> {
        collect_matching(self.as_element(), &|e| e.has_classes(names))
    }

    fn write_requirements(&self, r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        for child in self.children() {
            child.write_requirements(r, w)?;
        }
        Ok(())
    }

    fn write_content(&self, r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        let base = self.base();
        write_template(&base.markup, w, |token, w| base.write_fragment(token, &mut *r, w))
    }

    fn write_deferrals(&self, r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        for child in self.children() {
            child.write_deferrals(r, w)?;
        }
        Ok(())
    }

    /// All three phases, in order.
    fn write(&self, r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        self.write_requirements(r, w)?;
        self.write_content(r, w)?;
        self.write_deferrals(r, w)
    }
}

/// Builder-style helpers for sized elements.
pub trait ElementExt: Element + Sized + 'static {
    fn with_child<E: Element + 'static>(mut self, child: E) -> Self {
        self.append(Box::new(child));
        self
    }

    fn with_id(mut self, id: &str) -> Self {
        self.set_id(id);
        self
    }

    fn with_class(mut self, name: &str) -> Self {
        self.add_class(name);
        self
    }

    fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    fn boxed(self) -> Box<dyn Element> {
        Box::new(self)
    }
}

impl<T: Element + Sized + 'static> ElementExt for T {}

/// State and default behavior shared by every element.
pub struct BaseElement {
    pub(crate) tag: Tag,
    pub(crate) markup: Cow<'static, str>,
    pub(crate) children: Vec<Box<dyn Element>>,
    attributes: BTreeMap<String, String>,
}

impl BaseElement {
    pub fn new(tag: Tag, markup: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag,
            markup: markup.into(),
            children: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn add_class(&mut self, name: &str) {
        if name.is_empty() || self.has_class(name) {
            return;
        }
        let classes = self.attributes.entry(CLASS_ATTR.to_string()).or_default();
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(name);
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.attr(CLASS_ATTR)
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == name))
    }

    /// Write ` name="value"` pairs, sorted by name. Empty values are
    /// written as bare boolean attributes.
    pub fn write_attributes(&self, w: &mut dyn Write) -> Result<()> {
        for (name, value) in &self.attributes {
            if value.is_empty() {
                write!(w, " {name}")?;
            } else {
                write!(w, " {name}=\"{}\"", escape_html(value))?;
            }
        }
        Ok(())
    }

    /// Resolve the reserved tokens every element understands.
    pub fn write_fragment(
        &self,
        token: &str,
        r: &mut dyn Registrar,
        w: &mut dyn Write,
    ) -> Result<()> {
        match token {
            ATTRIBUTES_TOKEN => self.write_attributes(w),
            CONTENT_TOKEN => {
                for child in &self.children {
                    child.write_content(r, w)?;
                }
                Ok(())
            }
            REQUIREMENTS_TOKEN => self.write_children_requirements(r, w),
            DEFERRALS_TOKEN => self.write_children_deferrals(r, w),
            other => Err(Error::unknown_token(other)),
        }
    }

    pub fn write_children_requirements(
        &self,
        r: &mut dyn Registrar,
        w: &mut dyn Write,
    ) -> Result<()> {
        for child in &self.children {
            child.write_requirements(r, w)?;
        }
        Ok(())
    }

    pub fn write_children_deferrals(&self, r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        for child in &self.children {
            child.write_deferrals(r, w)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BaseElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseElement")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("children", &self.children.len())
            .finish()
    }
}
