//! Elements carrying a text payload: text nodes, inline styles, scripts.

use std::borrow::Cow;
use std::io::Write;

use html5ever::{LocalName, local_name};

use crate::element::{BaseElement, Element, ID_ATTR};
use crate::error::Result;
use crate::escape::escape_html;
use crate::registrar::Registrar;
use crate::template::write_template;

const STYLE_TOKEN: &str = ".Style";
const SCRIPT_TOKEN: &str = ".Script";

/// Escaped text content. Has no tag markup of its own.
#[derive(Debug)]
pub struct Text {
    base: BaseElement,
    text: String,
}

impl Text {
    pub fn new(text: &str) -> Self {
        Self {
            base: BaseElement::new(LocalName::from("#text"), ""),
            text: text.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Element for Text {
    fn base(&self) -> &BaseElement {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseElement {
        &mut self.base
    }

    fn write_content(&self, _r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        w.write_all(escape_html(&self.text).as_bytes())?;
        Ok(())
    }
}

/// A `<style>` element with raw CSS.
///
/// A style with an id is written once per document; later copies with the
/// same id write nothing.
#[derive(Debug)]
pub struct Style {
    base: BaseElement,
    css: Cow<'static, str>,
}

impl Style {
    pub fn new(css: impl Into<Cow<'static, str>>) -> Self {
        Self {
            base: BaseElement::new(local_name!("style"), "<style{{.Attributes}}>{{.Style}}</style>"),
            css: css.into(),
        }
    }
}

impl Element for Style {
    fn base(&self) -> &BaseElement {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseElement {
        &mut self.base
    }

    fn write_content(&self, r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        if let Some(id) = self.base.attr(ID_ATTR)
            && !r.requires_registration(id)
        {
            return Ok(());
        }
        write_template(self.base.markup(), w, |token, w| match token {
            STYLE_TOKEN => Ok(w.write_all(self.css.as_bytes())?),
            other => self.base.write_fragment(other, &mut *r, w),
        })
    }
}

/// A `<script>` element with raw JavaScript.
#[derive(Debug)]
pub struct Script {
    base: BaseElement,
    js: Cow<'static, str>,
}

impl Script {
    pub fn new(js: impl Into<Cow<'static, str>>) -> Self {
        Self {
            base: BaseElement::new(
                local_name!("script"),
                "<script{{.Attributes}}>{{.Script}}</script>",
            ),
            js: js.into(),
        }
    }
}

impl Element for Script {
    fn base(&self) -> &BaseElement {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseElement {
        &mut self.base
    }

    fn write_content(&self, r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        write_template(self.base.markup(), w, |token, w| match token {
            SCRIPT_TOKEN => Ok(w.write_all(self.js.as_bytes())?),
            other => self.base.write_fragment(other, &mut *r, w),
        })
    }
}
