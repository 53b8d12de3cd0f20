//! An iframe that grows to fit its content.
//!
//! The framed page posts `{context, height}` messages; a listener written
//! once per document, after the content, resizes the matching iframe.

use std::io::Write;

use html5ever::local_name;

use crate::element::{BaseElement, Element};
use crate::els;
use crate::error::Result;
use crate::registrar::Registrar;

const SCRIPT_REGISTRATION: &str = "script-iframe-expand";
const SCRIPT: &str = include_str!("../markup/iframe-expand.js");

pub struct IframeExpand {
    base: BaseElement,
}

impl IframeExpand {
    /// `id` doubles as the message context the framed page reports.
    pub fn new(id: &str, src: &str) -> Self {
        let mut base = BaseElement::new(local_name!("iframe"), "<iframe{{.Attributes}}></iframe>");
        base.set_attr("id", id);
        base.set_attr("src", src);
        base.add_class("loading");
        Self { base }
    }
}

impl Element for IframeExpand {
    fn base(&self) -> &BaseElement {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseElement {
        &mut self.base
    }

    fn write_deferrals(&self, r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        if r.requires_registration(SCRIPT_REGISTRATION) {
            els::script(SCRIPT).write_content(r, w)?;
        }
        self.base.write_children_deferrals(r, w)
    }
}
