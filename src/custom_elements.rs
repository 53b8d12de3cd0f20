//! Custom-element bootstrap fragments.
//!
//! A definition is written once per document, in the Requirements phase: a
//! `<template>` holding the shadow-DOM markup followed by the
//! `customElements.define` script that attaches it.

use std::borrow::Cow;
use std::io::Write;

use crate::error::{Error, Result};
use crate::registrar::Registrar;
use crate::template::write_template;

const DEFINE_MARKUP: &str = include_str!("markup/custom-element.html");

/// Shadow root encapsulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowMode {
    Open,
    #[default]
    Closed,
}

impl ShadowMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadowMode::Open => "open",
            ShadowMode::Closed => "closed",
        }
    }
}

/// Everything needed to define one custom element.
#[derive(Debug, Clone)]
pub struct Definition {
    /// Element name; also the template id and the registration name.
    pub name: String,
    /// Built-in tag this element customizes, if any.
    pub extends: Option<String>,
    pub mode: ShadowMode,
    /// Shadow-DOM markup.
    pub template: Cow<'static, str>,
}

impl Definition {
    /// An autonomous element (extends `HTMLElement`) with a closed shadow root.
    pub fn defaults(name: &str, template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.to_string(),
            extends: None,
            mode: ShadowMode::default(),
            template: template.into(),
        }
    }

    pub fn with_extends(mut self, tag: &str) -> Self {
        self.extends = Some(tag.to_string());
        self
    }

    pub fn with_mode(mut self, mode: ShadowMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Write the definition unconditionally.
pub fn define(w: &mut dyn Write, def: &Definition) -> Result<()> {
    write_template(DEFINE_MARKUP, w, |token, w| {
        match token {
            ".ElementName" => w.write_all(def.name.as_bytes())?,
            ".Template" => w.write_all(def.template.as_bytes())?,
            ".Mode" => w.write_all(def.mode.as_str().as_bytes())?,
            ".ExtendsElement" => match &def.extends {
                Some(tag) => write!(w, "document.createElement(\"{tag}\").constructor")?,
                None => w.write_all(b"HTMLElement")?,
            },
            ".DefineOptions" => {
                if let Some(tag) = &def.extends {
                    write!(w, ", {{extends: \"{tag}\"}}")?;
                }
            }
            other => return Err(Error::unknown_token(other)),
        }
        Ok(())
    })
}

/// Write the definition if this document has not seen it yet.
///
/// Returns whether anything was written.
pub fn require(r: &mut dyn Registrar, w: &mut dyn Write, def: &Definition) -> Result<bool> {
    if !r.requires_registration(&def.name) {
        return Ok(false);
    }
    define(w, def)?;
    Ok(true)
}
