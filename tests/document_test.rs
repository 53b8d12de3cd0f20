//! Document rendering tests.
//!
//! Whole-document behavior: one-time resources per document, phase ordering,
//! stylesheet contents, and streaming to files and failing sinks.

use std::fs;
use std::io::{self, Write};

use html5ever::LocalName;
use tempfile::TempDir;

use compton::components::{DetailsSummary, FlexItems, IframeExpand, NavLinks, Page, PageConfig, Target};
use compton::custom_elements::{self, Definition};
use compton::els;
use compton::registrar::{DocumentRegistrar, Registrar};
use compton::style::{ClassRegistry, Color, Direction, Size};
use compton::{BaseElement, Element, ElementExt, Error, Result};

/// A custom element that records nothing but its one-time definition.
struct Foo {
    base: BaseElement,
}

impl Foo {
    fn new() -> Self {
        Self {
            base: BaseElement::new(LocalName::from("foo-bar"), "<foo-bar{{.Attributes}}>{{.Content}}</foo-bar>"),
        }
    }
}

impl Element for Foo {
    fn base(&self) -> &BaseElement {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseElement {
        &mut self.base
    }

    fn write_requirements(&self, r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        custom_elements::require(r, w, &Definition::defaults("foo-bar", "<slot></slot>"))?;
        self.base.write_children_requirements(r, w)
    }
}

/// Accepts `limit` bytes, then fails every write.
struct FailingWriter {
    written: Vec<u8>,
    limit: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.limit {
            return Err(io::Error::other("sink closed"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// One-time Resources
// ============================================================================

#[test]
fn test_definition_once_per_document() {
    let classes = ClassRegistry::new();
    let page = Page::new("foo", &classes)
        .with_child(Foo::new())
        .with_child(els::div().with_child(Foo::new()))
        .with_child(Foo::new());

    let html = page.render_to_string().unwrap();
    assert_eq!(html.matches(r#"<template id="foo-bar">"#).count(), 1);
    assert_eq!(html.matches("<foo-bar></foo-bar>").count(), 3);
}

#[test]
fn test_definition_once_per_registrar() {
    let tree = els::div().with_child(Foo::new()).with_child(Foo::new());

    let mut out = Vec::new();
    tree.write(&mut DocumentRegistrar::new(), &mut out).unwrap();
    tree.write(&mut DocumentRegistrar::new(), &mut out).unwrap();

    let html = String::from_utf8(out).unwrap();
    assert_eq!(html.matches(r#"<template id="foo-bar">"#).count(), 2);
}

#[test]
fn test_shared_registrar_across_trees() {
    let mut registrar = DocumentRegistrar::new();
    let mut out = Vec::new();
    Foo::new().write(&mut registrar, &mut out).unwrap();
    Foo::new().write(&mut registrar, &mut out).unwrap();

    let html = String::from_utf8(out).unwrap();
    assert_eq!(html.matches("customElements.define").count(), 1);
    assert!(registrar.contains("foo-bar"));
}

// ============================================================================
// Phase Ordering
// ============================================================================

#[test]
fn test_requirements_content_deferrals_order() {
    let classes = ClassRegistry::new();
    let page = Page::new("order", &classes).with_child(
        FlexItems::new(&classes, Direction::Column)
            .with_child(NavLinks::with_targets(&[Target::new("Home", "/").current()]))
            .with_child(IframeExpand::new("frame", "/frame")),
    );
    let html = page.render_to_string().unwrap();

    let body = html.find("<body").unwrap();
    let flex_definition = html.find(r#"<template id="flex-items">"#).unwrap();
    let nav_definition = html.find(r#"<template id="nav-links">"#).unwrap();
    let content = html.find("<flex-items").unwrap();
    let iframe = html.find("<iframe").unwrap();
    let deferral = html.find("window.addEventListener").unwrap();

    assert!(body < flex_definition);
    assert!(flex_definition < nav_definition);
    assert!(nav_definition < content);
    assert!(content < iframe);
    assert!(iframe < deferral);
    assert!(deferral < html.find("</body>").unwrap());
}

// ============================================================================
// Stylesheets
// ============================================================================

#[test]
fn test_page_stylesheet_lists_used_classes() {
    let classes = ClassRegistry::new();
    let page = Page::new("styles", &classes).with_child(
        DetailsSummary::closed(&classes, els::text("More"))
            .marker_color(Color::Red)
            .summary_margin_block_end(Size::Small),
    );
    let html = page.render_to_string().unwrap();

    assert!(html.contains(r#"<style id="style-classes">.cm-red{--cm:var(--c-red)}.mbe-small{--mbe:var(--s-small)}</style>"#));
    assert!(html.contains(r#"[class^="cm-"]::marker,[class*=" cm-"]::marker{color:var(--cm)}"#));
    assert_eq!(html.matches(r#"<style id="style-details-summary">"#).count(), 1);
}

#[test]
fn test_pages_share_registry() {
    let classes = ClassRegistry::new();
    let first = Page::new("a", &classes).with_child(FlexItems::new(&classes, Direction::Row));
    let second = Page::new("b", &classes).with_child(FlexItems::new(&classes, Direction::Column));

    let html = first.render_to_string().unwrap();
    assert!(html.contains(".fd-column{--fd:column}"));
    assert_eq!(html, first.render_to_string().unwrap());
    assert!(second.render_to_string().unwrap().contains(".fd-row{--fd:row}"));
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_render_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("page.html");

    let classes = ClassRegistry::new();
    let page = Page::new("file", &classes)
        .with_config(PageConfig::default().with_lang("de"))
        .with_child(els::heading_text("Hallo", 1));

    let mut file = fs::File::create(&path).unwrap();
    page.render(&mut file).unwrap();
    drop(file);

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!doctype html>\n<html lang=\"de\">"));
    assert!(html.contains("<h1>Hallo</h1>"));
}

#[test]
fn test_write_failure_is_io_error() {
    let classes = ClassRegistry::new();
    let page = Page::new("fail", &classes).with_child(els::div_text("content"));

    let mut sink = FailingWriter {
        written: Vec::new(),
        limit: 64,
    };
    let err = page.render(&mut sink).unwrap_err();

    assert!(matches!(err, Error::Io(_)));
    assert!(sink.written.starts_with(b"<!doctype html>"));
    assert!(sink.written.len() <= 64);
}
