//! The document root.
//!
//! A [`Page`] writes the whole HTML document: head metadata, the theme
//! custom properties, the consumer rules for every class family, the atomic
//! stylesheet generated from its [`ClassRegistry`], then the body in three
//! phases. Each render gets a fresh [`DocumentRegistrar`].

use std::borrow::Cow;
use std::io::Write;

use html5ever::local_name;
use log::debug;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::element::{BaseElement, Element};
use crate::error::Result;
use crate::escape::escape_html;
use crate::registrar::{DocumentRegistrar, Registrar};
use crate::style::ClassRegistry;
use crate::template::write_template;

const PAGE_MARKUP: &str = include_str!("../markup/page.html");
const THEME_CSS: &str = include_str!("../markup/theme.css");
const PAGE_CSS: &str = include_str!("../markup/page.css");

/// Document-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(default))]
pub struct PageConfig {
    /// Value of `<html lang>`.
    pub lang: String,

    /// Value of the `color-scheme` meta tag.
    pub color_scheme: String,

    /// Web app manifest link, if any.
    pub manifest_href: Option<String>,

    /// Icon link. Takes precedence over the favicon emoji.
    pub icon_href: Option<String>,

    /// Write the color, size, and font-size custom properties.
    pub include_theme: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            color_scheme: "dark light".to_string(),
            manifest_href: None,
            icon_href: None,
            include_theme: true,
        }
    }
}

impl PageConfig {
    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }

    pub fn with_color_scheme(mut self, scheme: &str) -> Self {
        self.color_scheme = scheme.to_string();
        self
    }

    pub fn with_manifest(mut self, href: &str) -> Self {
        self.manifest_href = Some(href.to_string());
        self
    }

    pub fn with_icon(mut self, href: &str) -> Self {
        self.icon_href = Some(href.to_string());
        self
    }

    pub fn with_theme(mut self, include: bool) -> Self {
        self.include_theme = include;
        self
    }
}

pub struct Page {
    base: BaseElement,
    title: String,
    favicon_emoji: Option<String>,
    custom_styles: Option<Cow<'static, str>>,
    classes: ClassRegistry,
    config: PageConfig,
}

impl Page {
    /// A page whose atomic stylesheet comes from `classes`.
    pub fn new(title: &str, classes: &ClassRegistry) -> Self {
        Self {
            base: BaseElement::new(local_name!("body"), PAGE_MARKUP),
            title: title.to_string(),
            favicon_emoji: None,
            custom_styles: None,
            classes: classes.clone(),
            config: PageConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_favicon_emoji(mut self, emoji: &str) -> Self {
        self.favicon_emoji = Some(emoji.to_string());
        self
    }

    /// Extra CSS written after the generated stylesheets.
    pub fn with_custom_styles(mut self, css: impl Into<Cow<'static, str>>) -> Self {
        self.custom_styles = Some(css.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }

    /// Write the complete document.
    ///
    /// Output is streamed; on error, whatever was already written stays in `w`.
    pub fn render(&self, w: &mut dyn Write) -> Result<()> {
        let mut registrar = DocumentRegistrar::new();
        debug!("rendering page {:?}", self.title);
        self.write_content(&mut registrar, w)?;
        debug!(
            "rendered page {:?}: {} one-time resources, {} classes",
            self.title,
            registrar.len(),
            self.classes.len()
        );
        Ok(())
    }

    pub fn render_to_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.render(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    fn write_head_links(&self, w: &mut dyn Write) -> Result<()> {
        if let Some(href) = &self.config.icon_href {
            writeln!(w, "<link rel=\"icon\" href=\"{}\">", escape_html(href))?;
        } else if let Some(emoji) = &self.favicon_emoji {
            writeln!(w, "<link rel=\"icon\" href=\"{}\">", favicon_data_url(emoji))?;
        }
        if let Some(href) = &self.config.manifest_href {
            writeln!(w, "<link rel=\"manifest\" href=\"{}\">", escape_html(href))?;
        }
        Ok(())
    }

    fn write_page_styles(&self, w: &mut dyn Write) -> Result<()> {
        let mut css = String::from(PAGE_CSS.trim_end());
        self.classes.codec().write_consumer_rules(&mut css);
        w.write_all(css.as_bytes())?;
        Ok(())
    }
}

/// An SVG data URL drawing `emoji` as the page icon.
fn favicon_data_url(emoji: &str) -> String {
    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\"><text y=\".9em\" font-size=\"90\">{}</text></svg>",
        escape_html(emoji)
    );
    format!("data:image/svg+xml,{}", utf8_percent_encode(&svg, NON_ALPHANUMERIC))
}

impl Element for Page {
    fn base(&self) -> &BaseElement {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseElement {
        &mut self.base
    }

    // Requirements and deferrals are placed inside the body by the markup.
    fn write_requirements(&self, _r: &mut dyn Registrar, _w: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    fn write_deferrals(&self, _r: &mut dyn Registrar, _w: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    fn write_content(&self, r: &mut dyn Registrar, w: &mut dyn Write) -> Result<()> {
        write_template(self.base.markup(), w, |token, w| match token {
            ".Lang" => Ok(w.write_all(escape_html(&self.config.lang).as_bytes())?),
            ".ColorScheme" => Ok(w.write_all(escape_html(&self.config.color_scheme).as_bytes())?),
            ".HeadLinks" => self.write_head_links(w),
            ".Title" => Ok(w.write_all(escape_html(&self.title).as_bytes())?),
            ".StyleTheme" => {
                if self.config.include_theme {
                    w.write_all(THEME_CSS.trim_end().as_bytes())?;
                }
                Ok(())
            }
            ".StylePage" => self.write_page_styles(w),
            ".StyleClasses" => self.classes.write_stylesheet(w),
            ".StyleCustom" => {
                if let Some(css) = &self.custom_styles {
                    writeln!(w, "<style id=\"style-custom\">{css}</style>")?;
                }
                Ok(())
            }
            other => self.base.write_fragment(other, &mut *r, w),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::FlexItems;
    use crate::element::ElementExt;
    use crate::els;
    use crate::style::{Direction, Size};

    #[test]
    fn test_head() {
        let classes = ClassRegistry::new();
        let html = Page::new("Games & more", &classes)
            .with_favicon_emoji("🎮")
            .render_to_string()
            .unwrap();

        assert!(html.starts_with("<!doctype html>\n<html lang=\"en\">"));
        assert!(html.contains(r#"<meta name="color-scheme" content="dark light">"#));
        assert!(html.contains("<title>Games &amp; more</title>"));
        assert!(html.contains(r#"<link rel="icon" href="data:image/svg+xml,%3Csvg%20"#));
        assert!(html.contains("--c-red:"));
        assert!(!html.contains("style-custom"));
    }

    #[test]
    fn test_config() {
        let classes = ClassRegistry::new();
        let config = PageConfig::default()
            .with_lang("fr")
            .with_icon("/icon.png")
            .with_manifest("/manifest.json")
            .with_theme(false);
        let html = Page::new("t", &classes)
            .with_config(config)
            .with_favicon_emoji("x")
            .render_to_string()
            .unwrap();

        assert!(html.contains(r#"<html lang="fr">"#));
        assert!(html.contains(r#"<link rel="icon" href="/icon.png">"#));
        assert!(html.contains(r#"<link rel="manifest" href="/manifest.json">"#));
        assert!(!html.contains("data:image"));
        assert!(html.contains(r#"<style id="style-theme"></style>"#));
    }

    #[test]
    fn test_body_and_stylesheets() {
        let classes = ClassRegistry::new();
        let mut page = Page::new("t", &classes).with_custom_styles("h1{margin:0}");
        page.set_id("home");
        page.append(
            FlexItems::new(&classes, Direction::Row)
                .row_gap(Size::Large)
                .with_child(els::text("hi"))
                .boxed(),
        );
        let html = page.render_to_string().unwrap();

        assert!(html.contains("<body id=\"home\">\n<template id=\"flex-items\">"));
        assert!(html.contains(r#"<flex-items class="fd-row rg-large">hi</flex-items>"#));
        assert!(html.contains(r#"<style id="style-classes">.fd-row{--fd:row}.rg-large{--rg:var(--s-large)}</style>"#));
        assert!(html.contains(r#"[class^="rg-"],[class*=" rg-"]{row-gap:var(--rg)}"#));
        assert!(html.contains("<style id=\"style-custom\">h1{margin:0}</style>\n</head>"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_each_render_has_fresh_registrar() {
        let classes = ClassRegistry::new();
        let page = Page::new("t", &classes).with_child(FlexItems::new(&classes, Direction::Row));
        let first = page.render_to_string().unwrap();
        let second = page.render_to_string().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.matches(r#"<template id="flex-items">"#).count(), 1);
    }
}
