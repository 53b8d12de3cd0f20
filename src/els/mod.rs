//! Generic element constructors.
//!
//! Most tags need nothing beyond [`BaseElement`]: a [`Container`] with a
//! `<tag{{.Attributes}}>{{.Content}}</tag>` template. Text, inline styles, and
//! scripts carry their own payload and resolve an extra token for it.

mod raw;

use std::borrow::Cow;

use html5ever::local_name;

use crate::element::{BaseElement, Element, ElementExt, Tag};

pub use raw::{Script, Style, Text};

/// An element with no behavior beyond the base.
#[derive(Debug)]
pub struct Container {
    base: BaseElement,
}

impl Container {
    /// A container with an opening and closing tag.
    pub fn new(tag: Tag) -> Self {
        let markup = format!("<{tag}{{{{.Attributes}}}}>{{{{.Content}}}}</{tag}>");
        Self::from_markup(tag, markup)
    }

    /// A void element (no content, no closing tag).
    pub fn void(tag: Tag) -> Self {
        let markup = format!("<{tag}{{{{.Attributes}}}}>");
        Self::from_markup(tag, markup)
    }

    /// A container written through an arbitrary template.
    pub fn from_markup(tag: Tag, markup: impl Into<Cow<'static, str>>) -> Self {
        Self {
            base: BaseElement::new(tag, markup),
        }
    }
}

impl Element for Container {
    fn base(&self) -> &BaseElement {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseElement {
        &mut self.base
    }
}

pub fn div() -> Container {
    Container::new(local_name!("div"))
}

pub fn div_text(text: &str) -> Container {
    div().with_child(self::text(text))
}

pub fn span() -> Container {
    Container::new(local_name!("span"))
}

pub fn span_text(text: &str) -> Container {
    span().with_child(self::text(text))
}

/// `h1`..`h6`; levels outside that range are clamped.
pub fn heading(level: u8) -> Container {
    let tag = match level.clamp(1, 6) {
        1 => local_name!("h1"),
        2 => local_name!("h2"),
        3 => local_name!("h3"),
        4 => local_name!("h4"),
        5 => local_name!("h5"),
        _ => local_name!("h6"),
    };
    Container::new(tag)
}

pub fn heading_text(text: &str, level: u8) -> Container {
    heading(level).with_child(self::text(text))
}

pub fn a(href: &str) -> Container {
    Container::new(local_name!("a")).with_attr("href", href)
}

pub fn a_text(text: &str, href: &str) -> Container {
    a(href).with_child(self::text(text))
}

/// A label, bound to an input when `for_input` is non-empty.
pub fn label(for_input: &str) -> Container {
    let label = Container::new(local_name!("label"));
    if for_input.is_empty() {
        label
    } else {
        label.with_attr("for", for_input)
    }
}

pub fn input(input_type: &str) -> Container {
    Container::void(local_name!("input")).with_attr("type", input_type)
}

pub fn ul() -> Container {
    Container::new(local_name!("ul"))
}

pub fn ol() -> Container {
    Container::new(local_name!("ol"))
}

pub fn li() -> Container {
    Container::new(local_name!("li"))
}

pub fn details() -> Container {
    Container::new(local_name!("details"))
}

pub fn summary() -> Container {
    Container::new(local_name!("summary"))
}

pub fn time_text(text: &str) -> Container {
    Container::new(local_name!("time")).with_child(self::text(text))
}

pub fn table() -> Container {
    Container::new(local_name!("table"))
}

pub fn thead() -> Container {
    Container::new(local_name!("thead"))
}

pub fn tbody() -> Container {
    Container::new(local_name!("tbody"))
}

pub fn tfoot() -> Container {
    Container::new(local_name!("tfoot"))
}

pub fn tr() -> Container {
    Container::new(local_name!("tr"))
}

pub fn th_text(text: &str) -> Container {
    Container::new(local_name!("th")).with_child(self::text(text))
}

pub fn td_text(text: &str) -> Container {
    Container::new(local_name!("td")).with_child(self::text(text))
}

pub fn text(text: &str) -> Text {
    Text::new(text)
}

pub fn style(css: impl Into<Cow<'static, str>>, id: &str) -> Style {
    Style::new(css).with_id(id)
}

pub fn script(js: impl Into<Cow<'static, str>>) -> Script {
    Script::new(js)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registrar::DocumentRegistrar;

    fn render(el: &dyn Element) -> String {
        let mut out = Vec::new();
        el.write(&mut DocumentRegistrar::new(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_container_markup() {
        assert_eq!(render(&div_text("hi")), "<div>hi</div>");
        assert_eq!(render(&heading_text("Title", 3)), "<h3>Title</h3>");
        assert_eq!(render(&a_text("One", "/one")), r#"<a href="/one">One</a>"#);
    }

    #[test]
    fn test_heading_level_clamped() {
        assert_eq!(heading(0).tag(), &local_name!("h1"));
        assert_eq!(heading(9).tag(), &local_name!("h6"));
    }

    #[test]
    fn test_void_element() {
        let el = input("search").with_id("q");
        assert_eq!(render(&el), r#"<input id="q" type="search">"#);
    }

    #[test]
    fn test_label() {
        assert_eq!(render(&label("")), "<label></label>");
        assert_eq!(render(&label("q")), r#"<label for="q"></label>"#);
    }

    #[test]
    fn test_table_cells() {
        let row = tr().with_child(th_text("Name")).with_child(td_text("a & b"));
        assert_eq!(render(&row), "<tr><th>Name</th><td>a &amp; b</td></tr>");
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(render(&span_text("1 < 2 & 3")), "<span>1 &lt; 2 &amp; 3</span>");
    }
}
