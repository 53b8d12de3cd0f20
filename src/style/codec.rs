//! Prefix-dispatched decoding of class tokens back into CSS.
//!
//! Each supported prefix maps to a [`ClassFamily`] that knows how to parse its
//! suffix. A decoded token sets a custom property named after its prefix
//! (`.bg-red{--bg:var(--c-red)}`); the consumer rules emitted by
//! [`Codec::write_consumer_rules`] feed that custom property into the real CSS
//! property for plain elements, while shadow-DOM hosts read it directly.

use std::collections::HashMap;
use std::fmt::{self, Write as _};

use crate::error::{Error, Result};

use super::ToCss;
use super::class::{ClassToken, prefix};
use super::values::{Align, Color, Direction, FontWeight, Size, StyleValue};

/// A decoded `property:value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl ToCss for Declaration {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(&self.property);
        buf.push(':');
        buf.push_str(&self.value);
    }
}

/// One pluggable family of atomic classes.
pub trait ClassFamily: Send + Sync {
    /// The prefix this family owns.
    fn prefix(&self) -> &'static str;

    /// The real CSS property that consumes this family's custom property.
    fn consumer_property(&self) -> &'static str;

    /// Pseudo-element the consumer rule targets, if any.
    fn consumer_pseudo(&self) -> Option<&'static str> {
        None
    }

    /// Parse a suffix into a CSS value, `None` if it is not a known variant.
    fn value(&self, suffix: &str) -> Option<String>;
}

/// A [`ClassFamily`] backed by a plain function.
pub struct Family {
    pub prefix: &'static str,
    pub property: &'static str,
    pub pseudo: Option<&'static str>,
    pub value: fn(&str) -> Option<String>,
}

impl ClassFamily for Family {
    fn prefix(&self) -> &'static str {
        self.prefix
    }

    fn consumer_property(&self) -> &'static str {
        self.property
    }

    fn consumer_pseudo(&self) -> Option<&'static str> {
        self.pseudo
    }

    fn value(&self, suffix: &str) -> Option<String> {
        (self.value)(suffix)
    }
}

fn keyword<V: StyleValue>(suffix: &str) -> Option<String> {
    V::parse(suffix).map(|v| v.css_value())
}

fn font_size(suffix: &str) -> Option<String> {
    Size::from_name(suffix).map(|s| s.font_size_css_value())
}

/// Grid rows accept a bare pixel count or a Size name. Numeric parse wins.
fn grid_rows(suffix: &str) -> Option<String> {
    match suffix.parse::<f64>() {
        Ok(px) if px.is_finite() => Some(format!("{suffix}px")),
        _ => keyword::<Size>(suffix),
    }
}

/// Dispatch table from prefix to class family.
pub struct Codec {
    families: HashMap<&'static str, Box<dyn ClassFamily>>,
}

impl Codec {
    /// A codec with no families.
    pub fn empty() -> Self {
        Self {
            families: HashMap::new(),
        }
    }

    /// The standard families: gaps, alignment, direction, colors, font size
    /// and weight, block-end margin, and grid rows.
    pub fn standard() -> Self {
        let families = [
            Family { prefix: prefix::ROW_GAP, property: "row-gap", pseudo: None, value: keyword::<Size> },
            Family { prefix: prefix::COLUMN_GAP, property: "column-gap", pseudo: None, value: keyword::<Size> },
            Family { prefix: prefix::ALIGN_CONTENT, property: "align-content", pseudo: None, value: keyword::<Align> },
            Family { prefix: prefix::ALIGN_ITEMS, property: "align-items", pseudo: None, value: keyword::<Align> },
            Family { prefix: prefix::JUSTIFY_CONTENT, property: "justify-content", pseudo: None, value: keyword::<Align> },
            Family { prefix: prefix::JUSTIFY_ITEMS, property: "justify-items", pseudo: None, value: keyword::<Align> },
            Family { prefix: prefix::FLEX_DIRECTION, property: "flex-direction", pseudo: None, value: keyword::<Direction> },
            Family { prefix: prefix::BACKGROUND_COLOR, property: "background-color", pseudo: None, value: keyword::<Color> },
            Family { prefix: prefix::FOREGROUND_COLOR, property: "color", pseudo: None, value: keyword::<Color> },
            Family { prefix: prefix::MARKER_COLOR, property: "color", pseudo: Some("::marker"), value: keyword::<Color> },
            Family { prefix: prefix::FONT_SIZE, property: "font-size", pseudo: None, value: font_size },
            Family { prefix: prefix::FONT_WEIGHT, property: "font-weight", pseudo: None, value: keyword::<FontWeight> },
            Family { prefix: prefix::MARGIN_BLOCK_END, property: "margin-block-end", pseudo: None, value: keyword::<Size> },
            Family { prefix: prefix::GRID_TEMPLATE_ROWS, property: "grid-template-rows", pseudo: None, value: grid_rows },
        ];

        families
            .into_iter()
            .fold(Self::empty(), |codec, family| codec.with_family(family))
    }

    /// Add (or replace) a family.
    pub fn with_family<F: ClassFamily + 'static>(mut self, family: F) -> Self {
        self.families.insert(family.prefix(), Box::new(family));
        self
    }

    /// Check whether a prefix is wired into the table.
    pub fn supports(&self, prefix: &str) -> bool {
        self.families.contains_key(prefix)
    }

    /// Decode a token into the custom-property declaration it stands for.
    pub fn decode(&self, token: &ClassToken) -> Result<Declaration> {
        let (pfx, sfx) = token.split()?;
        let family = self
            .families
            .get(pfx)
            .ok_or_else(|| Error::UnsupportedPrefix(pfx.to_string()))?;
        let value = family.value(sfx).ok_or_else(|| Error::UnknownVariant {
            prefix: pfx.to_string(),
            suffix: sfx.to_string(),
        })?;

        Ok(Declaration {
            property: format!("--{pfx}"),
            value,
        })
    }

    /// Write rules that apply each family's custom property to elements
    /// carrying one of its classes, sorted by prefix.
    pub fn write_consumer_rules(&self, buf: &mut String) {
        let mut prefixes: Vec<&&'static str> = self.families.keys().collect();
        prefixes.sort();

        for pfx in prefixes {
            let family = &self.families[*pfx];
            let pseudo = family.consumer_pseudo().unwrap_or("");
            // Infallible: writing to a String
            let _ = write!(
                buf,
                "[class^=\"{pfx}-\"]{pseudo},[class*=\" {pfx}-\"]{pseudo}{{{}:var(--{pfx})}}",
                family.consumer_property()
            );
        }
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prefixes: Vec<_> = self.families.keys().collect();
        prefixes.sort();
        f.debug_struct("Codec").field("prefixes", &prefixes).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::class;
    use proptest::prelude::*;

    fn decode(name: &str) -> Result<Declaration> {
        Codec::standard().decode(&ClassToken::parse(name)?)
    }

    #[test]
    fn test_decode_color() {
        let decl = decode("bg-red").unwrap();
        assert_eq!(decl.property, "--bg");
        assert_eq!(decl.value, "var(--c-red)");
        assert_eq!(decl.to_css_string(), "--bg:var(--c-red)");
    }

    #[test]
    fn test_font_size_uses_type_scale() {
        assert_eq!(decode("fs-large").unwrap().value, "var(--fs-large)");
        assert_eq!(decode("rg-large").unwrap().value, "var(--s-large)");
    }

    #[test]
    fn test_grid_rows_numeric_and_named() {
        assert_eq!(decode("gtr-240").unwrap().value, "240px");
        assert_eq!(decode("gtr-12.5").unwrap().value, "12.5px");
        assert_eq!(decode("gtr-large").unwrap().value, "var(--s-large)");
    }

    #[test]
    fn test_grid_rows_rejects_non_finite() {
        assert!(matches!(
            decode("gtr-inf"),
            Err(Error::UnknownVariant { .. })
        ));
    }

    #[test]
    fn test_unsupported_prefix() {
        match decode("zz-red") {
            Err(Error::UnsupportedPrefix(p)) => assert_eq!(p, "zz"),
            other => panic!("Expected UnsupportedPrefix, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_variant() {
        match decode("fd-diagonal") {
            Err(Error::UnknownVariant { prefix, suffix }) => {
                assert_eq!(prefix, "fd");
                assert_eq!(suffix, "diagonal");
            }
            other => panic!("Expected UnknownVariant, got {other:?}"),
        }
    }

    #[test]
    fn test_with_family_is_pluggable() {
        let codec = Codec::empty().with_family(Family {
            prefix: "op",
            property: "opacity",
            pseudo: None,
            value: |s| s.parse::<u8>().ok().map(|n| format!("{}%", n.min(100))),
        });
        assert!(codec.supports("op"));
        assert!(!codec.supports("bg"));

        let decl = codec.decode(&ClassToken::new("op", "50")).unwrap();
        assert_eq!(decl.to_css_string(), "--op:50%");
        assert!(codec.decode(&class::background_color(Color::Red)).is_err());
    }

    #[test]
    fn test_consumer_rules() {
        let mut buf = String::new();
        Codec::standard().write_consumer_rules(&mut buf);
        assert!(buf.contains("[class^=\"bg-\"],[class*=\" bg-\"]{background-color:var(--bg)}"));
        assert!(buf.contains("[class^=\"cm-\"]::marker,[class*=\" cm-\"]::marker{color:var(--cm)}"));
        assert_eq!(buf.matches('{').count(), 14);
    }

    #[test]
    fn test_consumer_rules_append_in_prefix_order() {
        let mut buf = String::from("body{}");
        Codec::standard().write_consumer_rules(&mut buf);
        assert!(buf.starts_with("body{}[class^=\"ac-\"],[class*=\" ac-\"]{align-content:var(--ac)}"));
        let bg = buf.find("[class^=\"bg-\"]").unwrap();
        let rg = buf.find("[class^=\"rg-\"]").unwrap();
        assert!(bg < rg);
        assert!(buf.ends_with("{row-gap:var(--rg)}"));
    }

    #[test]
    fn test_all_variants_decode_like_direct_lookup() {
        let codec = Codec::standard();
        let check = |token: ClassToken, expected: String| {
            assert_eq!(codec.decode(&token).unwrap().value, expected, "{token}");
        };

        for &s in Size::ALL {
            check(class::row_gap(s), s.css_value());
            check(class::column_gap(s), s.css_value());
            check(class::margin_block_end(s), s.css_value());
            check(class::grid_template_rows(s), s.css_value());
            check(class::font_size(s), s.font_size_css_value());
        }
        for &c in Color::ALL {
            check(class::background_color(c), c.css_value());
            check(class::foreground_color(c), c.css_value());
            check(class::marker_color(c), c.css_value());
        }
        for &a in Align::ALL {
            check(class::align_content(a), a.css_value());
            check(class::align_items(a), a.css_value());
            check(class::justify_content(a), a.css_value());
            check(class::justify_items(a), a.css_value());
        }
        for &d in Direction::ALL {
            check(class::flex_direction(d), d.css_value());
        }
        for &w in FontWeight::ALL {
            check(class::font_weight(w), w.css_value());
        }
    }

    proptest! {
        #[test]
        fn prop_pixel_rows_round_trip(px in 0u32..100_000) {
            let token = class::grid_template_rows_px(px as f64);
            let decl = Codec::standard().decode(&token).unwrap();
            prop_assert_eq!(decl.value, format!("{px}px"));
        }
    }
}
