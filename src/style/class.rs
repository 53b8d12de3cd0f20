//! Class tokens: `{prefix}-{suffix}` names for atomic classes.
//!
//! The encoders here are pure. Registering a token (so that a rule is
//! generated for it) is the job of [`ClassRegistry`](super::ClassRegistry).

use std::fmt;

use crate::error::{Error, Result};

use super::values::{Align, Color, Direction, FontWeight, Size, StyleValue};

/// Separator between the property prefix and the value suffix.
pub const SEPARATOR: char = '-';

/// Property prefix codes understood by the standard codec.
pub mod prefix {
    pub const ROW_GAP: &str = "rg";
    pub const COLUMN_GAP: &str = "cg";
    pub const ALIGN_CONTENT: &str = "ac";
    pub const ALIGN_ITEMS: &str = "ai";
    pub const JUSTIFY_CONTENT: &str = "jc";
    pub const JUSTIFY_ITEMS: &str = "ji";
    pub const FLEX_DIRECTION: &str = "fd";
    pub const BACKGROUND_COLOR: &str = "bg";
    pub const FOREGROUND_COLOR: &str = "fg";
    pub const MARKER_COLOR: &str = "cm";
    pub const FONT_SIZE: &str = "fs";
    pub const FONT_WEIGHT: &str = "fw";
    pub const MARGIN_BLOCK_END: &str = "mbe";
    pub const GRID_TEMPLATE_ROWS: &str = "gtr";
}

/// An atomic class name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassToken(String);

impl ClassToken {
    /// Join a prefix and a suffix with the separator.
    pub fn new(prefix: &str, suffix: &str) -> Self {
        let mut name = String::with_capacity(prefix.len() + suffix.len() + 1);
        name.push_str(prefix);
        name.push(SEPARATOR);
        name.push_str(suffix);
        ClassToken(name)
    }

    /// Encode a typed style value under the given prefix.
    pub fn encode<V: StyleValue>(prefix: &str, value: V) -> Self {
        Self::new(prefix, value.name())
    }

    /// Parse a class name, checking that it has the `{prefix}-{suffix}` shape.
    ///
    /// Whether the prefix is supported is decided by the codec.
    pub fn parse(name: &str) -> Result<Self> {
        let token = ClassToken(name.to_string());
        token.split()?;
        Ok(token)
    }

    /// Split into `(prefix, suffix)`.
    ///
    /// Fails unless splitting on the separator yields exactly two non-empty parts.
    pub fn split(&self) -> Result<(&str, &str)> {
        let mut parts = self.0.split(SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(pfx), Some(sfx), None) if !pfx.is_empty() && !sfx.is_empty() => Ok((pfx, sfx)),
            _ => Err(Error::MalformedClass(self.0.clone())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn row_gap(s: Size) -> ClassToken {
    ClassToken::encode(prefix::ROW_GAP, s)
}

pub fn column_gap(s: Size) -> ClassToken {
    ClassToken::encode(prefix::COLUMN_GAP, s)
}

pub fn align_content(a: Align) -> ClassToken {
    ClassToken::encode(prefix::ALIGN_CONTENT, a)
}

pub fn align_items(a: Align) -> ClassToken {
    ClassToken::encode(prefix::ALIGN_ITEMS, a)
}

pub fn justify_content(a: Align) -> ClassToken {
    ClassToken::encode(prefix::JUSTIFY_CONTENT, a)
}

pub fn justify_items(a: Align) -> ClassToken {
    ClassToken::encode(prefix::JUSTIFY_ITEMS, a)
}

pub fn flex_direction(d: Direction) -> ClassToken {
    ClassToken::encode(prefix::FLEX_DIRECTION, d)
}

pub fn background_color(c: Color) -> ClassToken {
    ClassToken::encode(prefix::BACKGROUND_COLOR, c)
}

pub fn foreground_color(c: Color) -> ClassToken {
    ClassToken::encode(prefix::FOREGROUND_COLOR, c)
}

pub fn marker_color(c: Color) -> ClassToken {
    ClassToken::encode(prefix::MARKER_COLOR, c)
}

pub fn font_size(s: Size) -> ClassToken {
    ClassToken::encode(prefix::FONT_SIZE, s)
}

pub fn font_weight(w: FontWeight) -> ClassToken {
    ClassToken::encode(prefix::FONT_WEIGHT, w)
}

pub fn margin_block_end(s: Size) -> ClassToken {
    ClassToken::encode(prefix::MARGIN_BLOCK_END, s)
}

pub fn grid_template_rows(s: Size) -> ClassToken {
    ClassToken::encode(prefix::GRID_TEMPLATE_ROWS, s)
}

/// Grid rows sized in pixels, e.g. `gtr-240`.
///
/// The suffix is the shortest decimal form of `px`. Negative and non-finite
/// values clamp to `0`: a `-` would break the two-part token shape.
pub fn grid_template_rows_px(px: f64) -> ClassToken {
    let px = if px.is_finite() { px.max(0.0) } else { 0.0 };
    // -0.0 prints as "-0"
    let px = if px == 0.0 { 0.0 } else { px };
    ClassToken::new(prefix::GRID_TEMPLATE_ROWS, &px.to_string())
}
