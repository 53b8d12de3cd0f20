//! Style value types and the style_value! macro.
//!
//! Every variant has a canonical lowercase name used as a class-name suffix.
//! Names never contain the class separator, so `{prefix}-{name}` always
//! splits back into exactly two parts.

use std::fmt;

use super::ToCss;

/// The closed set of value kinds a class token can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Size,
    Color,
    Alignment,
    Direction,
    FontWeight,
}

/// A semantic style value that can be encoded into a class-name suffix.
pub trait StyleValue: Copy + Sized + 'static {
    /// Which kind of value this is.
    const KIND: StyleKind;

    /// Every variant, in declaration order.
    fn all() -> &'static [Self];

    /// Canonical lowercase name (the class suffix).
    fn name(&self) -> &'static str;

    /// Parse a canonical name back into a variant.
    fn parse(name: &str) -> Option<Self>;

    /// The CSS value this variant stands for.
    fn css_value(&self) -> String;
}

/// Macro for defining style value enums keyed by canonical name.
///
/// Generates the enum, the `ALL` table, name lookup both ways, and
/// `Display` (which prints the canonical name).
///
/// # Example
///
/// ```ignore
/// style_value! {
///     /// Flex direction.
///     pub enum Direction: Direction {
///         Row => "row",
///         Column => "column",
///     }
/// }
/// ```
macro_rules! style_value {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the canonical name for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)*
                }
            }

            /// Parse a canonical name into this enum.
            #[inline]
            pub fn from_name(s: &str) -> Option<Self> {
                match s {
                    $($label => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                buf.push_str(&StyleValue::css_value(self));
            }
        }

        impl StyleValue for $name {
            const KIND: StyleKind = StyleKind::$kind;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn name(&self) -> &'static str {
                self.as_str()
            }

            fn parse(name: &str) -> Option<Self> {
                Self::from_name(name)
            }

            fn css_value(&self) -> String {
                self.value().into()
            }
        }
    };
}

style_value! {
    /// Spacing and type scale. CSS values reference theme custom properties
    /// so the scale can be retuned without renaming classes.
    pub enum Size: Size {
        XXXSmall => "xxxsmall",
        XXSmall => "xxsmall",
        XSmall => "xsmall",
        Small => "small",
        Normal => "normal",
        Large => "large",
        XLarge => "xlarge",
        XXLarge => "xxlarge",
        XXXLarge => "xxxlarge",
    }
}

impl Size {
    /// Spacing length, e.g. `var(--s-large)`.
    fn value(&self) -> String {
        format!("var(--s-{})", self.as_str())
    }

    /// Font size from the type scale, e.g. `var(--fs-large)`.
    pub fn font_size_css_value(&self) -> String {
        format!("var(--fs-{})", self.as_str())
    }
}

style_value! {
    /// Themed palette entries.
    pub enum Color: Color {
        Black => "black",
        White => "white",
        Red => "red",
        Orange => "orange",
        Yellow => "yellow",
        Green => "green",
        Mint => "mint",
        Teal => "teal",
        Cyan => "cyan",
        Blue => "blue",
        Indigo => "indigo",
        Purple => "purple",
        Pink => "pink",
        Brown => "brown",
        Gray => "gray",
        Background => "background",
        Foreground => "foreground",
        Highlight => "highlight",
        Transparent => "transparent",
    }
}

impl Color {
    fn value(&self) -> String {
        format!("var(--c-{})", self.as_str())
    }
}

style_value! {
    /// Box alignment keywords (align-*/justify-*).
    pub enum Align: Alignment {
        Normal => "normal",
        Start => "start",
        Center => "center",
        End => "end",
        Stretch => "stretch",
        Baseline => "baseline",
        SpaceBetween => "spacebetween",
        SpaceAround => "spacearound",
        SpaceEvenly => "spaceevenly",
    }
}

impl Align {
    fn value(&self) -> &'static str {
        match self {
            Align::SpaceBetween => "space-between",
            Align::SpaceAround => "space-around",
            Align::SpaceEvenly => "space-evenly",
            other => other.as_str(),
        }
    }
}

style_value! {
    /// Flex direction.
    pub enum Direction: Direction {
        Row => "row",
        Column => "column",
        RowReverse => "rowreverse",
        ColumnReverse => "columnreverse",
    }
}

impl Direction {
    fn value(&self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
            Direction::RowReverse => "row-reverse",
            Direction::ColumnReverse => "column-reverse",
        }
    }
}

style_value! {
    /// Font weight keywords.
    pub enum FontWeight: FontWeight {
        Lighter => "lighter",
        Light => "light",
        Normal => "normal",
        Medium => "medium",
        SemiBold => "semibold",
        Bold => "bold",
        Bolder => "bolder",
    }
}

impl FontWeight {
    fn value(&self) -> &'static str {
        match self {
            FontWeight::Lighter => "lighter",
            FontWeight::Light => "300",
            FontWeight::Normal => "normal",
            FontWeight::Medium => "500",
            FontWeight::SemiBold => "600",
            FontWeight::Bold => "bold",
            FontWeight::Bolder => "bolder",
        }
    }
}
