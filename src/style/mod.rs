//! Atomic style system: typed style values, class tokens, and the registry.
//!
//! This module contains:
//! - Style value enums (Size, Color, Align, Direction, FontWeight)
//! - ClassToken encoding for single-purpose utility classes
//! - The prefix-dispatched Codec that decodes tokens back into CSS
//! - ClassRegistry, the shared set of classes a stylesheet is generated from

pub mod class;
mod codec;
mod registry;
mod values;

/// Serialize a value as CSS text.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

pub use class::{ClassToken, SEPARATOR};
pub use codec::{ClassFamily, Codec, Declaration, Family};
pub use registry::ClassRegistry;
pub use values::{Align, Color, Direction, FontWeight, Size, StyleKind, StyleValue};
