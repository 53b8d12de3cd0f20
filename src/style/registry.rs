//! Shared registry of atomic classes in use.
//!
//! Styling calls register the tokens they hand out; the stylesheet is later
//! generated from whatever has been registered so far. The set only grows.
//! Clones share the same set, so one registry can be handed to every
//! document built in a process while tests create isolated ones.

use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

use cssparser::serialize_identifier;
use log::debug;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::Result;

use super::ToCss;
use super::class::{self, ClassToken};
use super::codec::Codec;
use super::values::{Align, Color, Direction, FontWeight, Size};

static GLOBAL: Lazy<ClassRegistry> = Lazy::new(ClassRegistry::new);

/// Thread-safe set of registered class tokens plus the codec to decode them.
#[derive(Clone)]
pub struct ClassRegistry {
    classes: Arc<RwLock<BTreeSet<ClassToken>>>,
    codec: Arc<Codec>,
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRegistry {
    /// Create an empty registry using the standard codec.
    pub fn new() -> Self {
        Self::with_codec(Codec::standard())
    }

    /// Create an empty registry decoding through a custom codec.
    pub fn with_codec(codec: Codec) -> Self {
        Self {
            classes: Arc::new(RwLock::new(BTreeSet::new())),
            codec: Arc::new(codec),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static ClassRegistry {
        &GLOBAL
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Record a token and hand it back unchanged.
    ///
    /// Registering the same token again has no further effect. The set is
    /// never pruned, so a token the codec cannot decode makes every later
    /// stylesheet generation fail; debug builds panic here instead. Use
    /// [`try_register`](Self::try_register) for tokens built at runtime.
    pub fn register(&self, token: ClassToken) -> ClassToken {
        debug_assert!(
            self.codec.decode(&token).is_ok(),
            "registered class {token} cannot be decoded"
        );
        self.insert(token)
    }

    /// Record a token only if the codec can decode it.
    pub fn try_register(&self, token: ClassToken) -> Result<ClassToken> {
        self.codec.decode(&token)?;
        Ok(self.insert(token))
    }

    fn insert(&self, token: ClassToken) -> ClassToken {
        if self.classes.read().contains(&token) {
            return token;
        }
        if self.classes.write().insert(token.clone()) {
            debug!("registered class {token}");
        }
        token
    }

    pub fn contains(&self, token: &ClassToken) -> bool {
        self.classes.read().contains(token)
    }

    /// Number of distinct registered tokens.
    pub fn len(&self) -> usize {
        self.classes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.read().is_empty()
    }

    /// A consistent copy of the registered set.
    pub fn snapshot(&self) -> Vec<ClassToken> {
        self.classes.read().iter().cloned().collect()
    }

    /// Generate one `.token{--prefix:value}` rule per registered token.
    ///
    /// Works from a snapshot, so concurrent registrations land in a later
    /// call. Fails if any registered token cannot be decoded.
    pub fn generate_stylesheet(&self) -> Result<String> {
        let mut stylesheet = String::new();

        for token in self.snapshot() {
            let declaration = self.codec.decode(&token)?;
            stylesheet.push('.');
            // Infallible: writing to a String
            let _ = serialize_identifier(token.as_str(), &mut stylesheet);
            stylesheet.push('{');
            declaration.to_css(&mut stylesheet);
            stylesheet.push('}');
        }

        Ok(stylesheet)
    }

    /// Generate the stylesheet and write it to `w`.
    ///
    /// Nothing is written if generation fails.
    pub fn write_stylesheet(&self, w: &mut dyn Write) -> Result<()> {
        let stylesheet = self.generate_stylesheet()?;
        w.write_all(stylesheet.as_bytes())?;
        Ok(())
    }

    pub fn row_gap(&self, s: Size) -> ClassToken {
        self.register(class::row_gap(s))
    }

    pub fn column_gap(&self, s: Size) -> ClassToken {
        self.register(class::column_gap(s))
    }

    pub fn align_content(&self, a: Align) -> ClassToken {
        self.register(class::align_content(a))
    }

    pub fn align_items(&self, a: Align) -> ClassToken {
        self.register(class::align_items(a))
    }

    pub fn justify_content(&self, a: Align) -> ClassToken {
        self.register(class::justify_content(a))
    }

    pub fn justify_items(&self, a: Align) -> ClassToken {
        self.register(class::justify_items(a))
    }

    pub fn flex_direction(&self, d: Direction) -> ClassToken {
        self.register(class::flex_direction(d))
    }

    pub fn background_color(&self, c: Color) -> ClassToken {
        self.register(class::background_color(c))
    }

    pub fn foreground_color(&self, c: Color) -> ClassToken {
        self.register(class::foreground_color(c))
    }

    pub fn marker_color(&self, c: Color) -> ClassToken {
        self.register(class::marker_color(c))
    }

    pub fn font_size(&self, s: Size) -> ClassToken {
        self.register(class::font_size(s))
    }

    pub fn font_weight(&self, w: FontWeight) -> ClassToken {
        self.register(class::font_weight(w))
    }

    pub fn margin_block_end(&self, s: Size) -> ClassToken {
        self.register(class::margin_block_end(s))
    }

    pub fn grid_template_rows(&self, s: Size) -> ClassToken {
        self.register(class::grid_template_rows(s))
    }

    pub fn grid_template_rows_px(&self, px: f64) -> ClassToken {
        self.register(class::grid_template_rows_px(px))
    }
}

impl fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassRegistry")
            .field("count", &self.len())
            .field("codec", &self.codec)
            .finish()
    }
}
