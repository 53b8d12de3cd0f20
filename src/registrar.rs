//! Per-document ledger of one-time resources.
//!
//! Components gate custom-element definitions, component stylesheets, and
//! deferred scripts through [`Registrar::requires_registration`], so N uses
//! of a component kind in one document emit its definition once.

use std::collections::HashSet;

use log::debug;

/// Idempotency gate for one-time resources.
pub trait Registrar {
    /// Returns `true` the first time `name` is asked for, `false` afterwards.
    fn requires_registration(&mut self, name: &str) -> bool;
}

/// The registrar a document uses for the duration of one render.
#[derive(Debug, Default)]
pub struct DocumentRegistrar {
    registered: HashSet<String>,
}

impl DocumentRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `name` has been registered, without registering it.
    pub fn contains(&self, name: &str) -> bool {
        self.registered.contains(name)
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

impl Registrar for DocumentRegistrar {
    fn requires_registration(&mut self, name: &str) -> bool {
        if self.registered.contains(name) {
            return false;
        }
        debug!("registering document resource {name}");
        self.registered.insert(name.to_string())
    }
}
