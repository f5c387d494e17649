#![forbid(unsafe_code)]

//! Convenience handle binding a catalog snapshot to the language store.
//!
//! Themes call this on every render pass; resolution is cheap (two map
//! lookups) and is not cached.

use std::rc::Rc;

use crate::catalog::Catalog;
use crate::resolver::resolve;
use crate::store::LanguageStore;

/// Catalog plus language store, bundled for render-time lookups.
///
/// Cloning is cheap (the catalog is shared behind `Rc`) and clones see
/// the same language state.
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Rc<Catalog>,
    store: LanguageStore,
}

impl Translator {
    /// Bind a catalog to a language store.
    #[must_use]
    pub fn new(catalog: Catalog, store: LanguageStore) -> Self {
        Self {
            catalog: Rc::new(catalog),
            store,
        }
    }

    /// Resolve a key in the default namespace, degrading to the raw key.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        resolve(&self.catalog, self.store.current(), None, key, None).to_string()
    }

    /// Resolve a key in the default namespace with a literal fallback.
    #[must_use]
    pub fn t_or<'a>(&'a self, key: &'a str, fallback: &'a str) -> String {
        resolve(&self.catalog, self.store.current(), None, key, Some(fallback)).to_string()
    }

    /// Resolve a key in a named namespace with an optional fallback.
    #[must_use]
    pub fn t_ns(&self, namespace: &str, key: &str, fallback: Option<&str>) -> String {
        resolve(
            &self.catalog,
            self.store.current(),
            Some(namespace),
            key,
            fallback,
        )
        .to_string()
    }

    /// The language store this translator reads from.
    #[must_use]
    pub fn store(&self) -> &LanguageStore {
        &self.store
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
