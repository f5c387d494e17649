#![forbid(unsafe_code)]

//! Namespaced, per-locale string tables.
//!
//! # Design
//!
//! A [`Catalog`] maps a locale code (`"en"`, `"it"`) to a
//! [`LocaleStrings`] table, which maps a namespace to dot-keyed entries
//! (`"nav.home"` → `"Home"`). Lookup either succeeds or is absent; the
//! catalog itself never falls back — precedence between dictionary
//! entry, caller fallback, and raw key belongs to
//! [`resolve`](crate::resolver::resolve).
//!
//! How tables are produced is the integration's business: built
//! programmatically, or ingested from JSON behind the `serde` feature.

use ahash::AHashMap;

/// Namespace used when a caller supplies none.
pub const DEFAULT_NAMESPACE: &str = "translation";

/// String entries for a single locale, grouped by namespace.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    namespaces: AHashMap<String, AHashMap<String, String>>,
}

impl LocaleStrings {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry into the default namespace.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.insert_in(DEFAULT_NAMESPACE, key, text);
    }

    /// Insert an entry into a named namespace.
    pub fn insert_in(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Look up an entry. `None` when the namespace or key is absent.
    #[must_use]
    pub fn get(&self, namespace: &str, key: &str) -> Option<&str> {
        self.namespaces
            .get(namespace)?
            .get(key)
            .map(String::as_str)
    }

    /// All keys across namespaces, as `(namespace, key)` pairs.
    pub fn keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.namespaces
            .iter()
            .flat_map(|(ns, entries)| entries.keys().map(move |k| (ns.as_str(), k.as_str())))
    }

    /// Total entry count across namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.namespaces.values().map(|m| m.len()).sum()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-locale string tables for the whole application.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: AHashMap<String, LocaleStrings>,
}

impl Catalog {
    /// Empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the table for a locale.
    pub fn add_locale(&mut self, locale: impl Into<String>, strings: LocaleStrings) {
        self.locales.insert(locale.into(), strings);
    }

    /// Look up an entry for a locale. `None` when the locale, namespace,
    /// or key is absent. Never panics.
    #[must_use]
    pub fn get(&self, locale: &str, namespace: &str, key: &str) -> Option<&str> {
        self.locales.get(locale)?.get(namespace, key)
    }

    /// Registered locale codes, in no particular order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// `(namespace, key)` pairs present in some locale but missing from
    /// `locale`. Useful for translation-coverage checks in tests.
    #[must_use]
    pub fn missing_keys(&self, locale: &str) -> Vec<(String, String)> {
        let mut missing = Vec::new();
        for (other_code, other) in &self.locales {
            if other_code == locale {
                continue;
            }
            for (ns, key) in other.keys() {
                if self.get(locale, ns, key).is_none() {
                    missing.push((ns.to_string(), key.to_string()));
                }
            }
        }
        missing.sort();
        missing.dedup();
        missing
    }
}

// ---------------------------------------------------------------------------
// Serde ingestion (feature-gated)
// ---------------------------------------------------------------------------

/// Error from catalog ingestion.
#[cfg(feature = "serde")]
#[derive(Debug)]
pub enum CatalogError {
    /// The input was not the expected `locale → namespace → key → text`
    /// JSON shape.
    Parse(serde_json::Error),
}

#[cfg(feature = "serde")]
impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "catalog parse error: {err}"),
        }
    }
}

#[cfg(feature = "serde")]
impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
        }
    }
}

#[cfg(feature = "serde")]
impl Catalog {
    /// Ingest a catalog from JSON of the shape
    /// `{ "en": { "translation": { "nav.home": "Home" } } }`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        use std::collections::BTreeMap;

        type Raw = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;
        let raw: Raw = serde_json::from_str(json).map_err(CatalogError::Parse)?;

        let mut catalog = Self::new();
        for (locale, namespaces) in raw {
            let mut strings = LocaleStrings::new();
            for (ns, entries) in namespaces {
                for (key, text) in entries {
                    strings.insert_in(ns.as_str(), key, text);
                }
            }
            catalog.add_locale(locale, strings);
        }
        Ok(catalog)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
