#![forbid(unsafe_code)]

//! The resolution contract: entry, then fallback, then raw key.
//!
//! # Design
//!
//! [`resolve`] is a pure function of `(catalog snapshot, language,
//! namespace, key, fallback)`. Precedence, most to least preferred:
//!
//! 1. the exact-language dictionary entry in the requested namespace;
//! 2. the caller-supplied literal fallback, if any;
//! 3. the raw key itself, verbatim.
//!
//! It never fails and never yields blank output for a non-empty key: a
//! missing translation is invisible to the end user, not an error.

use crate::catalog::{Catalog, DEFAULT_NAMESPACE};
use crate::locale::Lang;

/// Resolve a translation key to display text.
///
/// `namespace` defaults to [`DEFAULT_NAMESPACE`] when `None`. Total over
/// its input domain.
#[must_use]
pub fn resolve<'a>(
    catalog: &'a Catalog,
    lang: Lang,
    namespace: Option<&str>,
    key: &'a str,
    fallback: Option<&'a str>,
) -> &'a str {
    let namespace = namespace.unwrap_or(DEFAULT_NAMESPACE);
    if let Some(entry) = catalog.get(lang.code(), namespace, key) {
        return entry;
    }
    fallback.unwrap_or(key)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
