#![forbid(unsafe_code)]

//! Showcase gallery: the Vitrine stack wired end to end.
//!
//! Two sample themes — a root-mounted minimal skin and a `/v10`-mounted
//! editorial skin — plus the shared string catalog, assembled the way a
//! real deployment of the portfolio gateway would do it. Integration
//! tests exercise the full path: gateway dispatch, scoped links,
//! programmatic navigation, language switching, and section tracking.

pub mod content;
pub mod themes;

use tracing::debug;
use vitrine_i18n::{LanguageStore, Translator};
use vitrine_theme::ThemeRegistry;

/// Build the gateway registry with every showcase theme registered.
#[must_use]
pub fn gateway() -> ThemeRegistry {
    let mut registry = ThemeRegistry::new();
    registry.register(Box::new(themes::Minimal));
    registry.register(Box::new(themes::Editorial));
    debug!(themes = registry.len(), "gateway assembled");
    registry
}

/// Build the shared translator over the showcase catalog.
#[must_use]
pub fn translator() -> Translator {
    Translator::new(content::catalog(), LanguageStore::new())
}
