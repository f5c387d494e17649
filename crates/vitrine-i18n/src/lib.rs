#![forbid(unsafe_code)]

//! Localized content resolution for Vitrine.
//!
//! Provides externalized string storage with namespaced, dot-keyed
//! lookup, deterministic fallback resolution, and a process-wide
//! observable language state.
//!
//! # Role in Vitrine
//! Every theme renders the same content in two display languages.
//! `vitrine-i18n` isolates that concern: a missing translation never
//! surfaces as blank text — resolution degrades from dictionary entry to
//! caller-supplied fallback to the raw key, in that order, and never
//! fails.
//!
//! # How it fits in the system
//! Themes depend on this crate to resolve strings before rendering. It
//! depends only on `vitrine-core` (for the reactive language cell) and
//! carries no rendering or routing concerns, keeping the localization
//! layer reusable and testable.

pub mod catalog;
pub mod locale;
pub mod resolver;
pub mod store;
pub mod translator;

pub use catalog::{Catalog, LocaleStrings, DEFAULT_NAMESPACE};
pub use locale::Lang;
pub use resolver::resolve;
pub use store::LanguageStore;
pub use translator::Translator;

#[cfg(feature = "serde")]
pub use catalog::CatalogError;
