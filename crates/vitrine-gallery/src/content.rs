#![forbid(unsafe_code)]

//! Shared string catalog for the showcase themes.
//!
//! Real deployments load this from bundled dictionaries; the showcase
//! builds it inline. Coverage is deliberately uneven — `nav.lab` has no
//! Italian entry — so the fallback path stays exercised.

use vitrine_i18n::{Catalog, LocaleStrings};

/// The showcase catalog: English and Italian, default namespace plus a
/// `portfolio` namespace.
#[must_use]
pub fn catalog() -> Catalog {
    let mut en = LocaleStrings::new();
    en.insert("nav.hero", "Home");
    en.insert("nav.work", "Work");
    en.insert("nav.about", "About");
    en.insert("nav.contact", "Contact");
    en.insert("nav.lab", "Lab");
    en.insert_in("portfolio", "cta.view", "View project");
    en.insert_in("portfolio", "cta.back", "Back to gallery");

    let mut it = LocaleStrings::new();
    it.insert("nav.hero", "Inizio");
    it.insert("nav.work", "Progetti");
    it.insert("nav.about", "Chi sono");
    it.insert("nav.contact", "Contatti");
    // nav.lab left untranslated on purpose.
    it.insert_in("portfolio", "cta.view", "Guarda il progetto");
    it.insert_in("portfolio", "cta.back", "Torna alla galleria");

    let mut catalog = Catalog::new();
    catalog.add_locale("en", en);
    catalog.add_locale("it", it);
    catalog
}
