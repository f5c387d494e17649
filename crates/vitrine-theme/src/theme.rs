#![forbid(unsafe_code)]

//! The per-theme structural contract.
//!
//! # Design
//!
//! A theme's *structure* is its manifest: slug, display name, mount
//! prefix, ordered section list. Everything visual lives outside this
//! workspace. The [`Theme`] trait carries the manifest plus default
//! helpers that derive the pieces every skin needs — mount scope,
//! scoped links, section tracker, localized nav labels — so a concrete
//! theme is usually a unit struct and a constant.

use vitrine_core::{MountScope, NavTarget};
use vitrine_i18n::Translator;
use vitrine_nav::Link;
use vitrine_scroll::SectionTracker;

/// Static structure of one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeManifest {
    /// Stable identifier, also the conventional prefix segment (`v10`).
    pub slug: &'static str,
    /// Human-readable name shown in the gateway index.
    pub name: &'static str,
    /// Mount prefix: empty for root deployment, else `/`-prefixed with
    /// no trailing slash.
    pub base_path: &'static str,
    /// Ordered section identifiers, as the nav bar lists them.
    pub sections: &'static [&'static str],
}

/// The capability set every skin implements.
pub trait Theme {
    /// The theme's static structure.
    fn manifest(&self) -> &ThemeManifest;

    /// The mount scope for an instance of this theme.
    fn mount(&self) -> MountScope {
        MountScope::establish(self.manifest().base_path)
    }

    /// A link scoped to this theme.
    fn link(&self, target: &str) -> Link {
        Link::new(self.mount(), NavTarget::from(target))
    }

    /// A section tracker over this theme's section list, first section
    /// active.
    fn section_tracker(&self) -> SectionTracker {
        let sections = self
            .manifest()
            .sections
            .iter()
            .map(ToString::to_string)
            .collect();
        SectionTracker::with_defaults(sections)
    }

    /// Localized label for a nav entry. Looks up `nav.<section>` in the
    /// default namespace, degrading to the section identifier itself.
    fn nav_label(&self, translator: &Translator, section: &str) -> String {
        let key = format!("nav.{section}");
        translator.t_or(&key, section)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
