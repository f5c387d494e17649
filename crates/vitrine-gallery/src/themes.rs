#![forbid(unsafe_code)]

//! The showcase skins.
//!
//! Structure only — each real skin adds its own visual layer on top of
//! the manifest declared here.

use vitrine_theme::{Theme, ThemeManifest};

/// Root-mounted minimal skin: the gateway's default.
pub struct Minimal;

const MINIMAL: ThemeManifest = ThemeManifest {
    slug: "minimal",
    name: "Minimal",
    base_path: "",
    sections: &["hero", "work", "contact"],
};

impl Theme for Minimal {
    fn manifest(&self) -> &ThemeManifest {
        &MINIMAL
    }
}

/// Editorial skin mounted under `/v10`.
pub struct Editorial;

const EDITORIAL: ThemeManifest = ThemeManifest {
    slug: "v10",
    name: "Editorial",
    base_path: "/v10",
    sections: &["hero", "work", "about", "lab", "contact"],
};

impl Theme for Editorial {
    fn manifest(&self) -> &ThemeManifest {
        &EDITORIAL
    }
}
