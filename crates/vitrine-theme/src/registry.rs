#![forbid(unsafe_code)]

//! The gateway registry: mounting themes by URL prefix.
//!
//! # Design
//!
//! The gateway mounts no base path of its own; it holds the set of
//! themes and answers "which theme owns this request path". Matching is
//! longest-prefix on path-segment boundaries, so a root-mounted theme
//! (empty base path) matches last and `/v1` never swallows `/v10/...`.

use ahash::AHashMap;
use tracing::debug;

use crate::theme::Theme;

/// Outcome of a registry lookup.
pub struct ThemeMatch<'r> {
    /// The matched theme.
    pub theme: &'r dyn Theme,
    /// The path with the theme's prefix stripped; always starts with `/`.
    pub theme_path: String,
}

/// The gateway's prefix → theme table.
#[derive(Default)]
pub struct ThemeRegistry {
    /// Registration order, kept for the gateway index.
    themes: Vec<Box<dyn Theme>>,
    /// Slug → index into `themes`.
    by_slug: AHashMap<&'static str, usize>,
}

impl ThemeRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a theme. Later registrations with the same slug replace
    /// earlier ones in the slug index but both remain listed.
    pub fn register(&mut self, theme: Box<dyn Theme>) {
        let manifest = theme.manifest();
        debug!(slug = manifest.slug, base_path = manifest.base_path, "theme registered");
        self.by_slug.insert(manifest.slug, self.themes.len());
        self.themes.push(theme);
    }

    /// All registered themes, in registration order.
    pub fn themes(&self) -> impl Iterator<Item = &dyn Theme> {
        self.themes.iter().map(|theme| theme.as_ref())
    }

    /// Number of registered themes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Look up a theme by slug.
    #[must_use]
    pub fn by_slug(&self, slug: &str) -> Option<&dyn Theme> {
        self.by_slug.get(slug).map(|&i| self.themes[i].as_ref())
    }

    /// Resolve a request path to the theme mounted under its longest
    /// matching prefix, plus the theme-relative remainder.
    ///
    /// Returns `None` when no theme matches (a root-mounted theme, if
    /// registered, matches every path).
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<ThemeMatch<'_>> {
        let mut best: Option<(&dyn Theme, usize)> = None;
        for theme in self.themes() {
            let base = theme.manifest().base_path;
            let matches = if base.is_empty() {
                true
            } else {
                path == base
                    || path
                        .strip_prefix(base)
                        .is_some_and(|rest| rest.starts_with('/'))
            };
            if matches && best.is_none_or(|(_, len)| base.len() > len) {
                best = Some((theme, base.len()));
            }
        }

        best.map(|(theme, prefix_len)| {
            let rest = &path[prefix_len..];
            let theme_path = if rest.is_empty() {
                "/".to_string()
            } else {
                rest.to_string()
            };
            ThemeMatch { theme, theme_path }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
