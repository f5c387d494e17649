#![forbid(unsafe_code)]

//! Declarative link resolution.
//!
//! # Design
//!
//! The rewrite rule is applied exactly once, at the outermost link:
//! only a *string* target beginning with `/` is rewritten to
//! `base_path + target`. Relative paths, hash-only anchors, external
//! URLs, and router descriptors pass through untouched — a descriptor is
//! assumed already resolved, which is what makes double-prefixing
//! impossible.
//!
//! # Invariants
//!
//! 1. Under the root scope, resolution is the identity on every target.
//! 2. `resolve_href` is total: no error conditions over its input domain.
//! 3. A resolved absolute href always starts with the base path.

use vitrine_core::{MountScope, NavTarget};

/// Resolve a navigation target to the href handed to the router's link
/// primitive.
#[must_use]
pub fn resolve_href(scope: &MountScope, target: &NavTarget) -> String {
    match target {
        NavTarget::Href(href) if href.starts_with('/') => {
            let mut resolved = String::with_capacity(scope.read().len() + href.len());
            resolved.push_str(scope.read());
            resolved.push_str(href);
            resolved
        }
        NavTarget::Href(href) => href.clone(),
        NavTarget::Descriptor(descriptor) => descriptor.to_href(),
    }
}

/// A theme-scoped link: target plus the scope it resolves under.
///
/// The rendering host asks for [`href`](Link::href) and, for nav-bar
/// highlighting, [`is_active`](Link::is_active) against the current
/// location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    scope: MountScope,
    target: NavTarget,
}

impl Link {
    /// Create a link scoped to a theme instance.
    #[must_use]
    pub fn new(scope: MountScope, target: impl Into<NavTarget>) -> Self {
        Self {
            scope,
            target: target.into(),
        }
    }

    /// The resolved destination href.
    #[must_use]
    pub fn href(&self) -> String {
        resolve_href(&self.scope, &self.target)
    }

    /// Whether this link points at the current location: an exact match,
    /// or a prefix match on a path-segment boundary (so `/v10/portfolio`
    /// is active at `/v10/portfolio/oreo` but not at `/v10/portfolios`).
    /// A link to the theme root is active only on exact match.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        let href = self.href();
        if current_path == href {
            return true;
        }
        let theme_root = if self.scope.is_root() {
            "/".to_string()
        } else {
            self.scope.read().to_string()
        };
        if href == theme_root {
            return false;
        }
        current_path.strip_prefix(&href).is_some_and(|rest| rest.starts_with('/'))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
