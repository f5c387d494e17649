#![forbid(unsafe_code)]

//! Navigation target classification.
//!
//! # Design
//!
//! A navigation destination arrives either as a literal string (href) or
//! as a structured [`RouteDescriptor`] the router has already scoped.
//! The single rule everything downstream relies on: a *string* target
//! starting with `/` is absolute-from-theme-root and must be rewritten
//! with the active base path exactly once; every other form — relative
//! path, same-page hash anchor, external URL, descriptor — passes
//! through unmodified. Descriptors are assumed already resolved, which
//! is what makes the rewrite impossible to apply twice.
//!
//! [`NavRequest`] extends the target with integer history deltas for the
//! programmatic navigator (`go(-1)` and friends); those operate on
//! existing, already-resolved history entries and are never rewritten.

/// A structured route descriptor, already scoped by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Route path.
    pub path: String,
    /// Optional query string, without the leading `?`.
    pub query: Option<String>,
    /// Optional fragment, without the leading `#`.
    pub hash: Option<String>,
}

impl RouteDescriptor {
    /// Descriptor with only a path.
    #[must_use]
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
            hash: None,
        }
    }

    /// Render the descriptor as an href string.
    #[must_use]
    pub fn to_href(&self) -> String {
        let mut href = self.path.clone();
        if let Some(query) = &self.query {
            href.push('?');
            href.push_str(query);
        }
        if let Some(hash) = &self.hash {
            href.push('#');
            href.push_str(hash);
        }
        href
    }
}

/// A navigation destination: literal string or resolved descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// A literal href. Absolute (`/...`) strings get base-path rewriting;
    /// everything else passes through.
    Href(String),
    /// A router-scoped descriptor. Never rewritten.
    Descriptor(RouteDescriptor),
}

impl NavTarget {
    /// Whether this target is an absolute string path (subject to
    /// base-path rewriting).
    #[must_use]
    pub fn is_absolute_href(&self) -> bool {
        matches!(self, Self::Href(href) if href.starts_with('/'))
    }
}

impl From<&str> for NavTarget {
    fn from(href: &str) -> Self {
        Self::Href(href.to_string())
    }
}

impl From<String> for NavTarget {
    fn from(href: String) -> Self {
        Self::Href(href)
    }
}

impl From<RouteDescriptor> for NavTarget {
    fn from(descriptor: RouteDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

/// Input to the programmatic navigator: a destination or a history move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRequest {
    /// Navigate to a destination (base-path rule applies to absolute hrefs).
    Target(NavTarget),
    /// Move N steps in navigation history; negative goes back.
    /// Forwarded to the router untouched.
    History(i32),
}

impl From<NavTarget> for NavRequest {
    fn from(target: NavTarget) -> Self {
        Self::Target(target)
    }
}

impl From<&str> for NavRequest {
    fn from(href: &str) -> Self {
        Self::Target(href.into())
    }
}

impl From<String> for NavRequest {
    fn from(href: String) -> Self {
        Self::Target(href.into())
    }
}

impl From<RouteDescriptor> for NavRequest {
    fn from(descriptor: RouteDescriptor) -> Self {
        Self::Target(descriptor.into())
    }
}

impl From<i32> for NavRequest {
    fn from(delta: i32) -> Self {
        Self::History(delta)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
