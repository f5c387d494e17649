#![forbid(unsafe_code)]

//! Theme mount scope: the base path a theme instance is mounted under.
//!
//! # Design
//!
//! A theme is mounted under exactly one URL prefix (its *base path*),
//! established once when the theme root comes up and immutable for the
//! lifetime of that instance. [`MountScope`] is a cheaply clonable
//! read-only handle to that value: the theme root calls
//! [`MountScope::establish`] and hands clones down to whatever needs to
//! build links (in practice a handful of navigation components; most of
//! the tree never looks at it).
//!
//! A scope is an injected value, not a singleton: two theme instances in
//! the same process hold two independent scopes, and a component under
//! test can be given a fake scope without any global setup.
//!
//! # Invariants
//!
//! 1. A base path is either empty (root-mounted) or starts with `/` and
//!    has no trailing slash (e.g. `/v10`).
//! 2. The value never changes after `establish`.
//! 3. Reading is total: a component without an enclosing scope uses
//!    [`MountScope::root`] and behaves as root-mounted.

use std::rc::Rc;
use tracing::debug;

/// Read-only handle to the base path of one theme instance.
///
/// Cloning the handle shares the same underlying value; clones are the
/// intended way to propagate the scope down a component tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountScope {
    base_path: Rc<str>,
}

impl MountScope {
    /// Establish the scope for a theme instance.
    ///
    /// Called once at the theme root with a constant such as `"/v10"`,
    /// or `""` for a root deployment. Malformed input (missing leading
    /// slash, trailing slash) is an integration error; it is stored
    /// verbatim and only flagged in debug builds.
    #[must_use]
    pub fn establish(base_path: &str) -> Self {
        debug_assert!(
            base_path.is_empty() || (base_path.starts_with('/') && !base_path.ends_with('/')),
            "base path must be empty or a /-prefixed segment without trailing slash, got {base_path:?}"
        );
        debug!(base_path, "mount scope established");
        Self {
            base_path: Rc::from(base_path),
        }
    }

    /// The root (un-prefixed) scope.
    ///
    /// Used for root deployments and as the default for components
    /// rendered outside any theme, which then behave as root-mounted.
    #[must_use]
    pub fn root() -> Self {
        Self {
            base_path: Rc::from(""),
        }
    }

    /// Read the base path. Total: never blocks, never fails.
    #[must_use]
    pub fn read(&self) -> &str {
        &self.base_path
    }

    /// Whether this scope is root-mounted (empty base path).
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.base_path.is_empty()
    }
}

impl Default for MountScope {
    fn default() -> Self {
        Self::root()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn establish_and_read() {
        let scope = MountScope::establish("/v10");
        assert_eq!(scope.read(), "/v10");
        assert!(!scope.is_root());
    }

    #[test]
    fn root_scope_is_empty() {
        let scope = MountScope::root();
        assert_eq!(scope.read(), "");
        assert!(scope.is_root());
    }

    #[test]
    fn default_is_root() {
        assert_eq!(MountScope::default(), MountScope::root());
    }

    #[test]
    fn empty_establish_is_root() {
        let scope = MountScope::establish("");
        assert!(scope.is_root());
    }

    #[test]
    fn clones_share_value() {
        let scope = MountScope::establish("/v3");
        let clone = scope.clone();
        assert_eq!(clone.read(), "/v3");
        assert_eq!(scope, clone);
    }

    #[test]
    fn two_instances_are_independent() {
        let a = MountScope::establish("/v1");
        let b = MountScope::establish("/v2");
        assert_eq!(a.read(), "/v1");
        assert_eq!(b.read(), "/v2");
    }
}
