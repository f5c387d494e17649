#![forbid(unsafe_code)]

//! Imperative, prefix-aware navigation.
//!
//! # Design
//!
//! The counterpart of [`link`](crate::link) for code that runs outside a
//! render pass — click handlers, effects, timers. A [`Navigator`] holds
//! a mount scope and a shared handle to the host router; clones of the
//! navigator are moved into closures, matching the single-threaded
//! event-loop model.
//!
//! Destination computation is this module's only job: integer history
//! moves are forwarded untouched (history entries are already resolved),
//! string targets get the same exactly-once rewrite as links, and
//! options pass through uninterpreted. Navigation is fire-and-forget;
//! transition sequencing belongs to the router.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use vitrine_core::{MountScope, NavOptions, NavRequest, Router};

use crate::link::resolve_href;

/// Imperative navigation handle for one theme instance.
#[derive(Debug)]
pub struct Navigator<R: Router> {
    scope: MountScope,
    router: Rc<RefCell<R>>,
}

// Manual Clone: `R` itself need not be Clone.
impl<R: Router> Clone for Navigator<R> {
    fn clone(&self) -> Self {
        Self {
            scope: self.scope.clone(),
            router: Rc::clone(&self.router),
        }
    }
}

impl<R: Router> Navigator<R> {
    /// Bind a navigator to a theme scope and the host router.
    #[must_use]
    pub fn new(scope: MountScope, router: Rc<RefCell<R>>) -> Self {
        Self { scope, router }
    }

    /// Navigate to a destination or move through history.
    pub fn navigate(&self, request: impl Into<NavRequest>, options: NavOptions) {
        match request.into() {
            NavRequest::History(delta) => {
                debug!(delta, "history move");
                self.router.borrow_mut().go(delta);
            }
            NavRequest::Target(target) => {
                let href = resolve_href(&self.scope, &target);
                debug!(href = %href, replace = options.replace, "navigate");
                self.router.borrow_mut().push(&href, options);
            }
        }
    }

    /// Navigate to a destination with default options.
    pub fn push(&self, target: impl Into<NavRequest>) {
        self.navigate(target, NavOptions::default());
    }

    /// Move one step back in history.
    pub fn back(&self) {
        self.navigate(NavRequest::History(-1), NavOptions::default());
    }

    /// Move one step forward in history.
    pub fn forward(&self) {
        self.navigate(NavRequest::History(1), NavOptions::default());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vitrine_core::MemoryRouter;

    fn navigator(base: &str) -> (Navigator<MemoryRouter>, Rc<RefCell<MemoryRouter>>) {
        let router = Rc::new(RefCell::new(MemoryRouter::new()));
        let nav = Navigator::new(MountScope::establish(base), Rc::clone(&router));
        (nav, router)
    }

    #[test]
    fn absolute_target_is_prefixed() {
        let (nav, router) = navigator("/v10");
        nav.push("/portfolio/oreo");
        assert_eq!(router.borrow().current(), "/v10/portfolio/oreo");
    }

    #[test]
    fn root_scope_passes_target_through() {
        let (nav, router) = navigator("");
        nav.push("/portfolio/oreo");
        assert_eq!(router.borrow().current(), "/portfolio/oreo");
    }

    #[test]
    fn relative_target_not_rewritten() {
        let (nav, router) = navigator("/v10");
        nav.push("gallery");
        assert_eq!(router.borrow().current(), "gallery");
    }

    #[test]
    fn history_delta_bypasses_rewrite() {
        let (nav, router) = navigator("/v10");
        nav.push("/a");
        nav.push("/b");
        nav.back();
        assert_eq!(router.borrow().current(), "/v10/a");
        nav.forward();
        assert_eq!(router.borrow().current(), "/v10/b");
    }

    #[test]
    fn replace_option_passes_through() {
        let (nav, router) = navigator("/v10");
        nav.push("/a");
        nav.navigate("/b", NavOptions::replace());
        assert_eq!(router.borrow().current(), "/v10/b");
        // Replace did not grow history: back lands on the root entry.
        nav.back();
        assert_eq!(router.borrow().current(), "/");
    }

    #[test]
    fn clones_drive_the_same_router() {
        let (nav, router) = navigator("/v2");
        let handler = nav.clone();
        handler.push("/contact");
        assert_eq!(router.borrow().current(), "/v2/contact");
    }
}
