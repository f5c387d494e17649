#![forbid(unsafe_code)]

//! The router contract and an in-memory test double.
//!
//! # Design
//!
//! Vitrine does not own navigation. The host supplies a router — a
//! browser history wrapper, a framework router, or the in-memory double
//! below — and Vitrine hands it *already resolved* destinations.
//! Sequencing of the actual transition belongs to the router; from the
//! caller's perspective navigation is fire-and-forget.
//!
//! [`MemoryRouter`] keeps a history vector plus an index, which is
//! enough to test prefix rewriting and history-delta forwarding without
//! a browser.

/// Options forwarded with a navigation, uninterpreted by Vitrine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavOptions {
    /// Options requesting history replacement.
    #[must_use]
    pub const fn replace() -> Self {
        Self { replace: true }
    }
}

/// The navigation surface the host must provide.
pub trait Router {
    /// Navigate to a resolved href. `options` pass through from the
    /// caller; their semantics are the router's business.
    fn push(&mut self, href: &str, options: NavOptions);

    /// Move N steps in navigation history; negative goes back.
    /// Out-of-range deltas are the router's to clamp or ignore.
    fn go(&mut self, delta: i32);
}

/// In-memory router: a history vector and a cursor.
///
/// Starts with a single root entry, matching a fresh browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRouter {
    entries: Vec<String>,
    index: usize,
}

impl MemoryRouter {
    /// Router with a single `/` entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec!["/".to_string()],
            index: 0,
        }
    }

    /// The href of the current history entry.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// All history entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Router for MemoryRouter {
    fn push(&mut self, href: &str, options: NavOptions) {
        if options.replace {
            self.entries[self.index] = href.to_string();
            return;
        }
        // Pushing severs any forward history, as a browser does.
        self.entries.truncate(self.index + 1);
        self.entries.push(href.to_string());
        self.index += 1;
    }

    fn go(&mut self, delta: i32) {
        let target = self.index as i64 + i64::from(delta);
        let clamped = target.clamp(0, self.entries.len() as i64 - 1);
        self.index = clamped as usize;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
