#![forbid(unsafe_code)]

//! Shared reactive value with change notification.
//!
//! # Design
//!
//! [`Value<T>`] wraps a value in shared, reference-counted storage
//! (`Rc<RefCell<..>>`). When the value changes (determined by
//! `PartialEq`), all live subscribers are notified in registration
//! order, synchronously, on the same event-loop turn. This is the
//! mechanism behind process-wide state with a simple lifecycle — most
//! prominently the active language, which every localized component
//! observes without prop-drilling.
//!
//! The model is single-threaded cooperative: writes are plain
//! single-value assignments on the host event loop, so "last write wins"
//! needs no locking.
//!
//! # Invariants
//!
//! 1. `version` increments by exactly 1 on each value-changing mutation.
//! 2. `set(v)` where `v == current` is a no-op (no notification).
//! 3. Subscribers are notified in registration order.
//! 4. Dead subscribers (dropped [`Subscription`] guards) are pruned
//!    lazily on the next notification.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::trace;

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct ValueInner<T> {
    value: T,
    version: u64,
    /// Subscribers stored as weak references; dead entries are pruned on notify.
    subscribers: Vec<CallbackWeak<T>>,
}

/// A shared, version-tracked value with change notification.
///
/// Cloning a `Value` creates a new handle to the **same** inner state —
/// both handles see the same value and share subscribers.
pub struct Value<T> {
    inner: Rc<RefCell<ValueInner<T>>>,
}

// Manual Clone: shares the same Rc.
impl<T> Clone for Value<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Value")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Value<T> {
    /// Create a new shared value. Version starts at 0, no subscribers.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ValueInner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Access the current value by reference without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Set a new value. If it differs from the current value (by
    /// `PartialEq`), the version is incremented and all live subscribers
    /// are notified before this call returns.
    pub fn set(&self, value: T) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
            true
        };
        if changed {
            self.notify();
        }
    }

    /// Current version number. Increments by 1 on each value-changing
    /// mutation; useful for dirty-checking in render passes.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of registered subscribers, including dead ones not yet
    /// pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Subscribe to value changes. The callback receives the new value
    /// each time it changes.
    ///
    /// Returns a [`Subscription`] guard; dropping the guard unsubscribes
    /// the callback.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().subscribers.push(weak);
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Notify live subscribers and prune dead ones.
    fn notify(&self) {
        // Collect live callbacks first so the borrow is not held during calls.
        let callbacks: Vec<CallbackRc<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner
                .subscribers
                .iter()
                .filter_map(|w| w.upgrade())
                .collect()
        };

        if callbacks.is_empty() {
            return;
        }

        let value = self.inner.borrow().value.clone();
        trace!(
            subscribers = callbacks.len(),
            version = self.version(),
            "value change notification"
        );
        for cb in &callbacks {
            cb(&value);
        }
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping the `Subscription` makes the callback unreachable; the weak
/// entry in the subscriber list fails to upgrade on the next
/// notification and is pruned there.
pub struct Subscription {
    /// Type-erased strong reference keeping the callback `Rc` alive.
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // -- Value semantics --

    #[test]
    fn tracks_the_active_section() {
        let active = Value::new("hero".to_string());
        assert_eq!(active.get(), "hero");
        assert_eq!(active.version(), 0);

        active.set("work".to_string());
        assert_eq!(active.get(), "work");
        assert_eq!(active.version(), 1);
    }

    #[test]
    fn reselecting_the_current_language_is_silent() {
        let lang = Value::new("en");
        let hits = Rc::new(Cell::new(0u32));
        let hits_clone = Rc::clone(&hits);
        let _sub = lang.subscribe(move |_| hits_clone.set(hits_clone.get() + 1));

        lang.set("en");
        assert_eq!(lang.version(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn with_reads_without_cloning() {
        let sections = Value::new(vec!["hero".to_string(), "work".to_string()]);
        assert_eq!(sections.with(Vec::len), 2);
        assert!(sections.with(|s| s.iter().any(|id| id == "work")));
    }

    #[test]
    fn version_counts_only_real_changes() {
        // A scroll sweep keeps re-reporting the current section; only
        // genuine transitions may bump the version.
        let active = Value::new("hero");
        for id in ["hero", "work", "work", "about", "about", "about"] {
            active.set(id);
        }
        assert_eq!(active.version(), 2);
        assert_eq!(active.get(), "about");
    }

    // -- Notification --

    #[test]
    fn guard_spans_repeated_language_switches() {
        let lang = Value::new("en");
        let seen: Rc<RefCell<Vec<&str>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        let sub = lang.subscribe(move |l| seen_clone.borrow_mut().push(*l));

        lang.set("it");
        lang.set("en");
        assert_eq!(*seen.borrow(), vec!["it", "en"]);

        // Switcher unmounts; further switches go unheard.
        drop(sub);
        lang.set("it");
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn nav_bar_hears_changes_before_later_subscribers() {
        let active = Value::new("hero");
        let log: Rc<RefCell<Vec<&str>>> = Rc::new(RefCell::new(Vec::new()));

        let bar = Rc::clone(&log);
        let _bar_sub = active.subscribe(move |_| bar.borrow_mut().push("nav-bar"));
        let hook = Rc::clone(&log);
        let _hook_sub = active.subscribe(move |_| hook.borrow_mut().push("analytics"));

        active.set("work");
        assert_eq!(*log.borrow(), vec!["nav-bar", "analytics"]);
    }

    #[test]
    fn subscribing_during_notification_sees_the_next_change() {
        // A component mounted in reaction to a change must not be
        // notified for the change that mounted it.
        let active = Value::new("hero");
        let late_guard = Rc::new(RefCell::new(None));
        let late_hits = Rc::new(Cell::new(0u32));

        let handle = active.clone();
        let guard_slot = Rc::clone(&late_guard);
        let hits = Rc::clone(&late_hits);
        let _mount = active.subscribe(move |_| {
            if guard_slot.borrow().is_none() {
                let hits = Rc::clone(&hits);
                let guard = handle.subscribe(move |_| hits.set(hits.get() + 1));
                *guard_slot.borrow_mut() = Some(guard);
            }
        });

        active.set("work");
        assert_eq!(late_hits.get(), 0);

        active.set("contact");
        assert_eq!(late_hits.get(), 1);
    }

    // -- Handle sharing and pruning --

    #[test]
    fn clones_share_one_language_state() {
        let root = Value::new("en");
        let switcher = root.clone();

        switcher.set("it");
        assert_eq!(root.get(), "it");
        assert_eq!(root.version(), 1);

        root.set("en");
        assert_eq!(switcher.get(), "en");
        assert_eq!(switcher.version(), 2);
    }

    #[test]
    fn dead_guards_are_pruned_on_the_next_notification() {
        let visible = Value::new(true);
        let _held = visible.subscribe(|_| {});
        let dropped = visible.subscribe(|_| {});
        assert_eq!(visible.subscriber_count(), 2);

        // Dropping defers pruning to the next notification.
        drop(dropped);
        assert_eq!(visible.subscriber_count(), 2);

        visible.set(false);
        assert_eq!(visible.subscriber_count(), 1);
    }
}
