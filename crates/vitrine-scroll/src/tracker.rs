#![forbid(unsafe_code)]

//! Scroll-driven active-section tracking.
//!
//! # Design
//!
//! The tracker holds a fixed ordered list of section identifiers, set by
//! the nav bar at construction. On every qualifying scroll event the
//! host measures each section's vertical bounding box (a handful of
//! cheap layout reads) and feeds the boxes in; the tracker projects a
//! reference line at a fixed fraction of the viewport height and the
//! first section in list order whose box straddles it
//! (`top <= line < bottom`) becomes active.
//!
//! # Invariants
//!
//! 1. The active section starts as the first section and is never "none".
//! 2. When no box straddles the reference line, the previous active
//!    section is retained — no flicker between sections.
//! 3. Under a monotonically increasing scroll sequence, the active index
//!    is non-decreasing in document order.
//!
//! The active identifier is exposed through a reactive cell so the nav
//! bar re-renders via a [`Subscription`] guard dropped on unmount.

use tracing::trace;
use vitrine_core::{SectionBox, Subscription, Value};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tuning knobs for section tracking.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Position of the reference line as a fraction of viewport height,
    /// measured from the top. One-third matches most themes.
    pub reference_fraction: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            reference_fraction: 1.0 / 3.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

/// Scroll-driven tracker over a fixed ordered section list.
#[derive(Debug)]
pub struct SectionTracker {
    sections: Vec<String>,
    config: TrackerConfig,
    /// Index into `sections` of the active section.
    active_index: usize,
    /// Reactive mirror of the active identifier, for nav-bar wiring.
    active: Value<String>,
}

impl SectionTracker {
    /// Create a tracker over an ordered, non-empty section list.
    ///
    /// The first section starts active.
    #[must_use]
    pub fn new(sections: Vec<String>, config: TrackerConfig) -> Self {
        debug_assert!(!sections.is_empty(), "section list must not be empty");
        let active = Value::new(sections.first().cloned().unwrap_or_default());
        Self {
            sections,
            config,
            active_index: 0,
            active,
        }
    }

    /// Tracker with default configuration.
    #[must_use]
    pub fn with_defaults(sections: Vec<String>) -> Self {
        Self::new(sections, TrackerConfig::default())
    }

    /// The ordered section list.
    #[must_use]
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// The currently active section identifier.
    #[must_use]
    pub fn active(&self) -> String {
        self.active.get()
    }

    /// Index of the currently active section in list order.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Subscribe to active-section changes. Dropping the guard
    /// unsubscribes; hold it for the lifetime of the nav bar.
    pub fn subscribe(&self, callback: impl Fn(&String) + 'static) -> Subscription {
        self.active.subscribe(callback)
    }

    /// Feed one qualifying scroll (or resize) event.
    ///
    /// `boxes` holds the current bounding box per section, parallel to
    /// the section list; `None` marks a section whose element is not in
    /// the document right now. Returns the active identifier after the
    /// update.
    pub fn on_scroll(&mut self, viewport_height: f64, boxes: &[Option<SectionBox>]) -> String {
        debug_assert_eq!(
            boxes.len(),
            self.sections.len(),
            "one box per section, in list order"
        );

        let line = viewport_height * self.config.reference_fraction;
        let straddling = self
            .sections
            .iter()
            .zip(boxes)
            .position(|(_, b)| b.is_some_and(|b| b.straddles(line)));

        if let Some(index) = straddling {
            if index != self.active_index {
                trace!(
                    from = %self.sections[self.active_index],
                    to = %self.sections[index],
                    "active section changed"
                );
            }
            self.active_index = index;
            self.active.set(self.sections[index].clone());
        }
        // No straddle: retain the previous active section.
        self.active.get()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sections(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    /// Boxes for sections stacked contiguously from `first_top`, each
    /// `height` tall.
    fn stacked(first_top: f64, height: f64, count: usize) -> Vec<Option<SectionBox>> {
        (0..count)
            .map(|i| {
                let top = first_top + height * i as f64;
                Some(SectionBox::new(top, top + height))
            })
            .collect()
    }

    // -- Construction --

    #[test]
    fn first_section_starts_active() {
        let tracker = SectionTracker::with_defaults(sections(&["hero", "about", "contact"]));
        assert_eq!(tracker.active(), "hero");
        assert_eq!(tracker.active_index(), 0);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn empty_section_list_panics() {
        let _ = SectionTracker::with_defaults(Vec::new());
    }

    // -- Straddle rule --

    #[test]
    fn straddling_section_becomes_active() {
        let mut tracker = SectionTracker::with_defaults(sections(&["hero", "about"]));
        // Viewport 900 → reference line at 300. "about" spans 50..800.
        let boxes = vec![
            Some(SectionBox::new(-700.0, 50.0)),
            Some(SectionBox::new(50.0, 800.0)),
        ];
        assert_eq!(tracker.on_scroll(900.0, &boxes), "about");
    }

    #[test]
    fn first_in_list_order_wins_among_straddlers() {
        // Overlapping sections can both straddle the line; list order
        // breaks the tie deterministically.
        let mut tracker = SectionTracker::with_defaults(sections(&["a", "b"]));
        let boxes = vec![
            Some(SectionBox::new(0.0, 600.0)),
            Some(SectionBox::new(100.0, 700.0)),
        ];
        assert_eq!(tracker.on_scroll(900.0, &boxes), "a");
    }

    #[test]
    fn no_straddle_retains_previous() {
        let mut tracker = SectionTracker::with_defaults(sections(&["hero", "about"]));
        let boxes = stacked(0.0, 400.0, 2);
        tracker.on_scroll(900.0, &boxes); // line 300 inside "hero"
        assert_eq!(tracker.active(), "hero");

        // Everything scrolled far above the line: gap under the cursor.
        let gap = vec![
            Some(SectionBox::new(-900.0, -500.0)),
            Some(SectionBox::new(-500.0, -100.0)),
        ];
        assert_eq!(tracker.on_scroll(900.0, &gap), "hero");
    }

    #[test]
    fn missing_elements_are_skipped() {
        let mut tracker = SectionTracker::with_defaults(sections(&["hero", "about"]));
        let boxes = vec![None, Some(SectionBox::new(0.0, 600.0))];
        assert_eq!(tracker.on_scroll(900.0, &boxes), "about");
    }

    // -- Scroll sweep --

    #[test]
    fn forward_sweep_visits_sections_in_order() {
        let names = sections(&["hero", "work", "about", "contact"]);
        let mut tracker = SectionTracker::with_defaults(names);
        let height = 800.0;
        let viewport = 900.0;

        let mut visited = Vec::new();
        // Scroll from 0 to past the last section in 50px steps.
        let mut scroll_y = 0.0;
        while scroll_y < height * 4.0 {
            let boxes = stacked(-scroll_y, height, 4);
            let active = tracker.on_scroll(viewport, &boxes);
            if visited.last() != Some(&active) {
                visited.push(active);
            }
            scroll_y += 50.0;
        }
        assert_eq!(visited, vec!["hero", "work", "about", "contact"]);
    }

    #[test]
    fn scrolling_back_up_reactivates_earlier_section() {
        let mut tracker = SectionTracker::with_defaults(sections(&["hero", "about"]));
        let height = 800.0;

        tracker.on_scroll(900.0, &stacked(-800.0, height, 2));
        assert_eq!(tracker.active(), "about");

        tracker.on_scroll(900.0, &stacked(0.0, height, 2));
        assert_eq!(tracker.active(), "hero");
    }

    // -- Reference line configuration --

    #[test]
    fn reference_fraction_moves_the_line() {
        let config = TrackerConfig {
            reference_fraction: 0.5,
        };
        let mut tracker = SectionTracker::new(sections(&["a", "b"]), config);
        // Line at 450. "a" spans 0..400, "b" spans 400..900.
        let boxes = stacked(0.0, 400.0, 2);
        assert_eq!(tracker.on_scroll(900.0, &boxes), "b");
    }

    // -- Reactive wiring --

    #[test]
    fn subscription_sees_changes_and_stops_on_drop() {
        let mut tracker = SectionTracker::with_defaults(sections(&["hero", "about"]));
        let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let log_clone = Rc::clone(&log);
        let sub = tracker.subscribe(move |id| log_clone.borrow_mut().push(id.clone()));

        tracker.on_scroll(900.0, &stacked(-800.0, 800.0, 2));
        assert_eq!(*log.borrow(), vec!["about".to_string()]);

        drop(sub);
        tracker.on_scroll(900.0, &stacked(0.0, 800.0, 2));
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(tracker.active(), "hero");
    }

    #[test]
    fn repeated_same_active_does_not_renotify() {
        let mut tracker = SectionTracker::with_defaults(sections(&["hero", "about"]));
        let hits = Rc::new(RefCell::new(0u32));
        let hits_clone = Rc::clone(&hits);
        let _sub = tracker.subscribe(move |_| *hits_clone.borrow_mut() += 1);

        let boxes = stacked(-800.0, 800.0, 2);
        tracker.on_scroll(900.0, &boxes);
        tracker.on_scroll(900.0, &boxes);
        tracker.on_scroll(900.0, &boxes);
        assert_eq!(*hits.borrow(), 1);
    }
}
