#![forbid(unsafe_code)]

//! Observer-driven active-section tracking.
//!
//! # Design
//!
//! The variant some themes use instead of the scroll-driven
//! [`SectionTracker`](crate::tracker::SectionTracker): each section
//! element is observed independently and reports whether it currently
//! intersects a qualifying viewport band. Whichever section most
//! recently reported "intersecting" becomes active.
//!
//! Ties under fast scrolling break by *event arrival order*, not
//! document order — a weaker ordering guarantee than the scroll-driven
//! tracker. Both variants ship because themes were tuned against both
//! behaviors; prefer [`SectionTracker`](crate::tracker::SectionTracker)
//! for new work.

use tracing::trace;
use vitrine_core::{SectionBox, Subscription, Value};

/// Qualifying viewport band for the observer variant, as fractions of
/// viewport height.
#[derive(Debug, Clone)]
pub struct BandConfig {
    /// Top of the band, fraction of viewport height.
    pub band_top: f64,
    /// Bottom of the band, fraction of viewport height.
    pub band_bottom: f64,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            band_top: 0.2,
            band_bottom: 0.6,
        }
    }
}

/// Arrival-order tracker over independently observed sections.
#[derive(Debug)]
pub struct IntersectionTracker {
    sections: Vec<String>,
    config: BandConfig,
    active: Value<String>,
}

impl IntersectionTracker {
    /// Create a tracker over an ordered, non-empty section list.
    /// The first section starts active.
    #[must_use]
    pub fn new(sections: Vec<String>, config: BandConfig) -> Self {
        debug_assert!(!sections.is_empty(), "section list must not be empty");
        let active = Value::new(sections.first().cloned().unwrap_or_default());
        Self {
            sections,
            config,
            active,
        }
    }

    /// Tracker with the default band.
    #[must_use]
    pub fn with_defaults(sections: Vec<String>) -> Self {
        Self::new(sections, BandConfig::default())
    }

    /// The currently active section identifier.
    #[must_use]
    pub fn active(&self) -> String {
        self.active.get()
    }

    /// Subscribe to active-section changes. Dropping the guard
    /// unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(&String) + 'static) -> Subscription {
        self.active.subscribe(callback)
    }

    /// Feed one observation for a section: its current box and the
    /// viewport height. If the box intersects the qualifying band the
    /// section becomes active; otherwise the previous active section is
    /// retained. Observations for unknown identifiers are ignored.
    pub fn on_observation(
        &mut self,
        section_id: &str,
        section_box: SectionBox,
        viewport_height: f64,
    ) -> String {
        if !self.sections.iter().any(|s| s == section_id) {
            trace!(section_id, "observation for unknown section ignored");
            return self.active.get();
        }

        let band_top = viewport_height * self.config.band_top;
        let band_bottom = viewport_height * self.config.band_bottom;
        if section_box.intersects_band(band_top, band_bottom) {
            self.active.set(section_id.to_string());
        }
        self.active.get()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
