#![forbid(unsafe_code)]

//! Auto-hide signal for collapsing navigation bars.
//!
//! # Design
//!
//! The bar hides when the visitor scrolls downward past a minimum
//! offset and reappears on any upward scroll or near the top of the
//! page. The decision is a pure function of the previous offset, the
//! current offset, and the current offset magnitude — section identity
//! plays no part.

use vitrine_core::{Subscription, Value};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tuning knobs for the auto-hide signal.
#[derive(Debug, Clone)]
pub struct AutoHideConfig {
    /// Minimum scroll offset before downward scrolling hides the bar.
    pub hide_threshold: f64,
    /// Offsets at or below this count as "near the top": the bar is
    /// always visible there.
    pub top_slack: f64,
}

impl Default for AutoHideConfig {
    fn default() -> Self {
        Self {
            hide_threshold: 80.0,
            top_slack: 10.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Visibility state
// ---------------------------------------------------------------------------

/// Visibility state machine for one navigation bar.
///
/// Starts visible at offset zero. Feed it every qualifying scroll event
/// via [`on_scroll`](NavVisibility::on_scroll).
#[derive(Debug)]
pub struct NavVisibility {
    config: AutoHideConfig,
    previous_offset: f64,
    visible: Value<bool>,
}

impl NavVisibility {
    /// Visibility state with the given configuration.
    #[must_use]
    pub fn new(config: AutoHideConfig) -> Self {
        Self {
            config,
            previous_offset: 0.0,
            visible: Value::new(true),
        }
    }

    /// Visibility state with default thresholds.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(AutoHideConfig::default())
    }

    /// Whether the bar is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Subscribe to visibility changes. Dropping the guard unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(&bool) + 'static) -> Subscription {
        self.visible.subscribe(callback)
    }

    /// Feed one scroll event. Returns visibility after the update.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        // An unchanged offset (resize, duplicate sample) carries no
        // direction; the bar stays as it is.
        if offset == self.previous_offset {
            return self.visible.get();
        }
        let scrolling_down = offset > self.previous_offset;
        self.previous_offset = offset;

        let visible = if offset <= self.config.top_slack {
            true
        } else if scrolling_down {
            offset <= self.config.hide_threshold
        } else {
            // Upward scroll always reveals.
            true
        };
        self.visible.set(visible);
        visible
    }
}

impl Default for NavVisibility {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
