#![forbid(unsafe_code)]

//! Per-frame scroll event coalescing.
//!
//! High-frequency trackpad scrolling can deliver many events between
//! frames. The coalescer keeps only the latest offset sample (scroll
//! position is absolute, so intermediate samples carry no information)
//! and counts how many were folded, so the tracker advances once per
//! frame tick.

/// Accumulates scroll offset samples within a single frame.
#[derive(Debug, Clone, Default)]
pub struct ScrollCoalescer {
    /// Latest sampled offset this frame, if any.
    latest: Option<f64>,
    /// Number of events coalesced this frame.
    event_count: u32,
}

impl ScrollCoalescer {
    /// Create a new coalescer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a scroll offset sample. Call this for every scroll event
    /// received.
    pub fn push(&mut self, offset: f64) {
        self.latest = Some(offset);
        self.event_count += 1;
    }

    /// Drain the latest sample and reset for the next frame.
    ///
    /// Returns `(latest_offset, event_count)`, or `None` when no event
    /// arrived since the last drain.
    pub fn drain(&mut self) -> Option<(f64, u32)> {
        let result = self.latest.take().map(|offset| (offset, self.event_count));
        self.event_count = 0;
        result
    }

    /// Whether any events were accumulated since the last drain.
    #[must_use]
    pub fn has_events(&self) -> bool {
        self.event_count > 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
