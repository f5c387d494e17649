#![forbid(unsafe_code)]

//! Pixel-space geometry for scroll tracking.

/// The vertical extent of one page section, in viewport coordinates.
///
/// `top` may be negative once the section has scrolled past the top of
/// the viewport; the pair is exactly what a bounding-box query on the
/// section's element reports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionBox {
    /// Top edge (inclusive), pixels from the viewport top.
    pub top: f64,
    /// Bottom edge (exclusive), pixels from the viewport top.
    pub bottom: f64,
}

impl SectionBox {
    /// Create a new section box.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Height in pixels (zero for degenerate boxes).
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// Whether the box straddles a horizontal reference line:
    /// `top <= line < bottom`.
    #[inline]
    #[must_use]
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && line < self.bottom
    }

    /// Whether any part of the box lies inside the vertical band
    /// `band_top..band_bottom`.
    #[inline]
    #[must_use]
    pub fn intersects_band(&self, band_top: f64, band_bottom: f64) -> bool {
        self.top < band_bottom && self.bottom > band_top
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
