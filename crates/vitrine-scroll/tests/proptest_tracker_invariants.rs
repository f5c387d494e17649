//! Property-based invariant tests for section tracking.
//!
//! Verifies the ordering and stability guarantees:
//!
//! 1. The active section is always a member of the section list
//! 2. A monotonically increasing scroll sequence yields a non-decreasing
//!    active index (no backward jump while scrolling strictly forward)
//! 3. With no straddling box the active section never changes
//! 4. The auto-hide signal is visible at the top for any scroll history
//! 5. Upward movement always reveals the bar

use proptest::prelude::*;
use vitrine_core::SectionBox;
use vitrine_scroll::{AutoHideConfig, NavVisibility, SectionTracker};

/// Boxes for sections stacked contiguously in document order, shifted up
/// by `scroll_y`.
fn stacked(scroll_y: f64, height: f64, count: usize) -> Vec<Option<SectionBox>> {
    (0..count)
        .map(|i| {
            let top = height * i as f64 - scroll_y;
            Some(SectionBox::new(top, top + height))
        })
        .collect()
}

fn section_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("section-{i}")).collect()
}

proptest! {
    // 1 + 2: membership and monotonicity under forward scrolling.
    #[test]
    fn forward_scroll_active_index_non_decreasing(
        count in 2usize..6,
        height in 300.0f64..1200.0,
        viewport in 400.0f64..1100.0,
        steps in prop::collection::vec(1.0f64..400.0, 1..40),
    ) {
        let mut tracker = SectionTracker::with_defaults(section_names(count));
        let mut scroll_y = 0.0;
        let mut last_index = tracker.active_index();

        for step in steps {
            scroll_y += step;
            let active = tracker.on_scroll(viewport, &stacked(scroll_y, height, count));
            prop_assert!(tracker.sections().contains(&active));
            prop_assert!(
                tracker.active_index() >= last_index,
                "active index moved backwards under forward scroll: {} -> {}",
                last_index,
                tracker.active_index()
            );
            last_index = tracker.active_index();
        }
    }

    // 3: stability when nothing straddles the reference line.
    #[test]
    fn gap_retains_active(
        count in 1usize..5,
        viewport in 400.0f64..1100.0,
        gap_offset in 2000.0f64..9000.0,
    ) {
        let mut tracker = SectionTracker::with_defaults(section_names(count));
        let before = tracker.active();
        // All boxes far above the viewport: no straddle possible.
        let boxes: Vec<_> = (0..count)
            .map(|i| Some(SectionBox::new(
                -gap_offset - 100.0 * i as f64,
                -gap_offset - 100.0 * i as f64 + 50.0,
            )))
            .collect();
        let after = tracker.on_scroll(viewport, &boxes);
        prop_assert_eq!(before, after);
    }

    // 4: near the top the bar is visible whatever came before.
    #[test]
    fn visible_at_top_regardless_of_history(
        offsets in prop::collection::vec(0.0f64..3000.0, 0..30),
    ) {
        let mut vis = NavVisibility::with_defaults();
        for offset in offsets {
            vis.on_scroll(offset);
        }
        prop_assert!(vis.on_scroll(0.0));
    }

    // 5: any upward movement reveals.
    #[test]
    fn upward_movement_reveals(
        start in 200.0f64..3000.0,
        delta in 1.0f64..150.0,
    ) {
        let mut vis = NavVisibility::new(AutoHideConfig::default());
        vis.on_scroll(start);
        prop_assert!(vis.on_scroll(start - delta));
    }
}
