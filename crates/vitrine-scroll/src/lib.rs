#![forbid(unsafe_code)]

//! Scroll-driven section tracking for Vitrine navigation bars.
//!
//! A single-page theme is a fixed ordered list of sections; as the
//! visitor scrolls, exactly one of them is "current" and the nav bar
//! highlights it. This crate computes that state, plus the companion
//! auto-hide signal for bars that collapse while scrolling down.
//!
//! # Design
//!
//! - [`SectionTracker`] is the scroll-driven variant: on each qualifying
//!   scroll event the host reads every section's bounding box and feeds
//!   them in; the first section in list order straddling a fixed
//!   viewport reference line wins. Deterministic under fast scrolling.
//! - [`IntersectionTracker`] is the observer-driven variant some themes
//!   use: sections report band intersection independently and the most
//!   recent report wins. Ties break by event arrival order, not document
//!   order — a weaker guarantee, kept as a deliberate per-theme choice.
//! - [`NavVisibility`] is the auto-hide signal, a pure function of the
//!   previous and current scroll offsets.
//! - [`ScrollCoalescer`] batches high-frequency scroll samples so state
//!   advances once per frame tick.
//!
//! The crate owns no DOM access and registers no listeners: the host
//! registers exactly one scroll/resize handler per nav-bar mount,
//! releases it on unmount, and forwards events here. Re-render wiring
//! uses the reactive cells from `vitrine-core`, so subscriptions are
//! RAII guards released on all exit paths.

pub mod autohide;
pub mod coalescer;
pub mod intersection;
pub mod tracker;

pub use autohide::{AutoHideConfig, NavVisibility};
pub use coalescer::ScrollCoalescer;
pub use intersection::{BandConfig, IntersectionTracker};
pub use tracker::{SectionTracker, TrackerConfig};
