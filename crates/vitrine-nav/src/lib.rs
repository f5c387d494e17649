#![forbid(unsafe_code)]

//! Prefix-aware navigation for Vitrine themes.
//!
//! A theme is mounted under a base path (`/v10`) and writes its links as
//! if it were root-mounted (`/portfolio/oreo`). This crate owns the one
//! rewrite rule that makes that work, in two forms: declarative link
//! resolution ([`Link`]) and an imperative navigator for event handlers
//! and effects ([`Navigator`]).
//!
//! # How it fits in the system
//! Sits on `vitrine-core` (mount scope, targets, router contract) and is
//! consumed by every theme's navigation bar. No DOM, no rendering: the
//! host hands resolved hrefs to its own link primitive.

pub mod link;
pub mod navigate;

pub use link::{resolve_href, Link};
pub use navigate::Navigator;
