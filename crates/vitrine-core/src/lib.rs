#![forbid(unsafe_code)]

//! Core primitives for Vitrine.
//!
//! Vitrine is the infrastructure layer of a multi-theme portfolio
//! gallery: every theme renders the same content under its own URL
//! prefix, and this crate holds the pieces all of them share.
//!
//! # Role in Vitrine
//! `vitrine-core` defines the mount scope (which prefix a theme instance
//! lives under), navigation target classification, the router contract
//! the host must satisfy, pixel-space geometry for scroll tracking, and
//! the reactive value cell used for process-wide state such as the
//! active language.
//!
//! # How it fits in the system
//! Every other Vitrine crate depends on this one. It depends on nothing
//! but `tracing`, keeping the foundation reusable and testable without a
//! DOM, a router, or a renderer.

pub mod geometry;
pub mod mount;
pub mod reactive;
pub mod router;
pub mod target;

pub use geometry::SectionBox;
pub use mount::MountScope;
pub use reactive::{Subscription, Value};
pub use router::{MemoryRouter, NavOptions, Router};
pub use target::{NavRequest, NavTarget, RouteDescriptor};
