#![forbid(unsafe_code)]

//! Theme contract and gateway registry for Vitrine.
//!
//! Fifteen-odd visually distinct skins share one structural contract:
//! each declares an identity, a mount prefix, and an ordered section
//! list, and resolves its nav labels through the shared content
//! resolver. This crate defines that contract as a small trait rather
//! than one parameterized mega-component, so every skin stays an
//! independent concrete type.
//!
//! # How it fits in the system
//! The gateway (the gallery of all themes) holds a [`ThemeRegistry`]
//! mapping URL prefixes to themes; the gateway itself mounts no base
//! path. Individual themes use the trait's helpers to build their mount
//! scope, links, and section tracker from the manifest.

pub mod registry;
pub mod theme;

pub use registry::{ThemeMatch, ThemeRegistry};
pub use theme::{Theme, ThemeManifest};
