//! extract
//!
//! Single doorway to the project manifest and `coqdep`.
//!
//! # Architecture
//!
//! All knowledge of `_CoqProject` syntax and of coqdep's invocation and
//! output format lives here. The rest of the crate only ever sees
//! [`crate::core::graph::DependencyEdge`] values carrying dotted module
//! names with the manifest's path rewrites already applied.
//!
//! # Modules
//!
//! - [`manifest`] - `_CoqProject` parsing: rewrite rules, listed sources
//! - [`coqdep`] - coqdep invocation and output parsing

pub mod coqdep;
pub mod manifest;

pub use coqdep::{deps_from_listing, deps_from_listing_file, deps_from_project, ExtractError};
pub use manifest::{Manifest, ManifestError};
