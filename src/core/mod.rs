//! core
//!
//! Core domain types and transforms for Coqgraph.
//!
//! # Modules
//!
//! - [`name`] - Hierarchical module names and prefix algebra
//! - [`stats`] - Prefix frequency counting and ranking
//! - [`palette`] - Graphviz colour schemes
//! - [`colour`] - Rank-based colour assignment with overflow fallback
//! - [`filter`] - Keep/drop filtering of module names
//! - [`graph`] - The in-memory dependency graph model
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Everything here is pure computation over in-memory values
//! - All derived structures are deterministic functions of their input
//! - Built once per run, read-only afterwards

pub mod colour;
pub mod config;
pub mod filter;
pub mod graph;
pub mod name;
pub mod palette;
pub mod stats;
