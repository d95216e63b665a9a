//! emit
//!
//! Graphviz dot serialization of the dependency graph.
//!
//! The emitter is the last pure stage of the run: it turns the coloured,
//! stripped edge set into deterministic dot text that the external
//! layout/render pipeline consumes unchanged.

pub mod dot;

pub use dot::emit_dot;
