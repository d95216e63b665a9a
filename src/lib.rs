//! Coqgraph - colour-coded dependency graphs for Coq developments
//!
//! Coqgraph is a single-binary tool that turns the module dependencies of a
//! Coq project into a Graphviz-rendered PDF in which every module is
//! coloured by its position in the project's namespace hierarchy. Modules
//! sharing a prefix share a colour, the most populous prefixes claim the
//! first palette entries, and sub-hierarchies collapse into their parent's
//! colour once the palette runs out.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, drives the run)
//! - [`extract`] - Single doorway to `_CoqProject` and `coqdep`
//! - [`core`] - Name algebra, prefix statistics, colour assignment, graph
//!   model, and configuration
//! - [`emit`] - Graphviz dot serialization
//! - [`render`] - The external `tred`/`gvpr`/`dot` pipeline
//! - [`ui`] - Operator-facing output utilities
//!
//! # Correctness Invariants
//!
//! Coqgraph maintains the following invariants:
//!
//! 1. Every colour index handed to the emitter lies within the configured
//!    palette
//! 2. Shared-prefix stripping is idempotent
//! 3. All derived structures are built once per run and read-only after
//!    construction
//! 4. Identical input always produces identical output text

pub mod cli;
pub mod core;
pub mod emit;
pub mod extract;
pub mod render;
pub mod ui;
