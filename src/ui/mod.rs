//! ui
//!
//! Operator-facing output utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting, verbosity, and the overflow report
//!
//! # Design
//!
//! All operator-facing text goes through this module so quiet and debug
//! modes behave consistently. The rendered graph itself never passes
//! through here; this is purely the diagnostic channel.

pub mod output;
