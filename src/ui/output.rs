//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag. The
//! palette-overflow report has both a human rendering and a JSON
//! rendering for machine consumption.

use std::fmt::Display;

use crate::core::colour::OverflowReport;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Render the overflow report for a human operator.
pub fn format_overflow_report(report: &OverflowReport) -> String {
    let colours = report
        .colours
        .iter()
        .map(|(prefix, colour)| format!("'{}' -> {}", prefix, colour))
        .collect::<Vec<_>>()
        .join(", ");
    let merged = report
        .merged_prefixes
        .iter()
        .map(|prefix| format!("'{}'", prefix))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "The colour scheme '{}' defines {} colours, {} more colours are needed for full disambiguation.\n\
         Colours: {}\n\
         The following prefixes got merged into their parent: {}",
        report.scheme, report.n_col, report.missing_colours, colours, merged
    )
}

/// Render the overflow report as JSON.
pub fn format_overflow_report_json(report: &OverflowReport) -> String {
    // OverflowReport serializes to plain maps and strings; this cannot
    // fail in practice.
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
