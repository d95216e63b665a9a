//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available alongside the run options:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//!
//! # Positional Patterns
//!
//! The two optional positionals mirror the classic invocation: the first
//! is a keep pattern, the second a drop pattern. Both are unanchored
//! regular expressions matched against dotted module names.

use clap::Parser;
use std::path::PathBuf;

/// Coqgraph - colour-coded dependency graphs for Coq developments
#[derive(Parser, Debug)]
#[command(name = "coqgraph")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "\
WORKFLOW EXAMPLES:
    # Render deps-<Prefix>.pdf for the project in the current directory
    coqgraph

    # Only chart the Interval namespace, hiding its Private submodules
    coqgraph 'Interval' 'Interval\\.Private'

    # Inspect the dot text without invoking Graphviz
    coqgraph --dot-only

    # Reuse a captured coqdep listing instead of running coqdep
    coqgraph --input deps.out"
)]
pub struct Cli {
    /// Keep only modules matching this pattern
    pub keep: Option<String>,

    /// Additionally drop modules matching this pattern
    pub drop: Option<String>,

    /// Path to the project manifest
    #[arg(long, default_value = "_CoqProject", value_name = "FILE")]
    pub project: PathBuf,

    /// Read a captured coqdep listing instead of invoking coqdep
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the rendered PDF here instead of deps-<prefix>.pdf
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the dot text to stdout and skip the Graphviz pipeline
    #[arg(long)]
    pub dot_only: bool,

    /// Emit the overflow report as JSON
    #[arg(long)]
    pub json: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Run as if coqgraph was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["coqgraph"]).unwrap();
        assert!(cli.keep.is_none());
        assert!(cli.drop.is_none());
        assert_eq!(cli.project, PathBuf::from("_CoqProject"));
        assert!(!cli.dot_only);
        assert!(!cli.json);
    }

    #[test]
    fn positional_patterns_in_order() {
        let cli = Cli::try_parse_from(["coqgraph", "Interval", "Private"]).unwrap();
        assert_eq!(cli.keep.as_deref(), Some("Interval"));
        assert_eq!(cli.drop.as_deref(), Some("Private"));
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "coqgraph",
            "--project",
            "other/_CoqProject",
            "--dot-only",
            "--quiet",
        ])
        .unwrap();
        assert_eq!(cli.project, PathBuf::from("other/_CoqProject"));
        assert!(cli.dot_only);
        assert!(cli.quiet);
    }
}
