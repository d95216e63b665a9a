//! cli
//!
//! Command-line interface layer for Coqgraph.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Drive the extraction -> model -> emit -> render pipeline
//! - Does NOT contain domain logic
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, resolves paths
//! against `--cwd`, and runs the stages of the pipeline strictly one
//! after another; every stage consumes the previous stage's complete
//! output.

pub mod args;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::core::config::Config;
use crate::core::filter::NameFilter;
use crate::core::graph::DepGraph;
use crate::emit::emit_dot;
use crate::extract::{deps_from_listing_file, deps_from_project, Manifest};
use crate::render;
use crate::ui::output::{self, Verbosity};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    if let Some(shell) = cli.completions {
        completions(shell);
        return Ok(());
    }

    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let cwd = match &cli.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine working directory")?,
    };
    let manifest_path = resolve(&cwd, &cli.project);

    let manifest = Manifest::load(&manifest_path)
        .with_context(|| format!("Cannot load project manifest '{}'", manifest_path.display()))?;
    output::debug(
        format!(
            "manifest: {} rewrite(s), lists sources: {}",
            manifest.rewrites.len(),
            manifest.lists_sources
        ),
        verbosity,
    );

    let config = Config::load(Some(manifest.project_dir())).context("Invalid configuration")?;
    let filter = NameFilter::new(cli.keep.as_deref(), cli.drop.as_deref())
        .context("Invalid filter pattern")?;

    let raw_edges = match &cli.input {
        Some(listing) => deps_from_listing_file(&resolve(&cwd, listing), &manifest.rewrites)
            .context("Cannot read dependency listing")?,
        None => deps_from_project(&manifest).context("Dependency extraction failed")?,
    };
    output::debug(format!("extracted {} raw edge(s)", raw_edges.len()), verbosity);

    let graph = DepGraph::build(raw_edges, &filter, config.scheme());
    output::debug(
        format!("shared prefix: '{}'", graph.shared_prefix()),
        verbosity,
    );

    let dot_text = emit_dot(&graph, config.url_template());

    if cli.dot_only {
        print!("{}", dot_text);
    } else {
        let out_path = match &cli.output {
            Some(path) => resolve(&cwd, path),
            None => {
                let name = render::output_filename(graph.shared_prefix().as_str(), &cwd);
                cwd.join(name)
            }
        };
        render::render_pdf(&dot_text, &out_path)
            .with_context(|| format!("Rendering '{}' failed", out_path.display()))?;
        output::print(format!("Wrote {}", out_path.display()), verbosity);
    }

    // Diagnostics go to stderr so dot-only stdout stays pipeable.
    if let Some(report) = graph.assignment().overflow_report() {
        if cli.json {
            eprintln!("{}", output::format_overflow_report_json(&report));
        } else {
            output::warn(output::format_overflow_report(&report), verbosity);
        }
    }

    Ok(())
}

/// Resolve a possibly relative path against the effective working
/// directory.
fn resolve(cwd: &std::path::Path, path: &std::path::Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Generate shell completion scripts on stdout.
fn completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, &name, &mut std::io::stdout()),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, &name, &mut std::io::stdout()),
        Shell::Fish => generate(shells::Fish, &mut cmd, &name, &mut std::io::stdout()),
        Shell::PowerShell => {
            generate(shells::PowerShell, &mut cmd, &name, &mut std::io::stdout())
        }
    }
}
