//! extract::manifest
//!
//! `_CoqProject` manifest parsing.
//!
//! # What we read
//!
//! Two things matter to the graph:
//!
//! - `-Q <dir> <logical>` lines bind a source directory to a logical
//!   namespace root; coqdep reports paths under `<dir>/`, the graph wants
//!   names under `<logical>.`, so each binding becomes a rewrite rule.
//! - Whether the manifest lists any `.v` files itself. When it does not,
//!   coqdep has to be handed the sources explicitly and the extractor
//!   falls back to scanning the project tree.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

/// Errors from manifest operations.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read project manifest '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A parsed project manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Where the manifest was read from.
    pub path: PathBuf,
    /// `(directory, logical)` pairs from `-Q` lines, in file order.
    pub rewrites: Vec<(String, String)>,
    /// Whether the manifest lists `.v` files explicitly.
    pub lists_sources: bool,
}

impl Manifest {
    /// Read and parse a `_CoqProject` file.
    ///
    /// Lines that are neither `-Q` bindings nor source listings are
    /// ignored; an empty manifest is valid and yields no rewrites.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::ReadError` when the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let contents = fs::read_to_string(path).map_err(|e| ManifestError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::parse(path, &contents))
    }

    /// Parse manifest text.
    pub fn parse(path: &Path, contents: &str) -> Self {
        let quantify = Regex::new(r"^[ \t]*-Q[ \t]+(?P<from>\w+)[ \t]+(?P<to>\w+)[ \t]*$")
            .unwrap();
        let source_line = Regex::new(r"^[ \t]*\S+\.v\b").unwrap();

        let mut rewrites = Vec::new();
        let mut lists_sources = false;

        for line in contents.lines() {
            if let Some(caps) = quantify.captures(line) {
                rewrites.push((caps["from"].to_string(), caps["to"].to_string()));
            } else if source_line.is_match(line) {
                lists_sources = true;
            }
        }

        Self {
            path: path.to_path_buf(),
            rewrites,
            lists_sources,
        }
    }

    /// The directory the manifest lives in, which anchors the coqdep run
    /// and the fallback source scan.
    pub fn project_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}
