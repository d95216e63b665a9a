//! extract::coqdep
//!
//! coqdep invocation and output parsing.
//!
//! # Output shape
//!
//! With `-dyndep var -vos`, coqdep prints one line per compilation
//! target:
//!
//! ```text
//! theories/Real/Taylor.vo ...: theories/Real/Taylor.v theories/Tactic.vo ...
//! ```
//!
//! The part from the first `.vo` through the `.v` source after the colon
//! separates the module from its dependencies. Parsing removes it, strips
//! the `.vo`/`.vos` suffixes from the remaining tokens, applies the
//! manifest's directory-to-logical rewrites, and turns path separators
//! into dots, leaving a source name plus its destination names.

use std::path::{Path, PathBuf};
use std::process::Command;

use regex::Regex;
use thiserror::Error;

use super::manifest::Manifest;
use crate::core::graph::DependencyEdge;
use crate::core::name::ModuleName;

/// Errors from dependency extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("'{program}' exited with failure: {detail}")]
    Failed { program: String, detail: String },

    #[error("coqdep produced non-UTF-8 output")]
    BadOutput,

    #[error("failed to read dependency listing '{path}': {source}")]
    ListingRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to scan '{path}' for .v files: {source}")]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Run coqdep for a project and parse its output into edges.
///
/// When the manifest does not list its `.v` files, the project tree is
/// scanned for them (sorted, so the invocation is reproducible) and they
/// are appended to the coqdep command line.
pub fn deps_from_project(manifest: &Manifest) -> Result<Vec<DependencyEdge>, ExtractError> {
    let project_dir = manifest.project_dir();
    let manifest_name = manifest
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "_CoqProject".to_string());

    let mut command = Command::new("coqdep");
    command
        .args(["-vos", "-dyndep", "var", "-f", &manifest_name])
        .current_dir(project_dir);

    if !manifest.lists_sources {
        for file in find_v_files(project_dir)? {
            command.arg(file);
        }
    }

    let output = command.output().map_err(|e| ExtractError::Spawn {
        program: "coqdep".to_string(),
        source: e,
    })?;
    if !output.status.success() {
        return Err(ExtractError::Failed {
            program: "coqdep".to_string(),
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let listing = String::from_utf8(output.stdout).map_err(|_| ExtractError::BadOutput)?;
    Ok(deps_from_listing(&listing, &manifest.rewrites))
}

/// Parse a previously captured coqdep listing from a file.
pub fn deps_from_listing_file(
    path: &Path,
    rewrites: &[(String, String)],
) -> Result<Vec<DependencyEdge>, ExtractError> {
    let listing = std::fs::read_to_string(path).map_err(|e| ExtractError::ListingRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(deps_from_listing(&listing, rewrites))
}

/// Parse coqdep output text into dependency edges.
///
/// Lines that do not have the `.vo…: ….v` dependency shape are ignored.
pub fn deps_from_listing(listing: &str, rewrites: &[(String, String)]) -> Vec<DependencyEdge> {
    // From the first compiled-target suffix through the .v source after
    // the colon; its presence is what marks a dependency line.
    let target_part = Regex::new(r"\.vo.*:\s+\S*\.v").unwrap();
    let vo_suffix = Regex::new(r"\.vo\S*").unwrap();
    let rewrite_rules: Vec<(Regex, String)> = rewrites
        .iter()
        .map(|(from, to)| {
            let pattern = Regex::new(&format!(r"(^|\s){}/", regex::escape(from))).unwrap();
            (pattern, format!("${{1}}{}/", to))
        })
        .collect();

    let mut edges = Vec::new();
    for line in listing.lines() {
        let mut line = line.to_string();
        for (pattern, replacement) in &rewrite_rules {
            line = pattern.replace_all(&line, replacement.as_str()).into_owned();
        }

        if !target_part.is_match(&line) {
            continue;
        }
        let replaced = target_part.replace(&line, "");

        let cleaned = vo_suffix.replace_all(&replaced, "").replace('/', ".");
        let mut tokens = cleaned.split_whitespace();
        let Some(source) = tokens.next() else {
            continue;
        };

        edges.push(DependencyEdge::new(
            ModuleName::new(source),
            tokens.map(ModuleName::new).collect(),
        ));
    }
    edges
}

/// Recursively collect `.v` files under `dir`, as paths relative to it,
/// sorted.
fn find_v_files(dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    let mut files = Vec::new();
    collect_v_files(dir, dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_v_files(root: &Path, dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), ExtractError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ExtractError::Scan {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ExtractError::Scan {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let file_name = entry.file_name();

        // Skip dot-directories; VCS metadata is noise.
        if file_name.to_string_lossy().starts_with('.') {
            continue;
        }

        if path.is_dir() {
            collect_v_files(root, &path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "v") {
            if let Ok(relative) = path.strip_prefix(root) {
                files.push(relative.to_path_buf());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
theories/Real/Taylor.vo theories/Real/Taylor.glob: theories/Real/Taylor.v theories/Tactic.vo theories/Missing/Stdlib.vos
theories/Tactic.vo: theories/Tactic.v
theories/Missing/Stdlib.vo: theories/Missing/Stdlib.v
";

    fn rewrites() -> Vec<(String, String)> {
        vec![("theories".to_string(), "Interval".to_string())]
    }

    #[test]
    fn parses_sources_and_destinations() {
        let edges = deps_from_listing(LISTING, &rewrites());
        assert_eq!(edges.len(), 3);

        assert_eq!(edges[0].source, ModuleName::new("Interval.Real.Taylor"));
        assert_eq!(
            edges[0].targets,
            vec![
                ModuleName::new("Interval.Tactic"),
                ModuleName::new("Interval.Missing.Stdlib"),
            ]
        );
    }

    #[test]
    fn leaf_modules_have_no_targets() {
        let edges = deps_from_listing(LISTING, &rewrites());
        assert_eq!(edges[1].source, ModuleName::new("Interval.Tactic"));
        assert!(edges[1].targets.is_empty());
    }

    #[test]
    fn rewrite_only_touches_token_starts() {
        // "mytheories/" must not be rewritten; "theories/" must be.
        let listing = "mytheories/A.vo: mytheories/A.v theories/B.vo\n";
        let edges = deps_from_listing(listing, &rewrites());
        assert_eq!(edges[0].source, ModuleName::new("mytheories.A"));
        assert_eq!(edges[0].targets, vec![ModuleName::new("Interval.B")]);
    }

    #[test]
    fn without_rewrites_paths_become_dotted_directly() {
        let edges = deps_from_listing("src/A.vo: src/A.v src/B.vo\n", &[]);
        assert_eq!(edges[0].source, ModuleName::new("src.A"));
        assert_eq!(edges[0].targets, vec![ModuleName::new("src.B")]);
    }

    #[test]
    fn non_dependency_lines_are_ignored() {
        let listing = "# coqdep chatter\nsomething unrelated\n";
        let edges = deps_from_listing(listing, &[]);
        assert!(edges.is_empty());
    }

    #[test]
    fn vos_suffixes_are_stripped_from_targets() {
        let edges = deps_from_listing("a.vo: a.v b.vos c.vok\n", &[]);
        assert_eq!(
            edges[0].targets,
            vec![ModuleName::new("b"), ModuleName::new("c")]
        );
    }

    #[test]
    fn v_file_scan_is_sorted_and_relative() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("theories/Real")).unwrap();
        std::fs::write(dir.path().join("theories/Real/Taylor.v"), "").unwrap();
        std::fs::write(dir.path().join("theories/Axioms.v"), "").unwrap();
        std::fs::write(dir.path().join("README.md"), "").unwrap();

        let files = find_v_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("theories/Axioms.v"),
                PathBuf::from("theories/Real/Taylor.v"),
            ]
        );
    }

    #[test]
    fn hidden_directories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join(".git/fake.v"), "").unwrap();
        std::fs::write(dir.path().join("Top.v"), "").unwrap();

        let files = find_v_files(dir.path()).unwrap();
        assert_eq!(files, vec![PathBuf::from("Top.v")]);
    }
}
