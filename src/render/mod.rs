//! render
//!
//! The external Graphviz pipeline.
//!
//! # Stages
//!
//! The emitted dot text flows through four external programs, each fed
//! the previous stage's stdout:
//!
//! 1. `tred` - transitive reduction, so only the interesting edges stay
//! 2. `gvpr` - mark sink modules (no outgoing deps) as double octagons
//! 3. `gvpr` - outline root modules (nothing depends on them) in red
//! 4. `dot -Granksep=1 -T pdf` - layout and PDF rendering
//!
//! The pipeline is strictly sequential; each stage consumes its
//! predecessor's complete output. A missing binary surfaces as an error
//! naming the program so the operator knows what to install.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors from the render pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to run '{program}' (is Graphviz installed?): {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("failed to feed input to '{program}': {source}")]
    Pipe {
        program: String,
        source: std::io::Error,
    },

    #[error("'{program}' exited with failure: {detail}")]
    Failed { program: String, detail: String },

    #[error("failed to write '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render dot text to a PDF at `out_path`.
pub fn render_pdf(dot_text: &str, out_path: &Path) -> Result<(), RenderError> {
    let reduced = run_stage("tred", &[], dot_text.as_bytes())?;
    let sinks_marked = run_stage(
        "gvpr",
        &["-c", "N[outdegree == 0]{shape=\"doubleoctagon\"}"],
        &reduced,
    )?;
    let roots_marked = run_stage(
        "gvpr",
        &["-c", "N[indegree == 0]{penwidth=5,color=red}"],
        &sinks_marked,
    )?;
    let pdf = run_stage("dot", &["-Granksep=1", "-T", "pdf"], &roots_marked)?;

    std::fs::write(out_path, pdf).map_err(|e| RenderError::WriteOutput {
        path: out_path.to_path_buf(),
        source: e,
    })
}

/// Derive the output filename from the shared-prefix label.
///
/// Falls back to the working directory's basename when the label is
/// empty, and to a fixed name when even that is unavailable (e.g. at the
/// filesystem root).
pub fn output_filename(shared_label: &str, cwd: &Path) -> PathBuf {
    let label = if shared_label.is_empty() {
        cwd.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "modules".to_string())
    } else {
        shared_label.to_string()
    };
    PathBuf::from(format!("deps-{}.pdf", label))
}

/// Run one pipeline stage, feeding `input` on stdin and returning stdout.
fn run_stage(program: &str, args: &[&str], input: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| RenderError::Spawn {
            program: program.to_string(),
            source: e,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input).map_err(|e| RenderError::Pipe {
            program: program.to_string(),
            source: e,
        })?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| RenderError::Pipe {
            program: program.to_string(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(RenderError::Failed {
            program: program.to_string(),
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output.stdout)
}
