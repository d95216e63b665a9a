//! emit::dot
//!
//! Dot text generation.
//!
//! # Output shape
//!
//! ```text
//! digraph module_deps {
//! labelloc="b" labeljust="l" label = "Prefix: Interval"
//! node [shape=box, style="rounded,filled", URL="html/\N.html", colorscheme=set312];
//! "Real.Taylor" [fillcolor=2]
//! "Real.Taylor" -> "Tactic"
//! }
//! ```
//!
//! One styling line per source module carrying its resolved fill colour,
//! one edge line per (source, destination) pair, all node identifiers
//! quoted. Output depends only on the graph, so identical input yields
//! byte-identical text.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::core::graph::DepGraph;

/// Node shape and fill style shared by every emitted node.
const BASE_STYLE: &str = "rounded,filled";

/// Serialize the graph into dot text.
pub fn emit_dot(graph: &DepGraph, url_template: &str) -> String {
    let scheme = graph.assignment().scheme();
    let mut out = String::new();

    out.push_str("digraph module_deps {\n");
    let _ = writeln!(
        out,
        "labelloc=\"b\" labeljust=\"l\" label = \"Prefix: {}\"",
        escape(graph.shared_prefix().as_str())
    );
    let _ = writeln!(
        out,
        "node [shape=box, style=\"{}\", URL=\"{}\", colorscheme={}];",
        BASE_STYLE,
        url_template,
        scheme.name
    );

    let mut styled = BTreeSet::new();
    for edge in graph.edges() {
        // One styling line per distinct source, however many edges
        // mention it.
        if styled.insert(edge.source.clone()) {
            let _ = writeln!(
                out,
                "\"{}\" [fillcolor={}]",
                escape(edge.source.as_str()),
                graph.colour_of(&edge.source)
            );
        }
        for target in &edge.targets {
            let _ = writeln!(
                out,
                "\"{}\" -> \"{}\"",
                escape(edge.source.as_str()),
                escape(target.as_str())
            );
        }
    }

    out.push_str("}\n");
    out
}

/// Escape a name for use inside a double-quoted dot identifier.
fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
