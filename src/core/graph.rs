//! core::graph
//!
//! The in-memory dependency graph model.
//!
//! # Architecture
//!
//! The graph is a sequence of edges from a source module to the modules it
//! depends on, as reported by `coqdep`. Construction runs the whole
//! derivation pipeline in order:
//!
//! 1. Apply the keep/drop name filter
//! 2. Compute the longest prefix shared by every remaining name
//! 3. Strip that prefix from every name
//! 4. Rank the stripped module set's prefixes and assign colours
//!
//! # Invariants
//!
//! - Names inside the model are already filtered and stripped
//! - The model is read-only after construction
//! - Acyclicity is not checked; `tred` downstream assumes a DAG and that
//!   is coqdep's problem, not ours

use super::colour::{assign_colours, ColourAssignment};
use super::filter::NameFilter;
use super::name::{longest_shared_prefix, ModuleName};
use super::palette::ColourScheme;
use super::stats::{count_prefix_occurrences, rank};

/// One source module and the modules it depends on.
///
/// A leaf module appears with an empty target list (coqdep lists every
/// file as a source) or as a target of other edges only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    pub source: ModuleName,
    pub targets: Vec<ModuleName>,
}

impl DependencyEdge {
    pub fn new(source: ModuleName, targets: Vec<ModuleName>) -> Self {
        Self { source, targets }
    }
}

/// The coloured, stripped dependency graph handed to the emitter.
#[derive(Debug)]
pub struct DepGraph {
    edges: Vec<DependencyEdge>,
    shared_prefix: ModuleName,
    assignment: ColourAssignment,
}

impl DepGraph {
    /// Build the model from raw extracted edges.
    ///
    /// Filtering happens before any aggregation: an edge whose source
    /// fails the filter disappears entirely, a failing target is removed
    /// from its edge while the edge survives. The shared prefix is then
    /// computed over every surviving name and stripped everywhere, and
    /// colours are assigned over the distinct stripped module set.
    pub fn build(
        raw_edges: Vec<DependencyEdge>,
        filter: &NameFilter,
        scheme: ColourScheme,
    ) -> Self {
        let filtered: Vec<DependencyEdge> = raw_edges
            .into_iter()
            .filter(|edge| filter.keeps(edge.source.as_str()))
            .map(|edge| {
                let targets = edge
                    .targets
                    .into_iter()
                    .filter(|t| filter.keeps(t.as_str()))
                    .collect();
                DependencyEdge::new(edge.source, targets)
            })
            .collect();

        let all_names: Vec<ModuleName> = filtered
            .iter()
            .flat_map(|edge| {
                std::iter::once(edge.source.clone()).chain(edge.targets.iter().cloned())
            })
            .collect();
        let shared_prefix = longest_shared_prefix(&all_names);

        let edges: Vec<DependencyEdge> = filtered
            .into_iter()
            .map(|edge| {
                let source = edge.source.strip_prefix(&shared_prefix);
                let targets = edge
                    .targets
                    .into_iter()
                    .map(|t| t.strip_prefix(&shared_prefix))
                    .collect();
                DependencyEdge::new(source, targets)
            })
            .collect();

        // Each distinct module contributes once to the prefix statistics,
        // however many edges mention it.
        let mut modules: Vec<ModuleName> = edges
            .iter()
            .flat_map(|edge| {
                std::iter::once(edge.source.clone()).chain(edge.targets.iter().cloned())
            })
            .collect();
        modules.sort();
        modules.dedup();

        let ranked = rank(&count_prefix_occurrences(&modules));
        let assignment = assign_colours(&ranked, scheme);

        Self {
            edges,
            shared_prefix,
            assignment,
        }
    }

    /// The filtered, stripped edges in input order.
    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    /// The prefix that was stripped from every name.
    pub fn shared_prefix(&self) -> &ModuleName {
        &self.shared_prefix
    }

    /// The colour of a module: its immediate parent prefix's colour, or
    /// the scheme's default when that parent was never ranked.
    pub fn colour_of(&self, source: &ModuleName) -> u32 {
        self.assignment.colour_of_prefix(&source.parent())
    }

    /// The colour assignment, for diagnostics.
    pub fn assignment(&self) -> &ColourAssignment {
        &self.assignment
    }

    /// Whether the graph has no edges at all.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
