//! core::colour
//!
//! Rank-based colour assignment with palette-overflow fallback.
//!
//! # Overview
//!
//! Each ranked prefix wants its own colour: rank position 1 gets colour 1
//! and so on. A categorical scheme only defines `n_col` colours, so a
//! prefix ranked beyond the palette inherits its parent's colour instead,
//! visually collapsing the sub-hierarchy into the parent's bucket. Every
//! such collapse is recorded so the operator can be told how many colours
//! a full disambiguation would have needed.
//!
//! # Invariants
//!
//! - Every assigned index lies in `[1, n_col]`
//! - `n_col` doubles as the default colour for prefixes that were never
//!   ranked
//! - The map is built in rank order, and ranking is depth-ascending over
//!   parent-closed ancestor sets, so a parent's colour is always resolved
//!   before its children ask for it

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::name::ModuleName;
use super::palette::ColourScheme;

/// The outcome of colour assignment: a prefix-to-colour map plus the
/// overflow bookkeeping accumulated while building it.
///
/// All state is owned by the value; nothing global survives the run, so
/// library callers can assign colours for independent graphs without
/// cross-contamination.
#[derive(Debug)]
pub struct ColourAssignment {
    scheme: ColourScheme,
    colours: BTreeMap<ModuleName, u32>,
    overflow_events: u32,
    merged: Vec<ModuleName>,
}

/// Assign a colour to every prefix in `ranked` (as produced by
/// [`crate::core::stats::rank`]).
///
/// # Example
///
/// ```
/// use coqgraph::core::colour::assign_colours;
/// use coqgraph::core::name::ModuleName;
/// use coqgraph::core::palette::ColourScheme;
/// use coqgraph::core::stats::{count_prefix_occurrences, rank};
///
/// let names = vec![ModuleName::new("A.x"), ModuleName::new("B.y")];
/// let ranked = rank(&count_prefix_occurrences(&names));
/// let assignment = assign_colours(&ranked, ColourScheme::default());
///
/// assert_eq!(assignment.colour_of_prefix(&ModuleName::empty()), 1);
/// assert_eq!(assignment.colour_of_prefix(&ModuleName::new("A")), 2);
/// assert_eq!(assignment.colour_of_prefix(&ModuleName::new("B")), 3);
/// assert_eq!(assignment.overflow_events(), 0);
/// ```
pub fn assign_colours(ranked: &[(ModuleName, usize)], scheme: ColourScheme) -> ColourAssignment {
    let n_col = scheme.n_col;
    let mut colours = BTreeMap::new();
    let mut overflow_events = 0;
    let mut merged = BTreeSet::new();

    for (index, (prefix, _count)) in ranked.iter().enumerate() {
        let position = (index + 1) as u32;
        let colour = if position <= n_col {
            position
        } else {
            overflow_events += 1;
            merged.insert(prefix.clone());
            // Ranking is depth-ascending, so the parent was resolved in an
            // earlier iteration. An overflowed parent has already collapsed
            // into its own ancestor, which makes the inheritance chain a
            // single lookup here.
            colours.get(&prefix.parent()).copied().unwrap_or(n_col)
        };
        colours.insert(prefix.clone(), colour);
    }

    let mut merged: Vec<ModuleName> = merged.into_iter().collect();
    merged.sort_by(|a, b| a.depth().cmp(&b.depth()).then_with(|| a.cmp(b)));

    ColourAssignment {
        scheme,
        colours,
        overflow_events,
        merged,
    }
}

impl ColourAssignment {
    /// The colour of a prefix; the scheme's last colour for prefixes that
    /// were never ranked.
    pub fn colour_of_prefix(&self, prefix: &ModuleName) -> u32 {
        self.colours
            .get(prefix)
            .copied()
            .unwrap_or(self.scheme.n_col)
    }

    /// The scheme this assignment was built against.
    pub fn scheme(&self) -> ColourScheme {
        self.scheme
    }

    /// Number of prefixes that could not get their own colour.
    pub fn overflow_events(&self) -> u32 {
        self.overflow_events
    }

    /// The prefixes that merged into an ancestor's colour, sorted by depth
    /// then lexicographically.
    pub fn merged_prefixes(&self) -> &[ModuleName] {
        &self.merged
    }

    /// Whether the palette ran out while assigning.
    pub fn has_overflow(&self) -> bool {
        self.overflow_events > 0
    }

    /// The full prefix-to-colour map.
    pub fn colours(&self) -> &BTreeMap<ModuleName, u32> {
        &self.colours
    }

    /// Diagnostic report for the operator; `None` when every prefix got
    /// its own colour.
    pub fn overflow_report(&self) -> Option<OverflowReport> {
        if !self.has_overflow() {
            return None;
        }
        Some(OverflowReport {
            scheme: self.scheme.name.to_string(),
            n_col: self.scheme.n_col,
            missing_colours: self.overflow_events,
            colours: self
                .colours
                .iter()
                .map(|(p, c)| (p.as_str().to_string(), *c))
                .collect(),
            merged_prefixes: self.merged.iter().map(|p| p.as_str().to_string()).collect(),
        })
    }
}

/// What the operator sees when the palette was too small.
#[derive(Debug, Clone, Serialize)]
pub struct OverflowReport {
    /// Scheme identifier.
    pub scheme: String,
    /// Colours the scheme defines.
    pub n_col: u32,
    /// Additional colours a full disambiguation would have needed.
    pub missing_colours: u32,
    /// Full prefix-to-colour map.
    pub colours: BTreeMap<String, u32>,
    /// Prefixes that merged into their parent, depth-then-lexicographic.
    pub merged_prefixes: Vec<String>,
}
