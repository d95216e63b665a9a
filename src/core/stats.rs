//! core::stats
//!
//! Prefix frequency statistics over a module set.
//!
//! # Overview
//!
//! Colour assignment wants the "important" prefixes first: shallow before
//! deep, and within a depth, the prefixes that root the most modules.
//! This module counts, for every prefix, how many input names have it in
//! their ancestor set, and produces the ranked list the colour assigner
//! consumes.
//!
//! # Determinism
//!
//! The frequency table is a `BTreeMap` and the rank sort carries a final
//! lexicographic tiebreak, so identical input always ranks identically.

use std::collections::BTreeMap;

use super::name::ModuleName;

/// Occurrence count per prefix across a module set.
pub type PrefixFrequencyTable = BTreeMap<ModuleName, usize>;

/// Count, for every prefix, the number of input names whose ancestor set
/// contains it.
///
/// The input is taken as-is: duplicate names accumulate one count per
/// occurrence. Callers that want per-module counting deduplicate before
/// calling.
///
/// # Example
///
/// ```
/// use coqgraph::core::name::ModuleName;
/// use coqgraph::core::stats::count_prefix_occurrences;
///
/// let names = vec![ModuleName::new("A.B.x"), ModuleName::new("A.C.y")];
/// let table = count_prefix_occurrences(&names);
///
/// assert_eq!(table[&ModuleName::empty()], 2);
/// assert_eq!(table[&ModuleName::new("A")], 2);
/// assert_eq!(table[&ModuleName::new("A.B")], 1);
/// assert_eq!(table[&ModuleName::new("A.C")], 1);
/// ```
pub fn count_prefix_occurrences(names: &[ModuleName]) -> PrefixFrequencyTable {
    let mut table = PrefixFrequencyTable::new();
    for name in names {
        for prefix in name.ancestors() {
            *table.entry(prefix).or_insert(0) += 1;
        }
    }
    table
}

/// Sort table entries into rank order: depth ascending, then count
/// descending, then prefix lexicographic ascending.
///
/// The leading depth key means a prefix always ranks after all of its
/// ancestors, which the colour map build relies on.
pub fn rank(table: &PrefixFrequencyTable) -> Vec<(ModuleName, usize)> {
    let mut entries: Vec<(ModuleName, usize)> =
        table.iter().map(|(p, c)| (p.clone(), *c)).collect();

    entries.sort_by(|a, b| {
        a.0.depth()
            .cmp(&b.0.depth())
            .then_with(|| b.1.cmp(&a.1))
            .then_with(|| a.0.cmp(&b.0))
    });

    entries
}
