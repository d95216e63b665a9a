//! core::name
//!
//! Hierarchical module names and prefix algebra.
//!
//! # Types
//!
//! - [`ModuleName`] - Dot-separated hierarchical module name
//!
//! # Semantics
//!
//! A module name is an ordered sequence of segments joined by `.`. The
//! empty name is a valid value and stands for "no remaining prefix"; it is
//! the root every ancestor chain terminates in. Equality and hashing are
//! structural, and the derived ordering is plain lexicographic order on
//! the dotted form, which the ranking code relies on for deterministic
//! tiebreaks.
//!
//! # Examples
//!
//! ```
//! use coqgraph::core::name::ModuleName;
//!
//! let name = ModuleName::new("Interval.Real.Taylor");
//! assert_eq!(name.depth(), 3);
//! assert_eq!(name.parent().as_str(), "Interval.Real");
//!
//! // Ancestors run from the immediate parent down to the empty root.
//! let ancestors = name.ancestors();
//! assert!(ancestors.contains(&ModuleName::empty()));
//! assert_eq!(ancestors.len(), 3);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A dot-separated hierarchical module name.
///
/// No validation is performed at construction: any string is a usable
/// name, and the empty string is the zero-segment name. Graph inputs come
/// from `coqdep`, which only emits well-formed paths, and the algebra
/// below is total over arbitrary strings anyway.
///
/// # Example
///
/// ```
/// use coqgraph::core::name::ModuleName;
///
/// let name = ModuleName::new("A.B.C");
/// assert_eq!(name.as_str(), "A.B.C");
/// assert_eq!(name.depth(), 3);
///
/// let root = ModuleName::empty();
/// assert!(root.is_empty());
/// assert_eq!(root.depth(), 0);
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    /// Create a module name from a dotted string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The empty name (zero segments, "no remaining prefix").
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Whether this is the empty name.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments; 0 for the empty name.
    ///
    /// # Example
    ///
    /// ```
    /// use coqgraph::core::name::ModuleName;
    ///
    /// assert_eq!(ModuleName::empty().depth(), 0);
    /// assert_eq!(ModuleName::new("A").depth(), 1);
    /// assert_eq!(ModuleName::new("A.B.C").depth(), 3);
    /// ```
    pub fn depth(&self) -> usize {
        if self.0.is_empty() {
            0
        } else {
            self.0.split('.').count()
        }
    }

    /// The name with its last segment removed.
    ///
    /// The parent of a single-segment name is the empty name, and the
    /// empty name is its own parent. Each application on a non-empty name
    /// strictly reduces the segment count, so repeated application always
    /// reaches the empty name in `depth()` steps.
    ///
    /// # Example
    ///
    /// ```
    /// use coqgraph::core::name::ModuleName;
    ///
    /// assert_eq!(ModuleName::new("A.B.C").parent().as_str(), "A.B");
    /// assert_eq!(ModuleName::new("A").parent(), ModuleName::empty());
    /// assert_eq!(ModuleName::empty().parent(), ModuleName::empty());
    /// ```
    pub fn parent(&self) -> ModuleName {
        match self.0.rfind('.') {
            Some(idx) => Self(self.0[..idx].to_string()),
            None => Self::empty(),
        }
    }

    /// The set of all proper ancestors of this name, including the empty
    /// name and excluding the name itself.
    ///
    /// The empty name's ancestor set is `{""}` so that every name set has
    /// a common ancestor. For a non-empty name the set has exactly
    /// `depth()` elements.
    ///
    /// # Example
    ///
    /// ```
    /// use coqgraph::core::name::ModuleName;
    ///
    /// let ancestors = ModuleName::new("A.B.C").ancestors();
    /// assert_eq!(ancestors.len(), 3);
    /// assert!(ancestors.contains(&ModuleName::new("A.B")));
    /// assert!(ancestors.contains(&ModuleName::new("A")));
    /// assert!(ancestors.contains(&ModuleName::empty()));
    /// assert!(!ancestors.contains(&ModuleName::new("A.B.C")));
    /// ```
    pub fn ancestors(&self) -> BTreeSet<ModuleName> {
        let mut prefixes = BTreeSet::new();
        if self.is_empty() {
            prefixes.insert(Self::empty());
            return prefixes;
        }

        let mut current = self.parent();
        loop {
            let done = current.is_empty();
            prefixes.insert(current.clone());
            if done {
                break;
            }
            current = current.parent();
        }
        prefixes
    }

    /// Remove a leading prefix (plus its trailing separator) from this
    /// name.
    ///
    /// Stripping the empty prefix is a no-op, a name equal to the prefix
    /// strips to the empty name, and a name the prefix is not an ancestor
    /// of is returned unchanged. Because a stripped edge set's own shared
    /// prefix is empty, stripping is idempotent across the whole data set.
    ///
    /// # Example
    ///
    /// ```
    /// use coqgraph::core::name::ModuleName;
    ///
    /// let shared = ModuleName::new("A");
    /// assert_eq!(ModuleName::new("A.B.x").strip_prefix(&shared).as_str(), "B.x");
    /// assert_eq!(ModuleName::new("A").strip_prefix(&shared), ModuleName::empty());
    /// assert_eq!(ModuleName::new("X.Y").strip_prefix(&shared).as_str(), "X.Y");
    /// ```
    pub fn strip_prefix(&self, prefix: &ModuleName) -> ModuleName {
        if prefix.is_empty() {
            return self.clone();
        }
        if self == prefix {
            return Self::empty();
        }
        match self.0.strip_prefix(&prefix.0) {
            Some(rest) => match rest.strip_prefix('.') {
                Some(stripped) => Self(stripped.to_string()),
                // Shares leading characters but not a segment boundary,
                // e.g. "Arith.Lt" does not strip under prefix "Ari".
                None => self.clone(),
            },
            None => self.clone(),
        }
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ModuleName> for String {
    fn from(name: ModuleName) -> Self {
        name.0
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Intersection of the ancestor sets of every name in `names`.
///
/// Returns the empty set for an empty slice. For a non-empty slice the
/// result always contains the empty name, since every ancestor set does.
pub fn shared_ancestors(names: &[ModuleName]) -> BTreeSet<ModuleName> {
    let mut iter = names.iter();
    let Some(first) = iter.next() else {
        return BTreeSet::new();
    };

    let mut shared = first.ancestors();
    for name in iter {
        if shared.is_empty() {
            break;
        }
        let prefixes = name.ancestors();
        shared = shared.intersection(&prefixes).cloned().collect();
    }
    shared
}

/// The deepest prefix common to every name in `names`.
///
/// Ties between equally deep candidates break to the lexicographically
/// smallest so the result is reproducible. Returns the empty name for an
/// empty slice or when no non-empty prefix is shared.
///
/// # Example
///
/// ```
/// use coqgraph::core::name::{longest_shared_prefix, ModuleName};
///
/// let names = vec![ModuleName::new("A.B"), ModuleName::new("A.C")];
/// assert_eq!(longest_shared_prefix(&names).as_str(), "A");
///
/// let disjoint = vec![ModuleName::new("A.B"), ModuleName::new("X.Y")];
/// assert!(longest_shared_prefix(&disjoint).is_empty());
/// ```
pub fn longest_shared_prefix(names: &[ModuleName]) -> ModuleName {
    let mut best = ModuleName::empty();
    // BTreeSet iterates in lexicographic order, so a strict depth
    // comparison keeps the lexicographically smallest of each depth.
    for prefix in shared_ancestors(names) {
        if prefix.depth() > best.depth() {
            best = prefix;
        }
    }
    best
}
