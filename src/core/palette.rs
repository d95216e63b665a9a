//! core::palette
//!
//! Graphviz colour schemes.
//!
//! Node fill colours reference a categorical Brewer scheme by 1-based
//! index, so the palette is fixed at a name plus a colour count. The two
//! schemes recognised here are the categorical schemes dot ships with
//! that read well for module clusters; see
//! <https://www.graphviz.org/doc/info/colors.html#brewer>.

use serde::Serialize;

/// A named Graphviz colour scheme and the number of colours it defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColourScheme {
    /// Scheme identifier as dot knows it (e.g. `set312`).
    pub name: &'static str,
    /// Number of colours in the scheme. The last index doubles as the
    /// default colour for prefixes that could not be ranked.
    pub n_col: u32,
}

/// The schemes a configuration may select.
pub const KNOWN_SCHEMES: [ColourScheme; 2] = [
    ColourScheme {
        name: "pastel19",
        n_col: 9,
    },
    ColourScheme {
        name: "set312",
        n_col: 12,
    },
];

impl ColourScheme {
    /// Look up a scheme by its dot identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        KNOWN_SCHEMES.iter().copied().find(|s| s.name == name)
    }

    /// The names a configuration may use, for error messages.
    pub fn valid_names() -> Vec<&'static str> {
        KNOWN_SCHEMES.iter().map(|s| s.name).collect()
    }
}

impl Default for ColourScheme {
    fn default() -> Self {
        // set312 gives three more colours than pastel19 before prefixes
        // start merging into their parents.
        ColourScheme {
            name: "set312",
            n_col: 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_set312() {
        let scheme = ColourScheme::default();
        assert_eq!(scheme.name, "set312");
        assert_eq!(scheme.n_col, 12);
    }

    #[test]
    fn lookup_by_name() {
        let scheme = ColourScheme::from_name("pastel19").unwrap();
        assert_eq!(scheme.n_col, 9);
        assert!(ColourScheme::from_name("viridis").is_none());
    }

    #[test]
    fn valid_names_lists_all_schemes() {
        assert_eq!(ColourScheme::valid_names(), vec!["pastel19", "set312"]);
    }
}
