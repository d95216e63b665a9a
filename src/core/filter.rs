//! core::filter
//!
//! Keep/drop filtering of module names.
//!
//! # Design
//!
//! The filter is an explicit value built once from the invocation's two
//! optional patterns and passed into graph construction. A name passes
//! when it matches the keep pattern (or none is set) and does not match
//! the drop pattern (or none is set). Patterns are unanchored regular
//! expressions, matched anywhere in the dotted name.

use regex::Regex;
use thiserror::Error;

/// Errors from filter construction.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid keep pattern '{pattern}': {message}")]
    InvalidKeepPattern { pattern: String, message: String },

    #[error("invalid drop pattern '{pattern}': {message}")]
    InvalidDropPattern { pattern: String, message: String },
}

/// An optional keep pattern and an optional drop pattern.
#[derive(Debug, Default)]
pub struct NameFilter {
    keep: Option<Regex>,
    drop: Option<Regex>,
}

impl NameFilter {
    /// A filter that passes every name.
    pub fn pass_all() -> Self {
        Self::default()
    }

    /// Compile a filter from optional keep/drop patterns.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` when a pattern is not a valid regular
    /// expression.
    ///
    /// # Example
    ///
    /// ```
    /// use coqgraph::core::filter::NameFilter;
    ///
    /// let filter = NameFilter::new(Some("Interval"), Some("Private")).unwrap();
    /// assert!(filter.keeps("Interval.Real"));
    /// assert!(!filter.keeps("Interval.Private.Impl"));
    /// assert!(!filter.keeps("Other.Module"));
    /// ```
    pub fn new(keep: Option<&str>, drop: Option<&str>) -> Result<Self, FilterError> {
        let keep = keep
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| FilterError::InvalidKeepPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()?;
        let drop = drop
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| FilterError::InvalidDropPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()?;
        Ok(Self { keep, drop })
    }

    /// Whether a name survives the filter.
    pub fn keeps(&self, name: &str) -> bool {
        if let Some(keep) = &self.keep {
            if !keep.is_match(name) {
                return false;
            }
        }
        if let Some(drop) = &self.drop {
            if drop.is_match(name) {
                return false;
            }
        }
        true
    }
}
