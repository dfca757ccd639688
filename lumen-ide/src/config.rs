//! Completion presentation options.
//!
//! Options shape how collected completions are presented (sorting,
//! truncation, annotation); they never change which lookups run. Editors
//! pass them through their own configuration files, so the options
//! deserialize from TOML.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur loading completion options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid completion options: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Presentation options for one completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionOptions {
    /// Maximum number of items delivered to the consumer. `None` is
    /// unbounded. Truncation happens after sorting.
    pub max_results: Option<usize>,

    /// Annotate each item's detail text with its relation to the expected
    /// type.
    pub annotate_type_relations: bool,

    /// Sort items by kind and name before delivery. When disabled, items
    /// are delivered in sink order.
    pub sort_items: bool,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_results: None,
            annotate_type_relations: true,
            sort_items: true,
        }
    }
}

impl CompletionOptions {
    /// Parse options from a TOML document. Missing fields take defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unbounded_and_sorted() {
        let options = CompletionOptions::default();
        assert_eq!(options.max_results, None);
        assert!(options.annotate_type_relations);
        assert!(options.sort_items);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let options = CompletionOptions::from_toml("max_results = 16").unwrap();
        assert_eq!(options.max_results, Some(16));
        assert!(options.sort_items);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = CompletionOptions::from_toml("max_results = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
