//! The filter configuration record.
//!
//! This is the only state edgelens persists: which direction the filter
//! runs (whitelist/blacklist), the raw comma-separated type list, and the
//! two activity toggles. The raw list is kept verbatim for display; the
//! engine always re-derives the normalized token list at evaluation time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the listed edge types are the only ones shown, or the only
/// ones hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    /// Show only the listed types.
    #[serde(rename = "whitelist")]
    Include,
    /// Hide the listed types, show everything else.
    #[serde(rename = "blacklist")]
    Exclude,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::Include => write!(f, "whitelist"),
            FilterMode::Exclude => write!(f, "blacklist"),
        }
    }
}

/// The persisted filter configuration.
///
/// Field names and mode values in the serialized form match the original
/// flat record (`mode`, `edgeTypes`, `filterEnabled`, `hideIsolated`), so
/// existing settings files keep working. Missing fields fall back to the
/// defaults, which gives merge-over-defaults semantics for partial data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    /// Filter direction.
    pub mode: FilterMode,
    /// Raw comma-separated edge type list, exactly as the user typed it.
    pub edge_types: String,
    /// When false the engine shows every edge regardless of mode or list.
    pub filter_enabled: bool,
    /// When true the engine hides nodes with no visible incident edges.
    pub hide_isolated: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            mode: FilterMode::Exclude,
            edge_types: String::new(),
            filter_enabled: false,
            hide_isolated: false,
        }
    }
}

impl FilterConfig {
    /// Derive the effective type list from the raw string: split on commas,
    /// trim each token, drop tokens that are empty after trimming.
    ///
    /// Always computed fresh from `edge_types` — the split is never cached.
    /// Malformed input (trailing commas, runs of commas, whitespace-only
    /// tokens) degrades to a shorter or empty list, never an error.
    pub fn normalized_types(&self) -> Vec<String> {
        self.edge_types
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_record() {
        let config = FilterConfig::default();
        assert_eq!(config.mode, FilterMode::Exclude);
        assert_eq!(config.edge_types, "");
        assert!(!config.filter_enabled);
        assert!(!config.hide_isolated);
    }

    #[test]
    fn normalize_splits_and_trims() {
        let config = FilterConfig {
            edge_types: " parent, child ,sibling".to_string(),
            ..Default::default()
        };
        assert_eq!(config.normalized_types(), vec!["parent", "child", "sibling"]);
    }

    #[test]
    fn normalize_drops_empty_tokens() {
        let config = FilterConfig {
            edge_types: "parent,, ,child,".to_string(),
            ..Default::default()
        };
        assert_eq!(config.normalized_types(), vec!["parent", "child"]);
    }

    #[test]
    fn normalize_empty_string_is_empty_list() {
        let config = FilterConfig::default();
        assert!(config.normalized_types().is_empty());

        let config = FilterConfig {
            edge_types: " , ,,".to_string(),
            ..Default::default()
        };
        assert!(config.normalized_types().is_empty());
    }

    #[test]
    fn normalize_preserves_order_and_duplicates() {
        let config = FilterConfig {
            edge_types: "b,a,b".to_string(),
            ..Default::default()
        };
        assert_eq!(config.normalized_types(), vec!["b", "a", "b"]);
    }

    #[test]
    fn serializes_with_original_field_names() {
        let config = FilterConfig {
            mode: FilterMode::Include,
            edge_types: "parent".to_string(),
            filter_enabled: true,
            hide_isolated: false,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["mode"], "whitelist");
        assert_eq!(json["edgeTypes"], "parent");
        assert_eq!(json["filterEnabled"], true);
        assert_eq!(json["hideIsolated"], false);
    }

    #[test]
    fn partial_data_merges_over_defaults() {
        let config: FilterConfig =
            serde_json::from_str(r#"{"edgeTypes": "parent", "filterEnabled": true}"#).unwrap();
        assert_eq!(config.mode, FilterMode::Exclude);
        assert_eq!(config.edge_types, "parent");
        assert!(config.filter_enabled);
        assert!(!config.hide_isolated);
    }

    #[test]
    fn empty_object_is_all_defaults() {
        let config: FilterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FilterConfig::default());
    }
}
