// SPDX-License-Identifier: MPL-2.0

//! Option catalogs for the filters page.
//!
//! A catalog lists the filters the application offers and their options. It
//! is either built in or read from a JSON file such as:
//!
//! ```json
//! {
//!   "filters": [
//!     {
//!       "key": "color",
//!       "label": "color",
//!       "prefix": "color",
//!       "multiple": false,
//!       "options": [{ "id": 1, "label": "color-red", "color": "#f00" }]
//!     }
//!   ]
//! }
//! ```

use crate::widgets::dropdown_filter::{DropdownState, FilterOption};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Errors raised while loading a catalog file.
#[derive(Debug)]
pub enum CatalogError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file is not a valid catalog
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "Failed to read catalog: {}", e),
            CatalogError::Parse(e) => write!(f, "Invalid catalog: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

/// One filter of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Stable identifier used in logs.
    pub key: String,
    /// Caption shown above the filter (translation key or text).
    #[serde(default)]
    pub label: Option<String>,
    /// Prefix of the summary (translation key or text).
    #[serde(default)]
    pub prefix: Option<String>,
    /// Whether several options can be selected.
    #[serde(default)]
    pub multiple: bool,
    /// Options offered by the filter.
    #[serde(default)]
    pub options: Vec<FilterOption>,
}

impl CatalogFilter {
    /// Builds the widget state for this filter.
    ///
    /// `translate` resolves the caption and prefix, which are shown as given
    /// by the widget.
    pub fn to_state(&self, show_prefix: bool, translate: impl Fn(&str) -> String) -> DropdownState {
        let options = self.options.iter().cloned().map(FilterOption::shared).collect();
        let mut state = DropdownState::new(options)
            .multiple(self.multiple)
            .show_prefix(show_prefix);

        if let Some(label) = &self.label {
            state = state.label(translate(label));
        }
        if let Some(prefix) = &self.prefix {
            state = state.prefix(translate(prefix));
        }

        state
    }
}

/// The filters offered by the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub filters: Vec<CatalogFilter>,
}

impl Catalog {
    /// Parses a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reads the catalog at `path`, or the built-in one when `path` is empty
    /// or cannot be loaded.
    pub fn load_or_builtin(path: &str) -> Self {
        if path.is_empty() {
            return Self::builtin();
        }

        match Self::load(path) {
            Ok(catalog) => {
                tracing::info!(path, filters = catalog.filters.len(), "Loaded option catalog");
                catalog
            }
            Err(err) => {
                tracing::warn!(path, %err, "Falling back to built-in catalog");
                Self::builtin()
            }
        }
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        Self {
            filters: vec![
                CatalogFilter {
                    key: "color".to_string(),
                    label: None,
                    prefix: Some("color".to_string()),
                    multiple: false,
                    options: vec![
                        FilterOption::new("color-red").id(1).color("#f00"),
                        FilterOption::new("color-green").id(2).color("#0a0"),
                        FilterOption::new("color-blue").id(3).color("#00f"),
                    ],
                },
                CatalogFilter {
                    key: "category".to_string(),
                    label: Some("category".to_string()),
                    prefix: Some("category".to_string()),
                    multiple: true,
                    options: vec![
                        FilterOption::new("apple").id(1).group("fruits"),
                        FilterOption::new("carrot").id(1).group("vegetables"),
                        FilterOption::new("banana").id(2).group("fruits"),
                        FilterOption::new("spinach").id(2).group("vegetables"),
                        FilterOption::new("other").id(3),
                    ],
                },
                CatalogFilter {
                    key: "status".to_string(),
                    label: Some("status".to_string()),
                    prefix: Some("status".to_string()),
                    multiple: false,
                    options: vec![
                        FilterOption::new("status-open").id(1).icon("document-open-symbolic"),
                        FilterOption::new("status-late")
                            .id(2)
                            .icon("dialog-warning-symbolic")
                            .label_input("status-late-short"),
                        FilterOption::new("status-done").id(3).icon("object-select-symbolic"),
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::dropdown_filter::{GroupKey, Selection};

    #[test]
    fn test_from_json_str() {
        let json = r##"{
            "filters": [
                {
                    "key": "color",
                    "prefix": "Color",
                    "options": [
                        { "id": 1, "label": "Red", "color": "#f00" },
                        { "id": 2, "label": "Blue", "color": "#00f" }
                    ]
                },
                { "key": "tags", "multiple": true }
            ]
        }"##;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.filters.len(), 2);
        assert_eq!(catalog.filters[0].options.len(), 2);
        assert_eq!(catalog.filters[0].label, None);
        assert!(!catalog.filters[0].multiple);
        assert!(catalog.filters[1].multiple);
        assert!(catalog.filters[1].options.is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Catalog::from_json_str("{\"filters\": 3}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let err = Catalog::load("/nonexistent/filterdrop/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));

        let catalog = Catalog::load_or_builtin("/nonexistent/filterdrop/catalog.json");
        assert_eq!(catalog, Catalog::builtin());
        assert_eq!(Catalog::load_or_builtin(""), Catalog::builtin());
    }

    #[test]
    fn test_to_state() {
        let catalog = Catalog::builtin();
        let category = &catalog.filters[1];

        let state = category.to_state(true, |key| key.to_uppercase());
        assert!(state.multiple);
        assert!(state.show_prefix);
        assert_eq!(state.prefix.as_deref(), Some("CATEGORY"));
        assert_eq!(state.label.as_deref(), Some("CATEGORY"));
        assert_eq!(state.selected, Selection::None);

        let groups = state.grouped_options();
        let keys: Vec<GroupKey> = groups.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(
            keys,
            vec![
                GroupKey::Named("fruits".to_string()),
                GroupKey::Named("vegetables".to_string()),
                GroupKey::Ungrouped,
            ]
        );
    }
}
