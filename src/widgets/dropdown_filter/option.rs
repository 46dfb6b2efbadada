// SPDX-License-Identifier: MPL-2.0

//! Option types for the dropdown filter widget.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared handle to an option.
///
/// Selections hold these handles, so two options with identical fields but
/// separate allocations are distinct entries.
pub type OptionRef = Arc<FilterOption>;

/// A selectable entry of a dropdown filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    /// Display text (translation key or literal text).
    pub label: String,
    /// Numeric identity used by the color lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Bucket name for grouped rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Freedesktop icon name shown next to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Hex color (`#rgb` or `#rrggbb`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Text shown in place of the label when this option is the selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_input: Option<String>,
}

impl FilterOption {
    /// Creates an option with only a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn label_input(mut self, text: impl Into<String>) -> Self {
        self.label_input = Some(text.into());
        self
    }

    /// Wraps the option in a shared handle.
    pub fn shared(self) -> OptionRef {
        Arc::new(self)
    }

    /// Returns the declared group, treating an empty name as no group.
    pub fn group_name(&self) -> Option<&str> {
        self.group.as_deref().filter(|g| !g.is_empty())
    }

    /// Returns the override display text, treating an empty string as unset.
    pub fn display_override(&self) -> Option<&str> {
        self.label_input.as_deref().filter(|t| !t.is_empty())
    }

    /// Returns the group key this option is bucketed under.
    pub fn group_key(&self) -> GroupKey {
        match self.group_name() {
            Some(name) => GroupKey::Named(name.to_string()),
            None => GroupKey::Ungrouped,
        }
    }

    /// Parses the declared color into RGB bytes.
    pub fn parsed_color(&self) -> Option<[u8; 3]> {
        self.color.as_deref().and_then(parse_hex_color)
    }
}

/// Key of a bucket in the grouped view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Options that declared this group name.
    Named(String),
    /// Options without a group.
    Ungrouped,
}

impl GroupKey {
    /// Returns the group name, or `None` for the ungrouped bucket.
    pub fn name(&self) -> Option<&str> {
        match self {
            GroupKey::Named(name) => Some(name),
            GroupKey::Ungrouped => None,
        }
    }
}

/// Partitions options by group key.
///
/// Groups appear in first-encounter order and options keep their order within
/// each group.
pub fn group_options(options: &[OptionRef]) -> Vec<(GroupKey, Vec<OptionRef>)> {
    let mut groups: Vec<(GroupKey, Vec<OptionRef>)> = Vec::new();

    for option in options {
        let key = option.group_key();
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(Arc::clone(option)),
            None => groups.push((key, vec![Arc::clone(option)])),
        }
    }

    groups
}

/// Parses `#rgb` or `#rrggbb` (the `#` is optional).
pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, digit) in rgb.iter_mut().zip(hex.chars()) {
                let nibble = digit.to_digit(16)? as u8;
                *slot = nibble * 17;
            }
            Some(rgb)
        }
        6 => {
            let mut rgb = [0u8; 3];
            for (i, slot) in rgb.iter_mut().enumerate() {
                *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
            }
            Some(rgb)
        }
        _ => None,
    }
}
