// SPDX-License-Identifier: MPL-2.0

//! State management for the dropdown filter widget.

use super::message::{DropdownEvent, DropdownMessage};
use super::option::{group_options, FilterOption, GroupKey, OptionRef};
use crate::i18n::Translate;
use std::sync::Arc;

/// Message id of the placeholder shown when nothing is selected.
pub const ALL_KEY: &str = "filter-all";

/// The value held by a dropdown filter.
///
/// Single mode uses `None` and `Single`, multiple mode uses `Multiple`. The
/// widget does not reconcile a value whose shape disagrees with its mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    /// Nothing selected (single mode).
    #[default]
    None,
    /// One selected option (single mode).
    Single(OptionRef),
    /// Ordered selected options (multiple mode).
    Multiple(Vec<OptionRef>),
}

impl Selection {
    /// Returns the empty shape for the given mode.
    pub fn empty(multiple: bool) -> Self {
        if multiple {
            Selection::Multiple(Vec::new())
        } else {
            Selection::None
        }
    }

    /// Returns true for `None` and for an empty collection.
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::None => true,
            Selection::Single(_) => false,
            Selection::Multiple(options) => options.is_empty(),
        }
    }

    /// Returns the selected options as a slice.
    pub fn options(&self) -> &[OptionRef] {
        match self {
            Selection::None => &[],
            Selection::Single(option) => std::slice::from_ref(option),
            Selection::Multiple(options) => options,
        }
    }
}

/// State for the dropdown filter widget.
///
/// This state is owned by the parent component and passed to the widget.
#[derive(Debug, Clone, Default)]
pub struct DropdownState {
    /// Every option offered by the menu.
    pub options: Vec<OptionRef>,
    /// Whether several options can be selected at once.
    pub multiple: bool,
    /// Caption shown above the widget.
    pub label: Option<String>,
    /// Text put in front of the display label.
    pub prefix: Option<String>,
    /// Whether the prefix is shown.
    pub show_prefix: bool,
    /// Current value.
    pub selected: Selection,
    /// Whether the option menu is expanded.
    pub open: bool,
}

impl DropdownState {
    /// Creates a single-mode state over the given options.
    pub fn new(options: Vec<OptionRef>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Switches between single and multiple mode.
    ///
    /// The current value is left as it is.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn show_prefix(mut self, show: bool) -> Self {
        self.show_prefix = show;
        self
    }

    pub fn set_show_prefix(&mut self, show: bool) {
        self.show_prefix = show;
    }

    /// Assigns the value from outside the widget.
    ///
    /// `None` and an empty collection become the empty shape of the current
    /// mode; anything else is stored unchanged.
    pub fn set_value(&mut self, value: Selection) {
        self.selected = if value.is_empty() {
            Selection::empty(self.multiple)
        } else {
            value
        };
    }

    /// Returns true if anything is selected.
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Computes the summary text shown on the widget.
    pub fn display_label<T: Translate + ?Sized>(&self, translator: &T) -> String {
        let text = match &self.selected {
            Selection::Single(option) => {
                translator.instant(option.display_override().unwrap_or(&option.label))
            }
            Selection::Multiple(options) if !options.is_empty() => options
                .iter()
                .map(|option| translator.instant(&option.label))
                .collect::<Vec<_>>()
                .join(", "),
            _ => translator.instant(ALL_KEY),
        };

        match self.prefix.as_deref() {
            Some(prefix) if self.show_prefix && !prefix.is_empty() => format!("{prefix}: {text}"),
            _ => text,
        }
    }

    /// Partitions the option list by group.
    pub fn grouped_options(&self) -> Vec<(GroupKey, Vec<OptionRef>)> {
        group_options(&self.options)
    }

    /// Membership test used to mark rows in the menu.
    ///
    /// A collection matches by label; a single value matches only the very
    /// same option object.
    pub fn is_selected(&self, option: &FilterOption) -> bool {
        match &self.selected {
            Selection::Multiple(options) => options.iter().any(|o| o.label == option.label),
            Selection::Single(current) => std::ptr::eq(Arc::as_ptr(current), option),
            Selection::None => false,
        }
    }

    /// Looks up the color of the selected option in the option list.
    ///
    /// Only meaningful in single mode. Options are matched by id, and also by
    /// group when both sides declare one.
    pub fn selected_color(&self) -> Option<&str> {
        if self.multiple {
            return None;
        }
        let Selection::Single(current) = &self.selected else {
            return None;
        };

        self.options
            .iter()
            .find(|option| {
                let same_id = option.id == current.id;
                match (option.group_name(), current.group_name()) {
                    (Some(group), Some(current_group)) => same_id && group == current_group,
                    _ => same_id,
                }
            })
            .and_then(|option| option.color.as_deref())
    }

    /// Handles a message from the widget.
    ///
    /// Returns the event the parent should act on, if any.
    pub fn update(&mut self, message: DropdownMessage) -> Option<DropdownEvent> {
        match message {
            DropdownMessage::ToggleMenu => {
                self.open = !self.open;
                None
            }
            DropdownMessage::Select(index) => {
                let Some(option) = self.options.get(index).cloned() else {
                    tracing::debug!(index, "ignoring selection of unknown option");
                    return None;
                };
                self.select(option)
            }
            DropdownMessage::Confirm => {
                self.open = false;
                Some(DropdownEvent::Confirm(self.selected.clone()))
            }
            DropdownMessage::Cancel => {
                self.open = false;
                Some(DropdownEvent::Cancel)
            }
            DropdownMessage::Clear => self.clear(),
        }
    }

    /// Applies a click on an option.
    ///
    /// Multiple mode toggles the option in or out of the collection, comparing
    /// by identity, and emits nothing. Single mode replaces the value and
    /// confirms it right away.
    pub fn select(&mut self, option: OptionRef) -> Option<DropdownEvent> {
        if self.multiple {
            let mut current: Vec<OptionRef> = Vec::new();
            if let Selection::Multiple(options) = &self.selected {
                for existing in options {
                    if !current.iter().any(|o| Arc::ptr_eq(o, existing)) {
                        current.push(Arc::clone(existing));
                    }
                }
            }

            match current.iter().position(|o| Arc::ptr_eq(o, &option)) {
                Some(index) => {
                    current.remove(index);
                }
                None => current.push(option),
            }

            self.selected = Selection::Multiple(current);
            None
        } else {
            self.selected = Selection::Single(Arc::clone(&option));
            self.open = false;
            Some(DropdownEvent::Confirm(Selection::Single(option)))
        }
    }

    /// Resets the value to the empty shape and confirms it.
    ///
    /// The menu is neither opened nor closed.
    pub fn clear(&mut self) -> Option<DropdownEvent> {
        self.selected = Selection::empty(self.multiple);
        Some(DropdownEvent::Confirm(Selection::empty(self.multiple)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Dictionary translator; unknown keys come back unchanged.
    struct Dictionary(HashMap<&'static str, &'static str>);

    impl Dictionary {
        fn new(entries: &[(&'static str, &'static str)]) -> Self {
            Self(entries.iter().copied().collect())
        }
    }

    impl Translate for Dictionary {
        fn instant(&self, key: &str) -> String {
            self.0.get(key).copied().unwrap_or(key).to_string()
        }
    }

    fn dictionary() -> Dictionary {
        Dictionary::new(&[
            (ALL_KEY, "All"),
            ("color-red", "Red"),
            ("color-blue", "Blue"),
            ("late-only", "Only late"),
        ])
    }

    fn colors() -> Vec<OptionRef> {
        vec![
            FilterOption::new("color-red").id(1).color("#f00").shared(),
            FilterOption::new("color-blue").id(2).color("#00f").shared(),
        ]
    }

    fn labels(selection: &Selection) -> Vec<String> {
        selection.options().iter().map(|o| o.label.clone()).collect()
    }

    #[test]
    fn test_set_value_normalizes_empty() {
        let mut single = DropdownState::new(colors());
        single.set_value(Selection::Multiple(Vec::new()));
        assert_eq!(single.selected, Selection::None);
        single.set_value(Selection::None);
        assert_eq!(single.selected, Selection::None);

        let mut multiple = DropdownState::new(colors()).multiple(true);
        assert_eq!(multiple.selected, Selection::None);
        multiple.set_value(Selection::None);
        assert_eq!(multiple.selected, Selection::Multiple(Vec::new()));
        multiple.set_value(Selection::Multiple(Vec::new()));
        assert_eq!(multiple.selected, Selection::Multiple(Vec::new()));
    }

    #[test]
    fn test_set_value_keeps_mismatched_shape() {
        let options = colors();
        let mut multiple = DropdownState::new(options.clone()).multiple(true);
        multiple.set_value(Selection::Single(Arc::clone(&options[0])));
        assert!(matches!(multiple.selected, Selection::Single(_)));
    }

    #[test]
    fn test_display_label_all() {
        let tr = dictionary();
        let single = DropdownState::new(colors());
        assert_eq!(single.display_label(&tr), "All");

        let multiple = DropdownState::new(colors()).multiple(true);
        assert_eq!(multiple.display_label(&tr), "All");

        let prefixed = DropdownState::new(colors()).prefix("Color").show_prefix(true);
        assert_eq!(prefixed.display_label(&tr), "Color: All");

        let hidden = DropdownState::new(colors()).prefix("Color");
        assert_eq!(hidden.display_label(&tr), "All");

        let empty_prefix = DropdownState::new(colors()).prefix("").show_prefix(true);
        assert_eq!(empty_prefix.display_label(&tr), "All");
    }

    #[test]
    fn test_display_label_single_and_override() {
        let tr = dictionary();
        let late = FilterOption::new("Late").label_input("late-only").shared();
        let mut state = DropdownState::new(vec![Arc::clone(&late)])
            .prefix("Status")
            .show_prefix(true);

        state.set_value(Selection::Single(late));
        assert_eq!(state.display_label(&tr), "Status: Only late");

        let plain = FilterOption::new("color-red").shared();
        state.set_value(Selection::Single(plain));
        assert_eq!(state.display_label(&tr), "Status: Red");
    }

    #[test]
    fn test_display_label_multiple_joins_labels() {
        let tr = dictionary();
        let options = colors();
        let mut state = DropdownState::new(options.clone()).multiple(true);

        state.update(DropdownMessage::Select(1));
        state.update(DropdownMessage::Select(0));
        assert_eq!(state.display_label(&tr), "Blue, Red");

        // Overrides only apply to single values.
        let with_override = FilterOption::new("color-red").label_input("late-only").shared();
        state.set_value(Selection::Multiple(vec![with_override]));
        assert_eq!(state.display_label(&tr), "Red");
    }

    #[test]
    fn test_multiple_toggle_round_trip() {
        let options = colors();
        let mut state = DropdownState::new(options.clone()).multiple(true);
        state.update(DropdownMessage::Select(0));
        let before = labels(&state.selected);

        assert_eq!(state.update(DropdownMessage::Select(1)), None);
        assert_eq!(labels(&state.selected), vec!["color-red", "color-blue"]);
        assert_eq!(state.update(DropdownMessage::Select(1)), None);
        assert_eq!(labels(&state.selected), before);
    }

    #[test]
    fn test_multiple_toggle_compares_identity() {
        let red = FilterOption::new("color-red").id(1).shared();
        let twin = FilterOption::new("color-red").id(1).shared();
        let mut state = DropdownState::new(vec![Arc::clone(&red), Arc::clone(&twin)]).multiple(true);

        state.update(DropdownMessage::Select(0));
        state.update(DropdownMessage::Select(1));

        let Selection::Multiple(selected) = &state.selected else {
            panic!("expected a collection");
        };
        assert_eq!(selected.len(), 2);
        assert!(Arc::ptr_eq(&selected[0], &red));
        assert!(Arc::ptr_eq(&selected[1], &twin));
    }

    #[test]
    fn test_multiple_toggle_does_not_confirm_or_close() {
        let mut state = DropdownState::new(colors()).multiple(true);
        state.update(DropdownMessage::ToggleMenu);
        assert!(state.open);

        assert_eq!(state.update(DropdownMessage::Select(0)), None);
        assert!(state.open);

        let event = state.update(DropdownMessage::Confirm);
        assert_eq!(event, Some(DropdownEvent::Confirm(state.selected.clone())));
        assert_eq!(labels(&state.selected), vec!["color-red"]);
        assert!(!state.open);
    }

    #[test]
    fn test_single_select_replaces_and_confirms() {
        let options = colors();
        let mut state = DropdownState::new(options.clone());
        state.update(DropdownMessage::ToggleMenu);

        let first = state.update(DropdownMessage::Select(0));
        assert_eq!(first, Some(DropdownEvent::Confirm(Selection::Single(Arc::clone(&options[0])))));
        assert!(!state.open);

        let second = state.update(DropdownMessage::Select(1));
        assert_eq!(second, Some(DropdownEvent::Confirm(Selection::Single(Arc::clone(&options[1])))));
        let Selection::Single(current) = &state.selected else {
            panic!("expected a single value");
        };
        assert!(Arc::ptr_eq(current, &options[1]));
    }

    #[test]
    fn test_out_of_range_select_is_ignored() {
        let mut state = DropdownState::new(colors());
        assert_eq!(state.update(DropdownMessage::Select(7)), None);
        assert_eq!(state.selected, Selection::None);
    }

    #[test]
    fn test_clear_resets_and_confirms_empty_shape() {
        let mut single = DropdownState::new(colors());
        single.update(DropdownMessage::Select(1));
        assert!(single.has_selection());
        assert_eq!(single.update(DropdownMessage::Clear), Some(DropdownEvent::Confirm(Selection::None)));
        assert_eq!(single.selected, Selection::None);
        assert!(!single.has_selection());

        let mut multiple = DropdownState::new(colors()).multiple(true);
        multiple.update(DropdownMessage::Select(0));
        multiple.update(DropdownMessage::ToggleMenu);
        assert_eq!(
            multiple.update(DropdownMessage::Clear),
            Some(DropdownEvent::Confirm(Selection::Multiple(Vec::new())))
        );
        assert_eq!(multiple.selected, Selection::Multiple(Vec::new()));
        assert!(multiple.open);
    }

    #[test]
    fn test_cancel_keeps_selection() {
        let mut state = DropdownState::new(colors()).multiple(true);
        state.update(DropdownMessage::Select(0));
        state.update(DropdownMessage::ToggleMenu);

        assert_eq!(state.update(DropdownMessage::Cancel), Some(DropdownEvent::Cancel));
        assert_eq!(labels(&state.selected), vec!["color-red"]);
        assert!(!state.open);
    }

    #[test]
    fn test_is_selected_multiple_compares_labels() {
        let options = colors();
        let mut state = DropdownState::new(options.clone()).multiple(true);
        state.update(DropdownMessage::Select(0));

        let lookalike = FilterOption::new("color-red");
        assert!(state.is_selected(&lookalike));
        assert!(!state.is_selected(&options[1]));
    }

    #[test]
    fn test_is_selected_single_compares_identity() {
        let options = colors();
        let mut state = DropdownState::new(options.clone());
        assert!(!state.is_selected(&options[0]));

        state.update(DropdownMessage::Select(0));
        assert!(state.is_selected(&options[0]));

        let lookalike = (*options[0]).clone();
        assert!(!state.is_selected(&lookalike));
    }

    #[test]
    fn test_selected_color() {
        let tr = dictionary();
        let options = colors();
        let mut state = DropdownState::new(options.clone());
        assert_eq!(state.selected_color(), None);

        let event = state.update(DropdownMessage::Select(1));
        assert_eq!(state.display_label(&tr), "Blue");
        assert_eq!(state.selected_color(), Some("#00f"));
        assert_eq!(event, Some(DropdownEvent::Confirm(Selection::Single(Arc::clone(&options[1])))));
    }

    #[test]
    fn test_selected_color_disambiguates_by_group() {
        let options = vec![
            FilterOption::new("a").id(1).group("G1").color("#111").shared(),
            FilterOption::new("b").id(1).group("G2").color("#222").shared(),
        ];
        let mut state = DropdownState::new(options.clone());

        state.set_value(Selection::Single(FilterOption::new("b").id(1).group("G2").shared()));
        assert_eq!(state.selected_color(), Some("#222"));

        // Without a group on the selection the first id match wins.
        state.set_value(Selection::Single(FilterOption::new("b").id(1).shared()));
        assert_eq!(state.selected_color(), Some("#111"));

        state.set_value(Selection::Single(FilterOption::new("c").id(9).shared()));
        assert_eq!(state.selected_color(), None);
    }

    #[test]
    fn test_selected_color_none_in_multiple_mode() {
        let options = colors();
        let mut state = DropdownState::new(options.clone()).multiple(true);
        state.set_value(Selection::Single(Arc::clone(&options[0])));
        assert_eq!(state.selected_color(), None);
    }
}
