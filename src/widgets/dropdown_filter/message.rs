// SPDX-License-Identifier: MPL-2.0

//! Messages emitted by the dropdown filter widget.

use super::state::Selection;

/// Messages emitted by the rendered widget.
///
/// These should be wrapped by the parent's message type and passed back to
/// `DropdownState::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownMessage {
    /// The summary button was pressed; opens or closes the option menu.
    ToggleMenu,
    /// An option row was clicked.
    ///
    /// Holds the index of the option in the state's option list.
    Select(usize),
    /// The apply button of a multiple-mode menu was pressed.
    Confirm,
    /// The cancel button was pressed.
    Cancel,
    /// The clear button next to the summary was pressed.
    Clear,
}

/// Events returned by `DropdownState::update` for the parent to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownEvent {
    /// The user committed a value: a single option, a collection, or the
    /// empty shape after a clear.
    Confirm(Selection),
    /// The user dismissed the menu.
    Cancel,
}
