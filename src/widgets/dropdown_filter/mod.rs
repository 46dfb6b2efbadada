// SPDX-License-Identifier: MPL-2.0

//! Dropdown filter widget for picking one or several options.
//!
//! The widget shows a summary of the current value (optionally prefixed) and,
//! when expanded, the options bucketed by group. In single mode a click on an
//! option confirms it immediately; in multiple mode clicks toggle options and
//! the apply button confirms the collection.
//!
//! # Example
//!
//! ```ignore
//! use crate::widgets::dropdown_filter::{DropdownEvent, DropdownFilter, DropdownMessage, DropdownState};
//!
//! // In your app state
//! struct AppModel {
//!     colors: DropdownState,
//! }
//!
//! // In your message enum
//! enum Message {
//!     Colors(DropdownMessage),
//! }
//!
//! // In your view function
//! fn view(&self) -> Element<'_, Message> {
//!     DropdownFilter::new(&self.colors, &*LANGUAGE_LOADER, Message::Colors).into()
//! }
//!
//! // In your update function
//! fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Colors(msg) => match self.colors.update(msg) {
//!             Some(DropdownEvent::Confirm(value)) => self.apply_colors(value),
//!             Some(DropdownEvent::Cancel) => self.colors.set_value(self.applied.clone()),
//!             None => {}
//!         },
//!     }
//!     Task::none()
//! }
//! ```

mod message;
mod option;
mod state;
mod widget;

pub use message::{DropdownEvent, DropdownMessage};
pub use option::{FilterOption, GroupKey, OptionRef};
pub use state::{DropdownState, Selection};
pub use widget::DropdownFilter;
