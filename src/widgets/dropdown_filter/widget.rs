// SPDX-License-Identifier: MPL-2.0

//! Dropdown filter widget builder and rendering.

use super::message::DropdownMessage;
use super::option::{FilterOption, GroupKey, OptionRef};
use super::state::DropdownState;
use crate::i18n::Translate;
use cosmic::iced::{Alignment, Color, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};
use std::sync::Arc;

/// Message id of the apply button label.
pub const APPLY_KEY: &str = "filter-apply";
/// Message id of the cancel button label.
pub const CANCEL_KEY: &str = "filter-cancel";
/// Message id of the text shown when there are no options.
pub const NO_OPTIONS_KEY: &str = "filter-no-options";

/// Builder for the dropdown filter widget.
///
/// # Type Parameters
///
/// - `T`: The translation source used for labels
/// - `Message`: The parent's message type
///
/// # Example
///
/// ```ignore
/// DropdownFilter::new(&state, &*LANGUAGE_LOADER, |msg| Message::Filter(0, msg))
///     .width(Length::Fixed(280.0))
///     .into()
/// ```
pub struct DropdownFilter<'a, T, Message>
where
    T: Translate + ?Sized,
    Message: Clone + 'static,
{
    state: &'a DropdownState,
    translator: &'a T,
    on_message: Box<dyn Fn(DropdownMessage) -> Message + 'a>,
    width: Length,
    spacing: u16,
}

impl<'a, T, Message> DropdownFilter<'a, T, Message>
where
    T: Translate + ?Sized,
    Message: Clone + 'static,
{
    /// Creates a new dropdown filter widget.
    ///
    /// # Arguments
    ///
    /// - `state`: The dropdown state (owned by parent)
    /// - `translator`: Resolves option labels and the placeholder text
    /// - `on_message`: Function to wrap `DropdownMessage` into the parent's `Message` type
    pub fn new(
        state: &'a DropdownState,
        translator: &'a T,
        on_message: impl Fn(DropdownMessage) -> Message + 'a,
    ) -> Self {
        Self {
            state,
            translator,
            on_message: Box::new(on_message),
            width: Length::Fixed(280.0),
            spacing: 4,
        }
    }

    /// Sets the width of the summary button and the menu.
    ///
    /// Default is `Length::Fixed(280.0)`.
    pub fn width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    /// Sets the spacing between the widget's parts.
    ///
    /// Default is 4.
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Renders the button that shows the display label and opens the menu.
    fn render_summary(&self) -> Element<'a, Message> {
        let expand_icon = if self.state.open {
            "pan-up-symbolic"
        } else {
            "pan-down-symbolic"
        };

        let swatch = self
            .state
            .selected_color()
            .and_then(super::option::parse_hex_color)
            .map(|[r, g, b]| {
                widget::text::body("\u{25cf}")
                    .class(cosmic::style::Text::Color(Color::from_rgb8(r, g, b)))
            });

        let row = widget::row::with_capacity(3)
            .push_maybe(swatch)
            .push(widget::text::body(self.state.display_label(self.translator)).width(Length::Fill))
            .push(icon::from_name(expand_icon).size(16))
            .align_y(Alignment::Center)
            .spacing(8);

        widget::button::custom(row)
            .on_press((self.on_message)(DropdownMessage::ToggleMenu))
            .width(self.width)
            .class(cosmic::theme::Button::Standard)
            .into()
    }

    /// Renders a single option row.
    fn render_option(&self, index: usize, option: &FilterOption) -> Element<'a, Message> {
        let is_selected = self.state.is_selected(option);

        let swatch = option.parsed_color().map(|[r, g, b]| {
            widget::text::body("\u{25cf}").class(cosmic::style::Text::Color(Color::from_rgb8(r, g, b)))
        });

        let row = widget::row::with_capacity(4)
            .push_maybe(
                option
                    .icon
                    .as_deref()
                    .map(|name| icon::from_name(name.to_string()).size(16)),
            )
            .push_maybe(swatch)
            .push(widget::text::body(self.translator.instant(&option.label)).width(Length::Fill))
            .push_maybe(is_selected.then(|| icon::from_name("object-select-symbolic").size(16)))
            .align_y(Alignment::Center)
            .spacing(8);

        let container_class = if is_selected {
            cosmic::style::Container::Primary
        } else {
            cosmic::style::Container::default()
        };

        widget::mouse_area(
            widget::container(row)
                .padding(8)
                .width(Length::Fill)
                .class(container_class),
        )
        .on_press((self.on_message)(DropdownMessage::Select(index)))
        .into()
    }

    /// Renders one group: an optional heading followed by its rows.
    fn render_group(&self, key: &GroupKey, options: &[OptionRef]) -> Element<'a, Message> {
        let mut column = widget::column::with_capacity(options.len() + 1).spacing(2);

        if let Some(name) = key.name() {
            column = column.push(
                widget::container(widget::text::heading(self.translator.instant(name)))
                    .padding([4, 8]),
            );
        }

        for option in options {
            if let Some(index) = self.state.options.iter().position(|o| Arc::ptr_eq(o, option)) {
                column = column.push(self.render_option(index, option));
            }
        }

        column.into()
    }

    /// Renders the expanded menu.
    fn render_menu(&self) -> Element<'a, Message> {
        let groups = self.state.grouped_options();
        let mut column = widget::column::with_capacity(groups.len() + 1).spacing(self.spacing);

        if groups.is_empty() {
            column = column.push(
                widget::container(widget::text::caption(self.translator.instant(NO_OPTIONS_KEY)))
                    .padding(16)
                    .width(Length::Fill)
                    .align_x(cosmic::iced::alignment::Horizontal::Center),
            );
        }

        for (key, options) in &groups {
            column = column.push(self.render_group(key, options));
        }

        let mut actions = widget::row::with_capacity(3)
            .push(widget::Space::with_width(Length::Fill))
            .push(
                widget::button::standard(self.translator.instant(CANCEL_KEY))
                    .on_press((self.on_message)(DropdownMessage::Cancel)),
            )
            .spacing(8)
            .align_y(Alignment::Center);

        if self.state.multiple {
            actions = actions.push(
                widget::button::suggested(self.translator.instant(APPLY_KEY))
                    .on_press((self.on_message)(DropdownMessage::Confirm)),
            );
        }

        column = column.push(actions);

        widget::container(column)
            .padding(8)
            .width(self.width)
            .class(cosmic::style::Container::Card)
            .into()
    }

    /// Builds the widget and returns it as an Element.
    pub fn build(self) -> Element<'a, Message> {
        // The clear button sits beside the summary button, so pressing it
        // never toggles the menu.
        let clear_button = self.state.has_selection().then(|| {
            widget::button::icon(icon::from_name("edit-clear-symbolic"))
                .on_press((self.on_message)(DropdownMessage::Clear))
                .class(cosmic::theme::Button::Standard)
        });

        let header = widget::row::with_capacity(2)
            .push(self.render_summary())
            .push_maybe(clear_button)
            .align_y(Alignment::Center)
            .spacing(self.spacing);

        let caption = self
            .state
            .label
            .as_deref()
            .map(|label| widget::text::caption(self.translator.instant(label)));

        widget::column::with_capacity(3)
            .push_maybe(caption)
            .push(header)
            .push_maybe(self.state.open.then(|| self.render_menu()))
            .spacing(self.spacing)
            .into()
    }
}

impl<'a, T, Message> From<DropdownFilter<'a, T, Message>> for Element<'a, Message>
where
    T: Translate + ?Sized,
    Message: Clone + 'static,
{
    fn from(filter: DropdownFilter<'a, T, Message>) -> Self {
        filter.build()
    }
}
