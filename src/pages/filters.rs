// SPDX-License-Identifier: MPL-2.0

//! Filters page view for the Filterdrop application.

use crate::app::{AppModel, FilterEntry, Message};
use crate::fl;
use crate::i18n::{Translate, LANGUAGE_LOADER};
use crate::widgets::dropdown_filter::{DropdownFilter, Selection};
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget;

/// View for the Filters page
pub fn view(app: &AppModel, space_s: u16, space_m: u16) -> Element<'_, Message> {
    let header = widget::text::title1(fl!("filters"));

    let settings_section = cosmic::widget::settings::section().add(
        cosmic::widget::settings::item::builder(fl!("show-prefix"))
            .description(fl!("show-prefix-description"))
            .control(widget::toggler(app.config.show_prefix).on_toggle(Message::ShowPrefixToggled)),
    );

    // Filters sit side by side; each expands downwards when opened.
    let filters_row = widget::row::with_children(app.filters.iter().enumerate().map(
        |(index, entry)| {
            DropdownFilter::new(&entry.state, &*LANGUAGE_LOADER, move |msg| {
                Message::Filter(index, msg)
            })
            .spacing(space_s)
            .into()
        },
    ))
    .spacing(space_m)
    .align_y(Alignment::Start);

    let applied_rows: Vec<Element<'_, Message>> = app
        .filters
        .iter()
        .filter(|entry| !entry.applied.is_empty())
        .map(applied_row)
        .collect();

    let applied_content: Element<'_, Message> = if applied_rows.is_empty() {
        widget::text::caption(fl!("nothing-applied")).into()
    } else {
        widget::column::with_children(applied_rows).spacing(4).into()
    };

    let applied_card = widget::container(
        widget::column::with_capacity(2)
            .push(widget::text::title4(fl!("applied-filters")))
            .push(applied_content)
            .spacing(space_s),
    )
    .padding(space_s)
    .width(Length::Fill)
    .class(cosmic::style::Container::Card);

    widget::scrollable(
        widget::column::with_capacity(4)
            .push(header)
            .push(settings_section)
            .push(filters_row)
            .push(applied_card)
            .spacing(space_m)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// One line of the applied filters card
fn applied_row(entry: &FilterEntry) -> Element<'static, Message> {
    let name = entry
        .state
        .prefix
        .clone()
        .unwrap_or_else(|| entry.key.clone());

    widget::row::with_capacity(2)
        .push(widget::text::body(format!("{}:", name)).width(Length::Fixed(120.0)))
        .push(widget::text::caption(describe(&entry.applied)))
        .spacing(8)
        .into()
}

/// Localized labels of a value, comma separated.
fn describe(selection: &Selection) -> String {
    selection
        .options()
        .iter()
        .map(|option| LANGUAGE_LOADER.instant(&option.label))
        .collect::<Vec<_>>()
        .join(", ")
}
