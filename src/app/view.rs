// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The controls form the base layer; every live toast is stacked on top of
//! it through the overlay root the application exposes.

use super::{App, Message};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::{Driver, Kind, Toast};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(controls(app));

    for toast in app.toasts.iter().map(Driver::notification) {
        let id = toast.id();
        if let Some(layer) = Toast::view(toast, app) {
            stack = stack.push(layer.map(move |m| Message::Toast(id, m)));
        }
    }

    stack.into()
}

fn controls(app: &App) -> Element<'_, Message> {
    let spawn_row = Kind::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &kind| {
            row.push(button(Text::new(kind.name())).on_press(Message::Spawn(Some(kind))))
        })
        .push(button(Text::new("untyped")).on_press(Message::Spawn(None)));

    let overlay_label = if app.overlay.is_some() {
        "Detach overlay"
    } else {
        "Attach overlay"
    };
    let actions = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Sticky error")).on_press(Message::SpawnSticky))
        .push(button(Text::new("Unmount all")).on_press(Message::UnmountAll))
        .push(button(Text::new(overlay_label)).on_press(Message::ToggleOverlay));

    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new("Toast notifications").size(typography::TITLE_MD));

    if let Some(warning) = &app.config_warning {
        column = column.push(
            Text::new(warning.as_str())
                .size(typography::BODY)
                .color(palette::WARNING_500),
        );
    }

    column = column.push(spawn_row).push(actions);

    let log = app.log.iter().fold(
        Column::new().spacing(spacing::XXS),
        |log, entry| log.push(Text::new(entry.as_str()).size(typography::CAPTION)),
    );
    column = column.push(log);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
