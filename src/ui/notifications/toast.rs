// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering a notification.
//!
//! A toast is a small card anchored to the overlay root: an optional icon,
//! a title, the message, and a close affordance. The card fades with the
//! notification's transition and reports its height through [`measured`].

use super::kind::Kind;
use super::notification::{Message, Notification};
use super::overlay::MountPoint;
use super::config::{Content, Emphasis, Fragment};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::widgets::measured;
use iced::font::Weight;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length, Padding, Theme};
use std::time::Instant;

/// Style token of the close affordance.
pub const CLOSE_TOKEN: &str = "close";

/// Icons shown in front of the text group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet<'a> {
    /// Token derived from the notification kind.
    pub type_token: Option<&'static str>,
    /// Caller-supplied icon class, rendered independently of the kind.
    pub custom: Option<&'a str>,
}

impl<'a> IconSet<'a> {
    #[must_use]
    pub fn resolve(kind: Option<Kind>, icon_class: Option<&'a str>) -> Self {
        Self {
            type_token: kind.map(Kind::icon_token),
            custom: icon_class.filter(|token| !token.trim().is_empty()),
        }
    }

    /// Whether the text group carries the "has-icon" modifier.
    #[must_use]
    pub fn has_icon(&self) -> bool {
        self.type_token.is_some() || self.custom.is_some()
    }
}

/// Glyph drawn for a known icon token.
#[must_use]
pub fn glyph(token: &str) -> Option<&'static str> {
    match token {
        "circle-check" => Some("\u{2714}"),
        "information" => Some("\u{2139}"),
        "warning" => Some("\u{26A0}"),
        "circle-cross" => Some("\u{2716}"),
        CLOSE_TOKEN => Some("\u{00D7}"),
        _ => None,
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders `notification` into the overlay root supplied by `mount`.
    ///
    /// Returns `None` when no overlay root exists or the notification has
    /// been removed.
    pub fn view<'a>(
        notification: &'a Notification,
        mount: &impl MountPoint,
    ) -> Option<Element<'a, Message>> {
        let root = mount.overlay_root()?;
        if notification.is_unmounted() {
            return None;
        }

        let alpha = notification.opacity(Instant::now());
        let config = notification.config();
        let kind = config.get_kind();
        let accent = kind.map_or(palette::GRAY_400, Kind::color);
        let icons = IconSet::resolve(kind, config.get_icon_class());

        let mut group = Column::new().spacing(spacing::XXS).width(Length::Fill);
        if let Some(title) = config.get_title() {
            group = group.push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::DEFAULT
                    })
                    .style(move |theme: &Theme| faded_text(theme, alpha)),
            );
        }
        if let Some(message) = config.get_message() {
            group = group.push(Self::content(message, alpha));
        }

        let group_inset = if icons.has_icon() { spacing::XXS } else { 0.0 };
        let group = Container::new(group)
            .width(Length::Fill)
            .padding(Padding {
                top: 0.0,
                right: 0.0,
                bottom: 0.0,
                left: group_inset,
            });

        let close_button = button(
            Text::new(glyph(CLOSE_TOKEN).unwrap_or("x"))
                .size(typography::BODY_LG)
                .style(move |theme: &Theme| faded_text(theme, alpha)),
        )
        .on_press(Message::CloseRequested)
        .padding(spacing::XXS)
        .style(move |theme: &Theme, status| close_button_style(theme, status, alpha));

        // Layout: [icons] [title/message] [close]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top);
        if let Some(icon) = Self::icons(icons, accent, alpha) {
            content = content.push(icon);
        }
        let content = content.push(group).push(close_button);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha));

        let interactive = mouse_area(card)
            .on_enter(Message::PointerEntered)
            .on_exit(Message::PointerExited)
            .on_press(Message::Clicked);

        Some(
            Container::new(measured(interactive, Message::Measured))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(root.anchor)
                .align_y(alignment::Vertical::Top)
                .padding(Padding {
                    top: notification.top_offset(),
                    right: root.inset,
                    bottom: 0.0,
                    left: root.inset,
                })
                .into(),
        )
    }

    fn icons<'a>(icons: IconSet<'a>, accent: Color, alpha: f32) -> Option<Element<'a, Message>> {
        if !icons.has_icon() {
            return None;
        }

        let mut row = Row::new().spacing(spacing::XXS);
        if let Some(token) = icons.type_token {
            row = row.push(
                Text::new(glyph(token).unwrap_or(token))
                    .size(sizing::ICON_MD)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(Color { a: alpha, ..accent }),
                    }),
            );
        }
        if let Some(token) = icons.custom {
            // Tokens without a glyph are shown by name.
            let label = Text::new(glyph(token).unwrap_or(token));
            let size = if glyph(token).is_some() {
                sizing::ICON_MD
            } else {
                typography::CAPTION
            };
            row = row.push(
                label
                    .size(size)
                    .style(move |theme: &Theme| faded_text(theme, alpha)),
            );
        }
        Some(row.into())
    }

    fn content(content: &Content, alpha: f32) -> Element<'_, Message> {
        match content {
            Content::Plain(message) => Text::new(message.as_str())
                .size(typography::BODY)
                .style(move |theme: &Theme| faded_text(theme, alpha))
                .into(),
            Content::Rich(fragments) => Row::with_children(
                fragments
                    .iter()
                    .map(|fragment| Self::fragment(fragment, alpha)),
            )
            .into(),
        }
    }

    fn fragment(fragment: &Fragment, alpha: f32) -> Element<'_, Message> {
        let font = match fragment.emphasis {
            Emphasis::Regular => Font::DEFAULT,
            Emphasis::Strong => Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            },
            Emphasis::Code => Font::MONOSPACE,
        };
        Text::new(fragment.text.as_str())
            .size(typography::BODY)
            .font(font)
            .style(move |theme: &Theme| faded_text(theme, alpha))
            .into()
    }
}

fn faded_text(theme: &Theme, alpha: f32) -> text::Style {
    let color = theme.palette().text;
    text::Style {
        color: Some(Color {
            a: color.a * alpha,
            ..color
        }),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE * alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: accent_color.a * alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: Color {
                a: opacity::OVERLAY_SUBTLE * alpha,
                ..shadow::MD.color
            },
            ..shadow::MD
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let base = theme.extended_palette().background.base;
    let highlight = |strength: f32| {
        Some(iced::Background::Color(Color {
            a: strength * alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => highlight(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => highlight(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color: Color {
            a: base.text.a * alpha,
            ..base.text
        },
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{NotificationConfig, OverlayRoot};

    #[test]
    fn kind_selects_type_icon() {
        let icons = IconSet::resolve(Some(Kind::Error), None);
        assert_eq!(icons.type_token, Some("circle-cross"));
        assert!(icons.custom.is_none());
        assert!(icons.has_icon());
    }

    #[test]
    fn absent_kind_renders_no_type_icon() {
        let icons = IconSet::resolve(None, None);
        assert!(icons.type_token.is_none());
        assert!(!icons.has_icon());
    }

    #[test]
    fn unrecognized_kind_still_renders_icon_class() {
        let config = NotificationConfig::new().kind_name("fatal").icon_class("bell");
        let icons = IconSet::resolve(config.get_kind(), config.get_icon_class());
        assert!(icons.type_token.is_none());
        assert_eq!(icons.custom, Some("bell"));
        assert!(icons.has_icon());
    }

    #[test]
    fn kind_and_icon_class_combine() {
        let icons = IconSet::resolve(Some(Kind::Info), Some("circle-check"));
        assert_eq!(icons.type_token, Some("information"));
        assert_eq!(icons.custom, Some("circle-check"));
    }

    #[test]
    fn blank_icon_class_is_ignored() {
        assert!(!IconSet::resolve(None, Some("  ")).has_icon());
    }

    #[test]
    fn every_kind_token_has_a_glyph() {
        for kind in Kind::ALL {
            assert!(glyph(kind.icon_token()).is_some(), "missing glyph for {kind}");
        }
        assert!(glyph(CLOSE_TOKEN).is_some());
        assert!(glyph("bell").is_none());
    }

    #[test]
    fn view_without_overlay_root_renders_nothing() {
        let notification = Notification::new(NotificationConfig::new().title("Saved"));
        let missing: Option<OverlayRoot> = None;
        assert!(Toast::view(&notification, &missing).is_none());
    }

    #[test]
    fn view_with_overlay_root_renders_toast() {
        let notification = Notification::new(
            NotificationConfig::new()
                .kind(Kind::Success)
                .title("Saved")
                .message(vec![Fragment::regular("Wrote "), Fragment::code("a.txt")]),
        );
        assert!(Toast::view(&notification, &OverlayRoot::top_right()).is_some());
    }

    #[test]
    fn view_after_unmount_renders_nothing() {
        let mut notification = Notification::new(NotificationConfig::new());
        notification.mount();
        notification.unmount();
        assert!(Toast::view(&notification, &OverlayRoot::top_right()).is_none());
    }

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, 1.0);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn toast_container_style_fades_with_alpha() {
        let style = toast_container_style(&Theme::Light, palette::ERROR_500, 0.5);
        assert!((style.border.color.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn close_button_highlights_on_hover_only() {
        let theme = Theme::Dark;
        assert!(close_button_style(&theme, button::Status::Active, 1.0)
            .background
            .is_none());
        assert!(close_button_style(&theme, button::Status::Hovered, 1.0)
            .background
            .is_some());
    }
}
