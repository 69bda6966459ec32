// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts appear as small cards with severity-colored accents in the
//! bottom-right corner, stacked vertically.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Renders a single toast notification.
pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent_color = notification.severity().color();

    let message_widget = Text::new(i18n.tr(notification.message_key()))
        .size(typography::BODY)
        .color(palette::PORCELAIN);

    let notification_id = notification.id();
    let dismiss_button = button(icons::sized(
        icons::close(palette::GRAY_400),
        sizing::ICON_SM,
    ))
    .on_press(Message::Dismiss(notification_id))
    .padding(spacing::XXS)
    .style(dismiss_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Renders the toast overlay with all visible notifications.
///
/// Positions toasts in the bottom-right corner, stacked vertically.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Right);

    for notification in manager.visible() {
        column = column.push(view(notification, i18n));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::LG)
        .into()
}

fn toast_container_style(_theme: &Theme, accent: Color) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(Background::Color(palette::CARD)),
        text_color: Some(palette::PORCELAIN),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette::GRAY_800))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::GRAY_400,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Notification;

    #[test]
    fn toast_renders_for_each_severity() {
        let i18n = I18n::default();
        let _ = view(&Notification::success("notification-contact-recorded"), &i18n);
        let _ = view(&Notification::warning("notification-image-fetch-error"), &i18n);
        let _ = view(&Notification::error("notification-config-load-error"), &i18n);
    }

    #[test]
    fn overlay_renders_with_multiple_toasts() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        manager.push(Notification::info("notification-contact-recorded"));
        manager.push(Notification::warning("notification-image-fetch-error"));

        let _ = overlay(&manager, &i18n);
    }
}
