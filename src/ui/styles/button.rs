// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled call-to-action: porcelain surface, charcoal text.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::WHITE,
        _ => palette::PORCELAIN,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::CHARCOAL,
        border: Border {
            radius: radius::NONE.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Outlined call-to-action: transparent surface, border brightens on hover.
pub fn outline(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PORCELAIN,
        _ => palette::GRAY_700,
    };

    button::Style {
        background: None,
        text_color: palette::PORCELAIN,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Outlined control on the light (about) surface.
pub fn outline_on_light(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::CHARCOAL,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: None,
        text_color: palette::CHARCOAL,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Bare text link: porcelain at rest, dims on hover.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_400,
        _ => palette::PORCELAIN,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Invisible wrapper for clickable cards and tiles.
pub fn card(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::PORCELAIN,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Circular control on dark overlays (gallery close).
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: palette::PORCELAIN,
        border: Border {
            color: palette::GRAY_800,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}
