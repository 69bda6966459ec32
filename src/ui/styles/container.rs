// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles for page surfaces, cards, and overlays.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Primary page surface.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CHARCOAL)),
        ..Default::default()
    }
}

/// Alternate section surface (portfolio, services).
pub fn section_alt(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE)),
        ..Default::default()
    }
}

/// Light section surface (about).
pub fn section_light(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PORCELAIN)),
        text_color: Some(palette::CHARCOAL),
        ..Default::default()
    }
}

/// Bordered card on dark surfaces (testimonials, services).
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CARD)),
        border: Border {
            color: palette::GRAY_800,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Navbar before the page has scrolled: transparent over the hero.
pub fn navbar_top(_theme: &Theme) -> container::Style {
    container::Style::default()
}

/// Navbar after the scroll threshold: condensed, near-opaque, separated.
pub fn navbar_scrolled(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::NAVBAR,
            ..palette::CHARCOAL
        })),
        border: Border {
            color: palette::GRAY_800,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Gallery backdrop.
pub fn gallery(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::INK)),
        ..Default::default()
    }
}

/// Sticky gallery header bar.
pub fn gallery_header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::INK)),
        border: Border {
            color: palette::GRAY_900,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Media tile backdrop, visible while an image loads or as its fallback.
pub fn tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        border: Border {
            color: palette::GRAY_800,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Footer band.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::INK)),
        border: Border {
            color: palette::GRAY_900,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Thin outlined badge ("View Album" and similar chips).
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: None,
        text_color: Some(palette::GRAY_300),
        border: Border {
            color: palette::GRAY_500,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Circular contact-channel icon well.
pub fn channel_icon(_theme: &Theme) -> container::Style {
    container::Style {
        background: None,
        text_color: Some(palette::PORCELAIN),
        border: Border {
            color: palette::GRAY_800,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}
