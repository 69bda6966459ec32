// SPDX-License-Identifier: MPL-2.0
//! Remote image tile with loading and fallback presentation.
//!
//! Every piece of imagery in the app (album covers, the portrait, gallery
//! tiles) goes through this component so that in-flight and failed fetches
//! look the same everywhere: a quiet dark well carrying the brand mark.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::image::Handle;
use iced::widget::{Column, Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Presentation state of one remote image.
#[derive(Debug, Clone)]
pub enum TileImage {
    /// Fetched and decodable; render the real image.
    Ready(Handle),
    /// Fetch requested or not yet started.
    Loading,
    /// Fetch failed earlier in the session, or remote images are disabled.
    Unavailable,
}

impl TileImage {
    /// Returns whether the real image can be rendered.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, TileImage::Ready(_))
    }
}

/// Renders a tile at the given height, filling the available width.
pub fn view<'a, M: 'a>(i18n: &I18n, tile: &TileImage, height: f32) -> Element<'a, M> {
    match tile {
        TileImage::Ready(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        TileImage::Loading => placeholder(i18n.tr("media-loading"), height),
        TileImage::Unavailable => placeholder(i18n.tr("media-unavailable"), height),
    }
}

fn placeholder<'a, M: 'a>(caption: String, height: f32) -> Element<'a, M> {
    let mark = icons::sized(icons::brand_mark(palette::GRAY_700), sizing::ICON_LG);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(mark)
        .push(
            Text::new(caption)
                .size(typography::CAPTION_SM)
                .color(palette::GRAY_500),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::tile)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_state_is_detected() {
        let tile = TileImage::Ready(Handle::from_bytes(vec![0u8; 4]));
        assert!(tile.is_ready());
        assert!(!TileImage::Loading.is_ready());
        assert!(!TileImage::Unavailable.is_ready());
    }

    #[test]
    fn all_states_render() {
        let i18n = I18n::default();
        let ready = TileImage::Ready(Handle::from_bytes(vec![0u8; 4]));
        let _: Element<'_, ()> = view(&i18n, &ready, 200.0);
        let _: Element<'_, ()> = view(&i18n, &TileImage::Loading, 200.0);
        let _: Element<'_, ()> = view(&i18n, &TileImage::Unavailable, 200.0);
    }
}
