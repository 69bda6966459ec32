// SPDX-License-Identifier: MPL-2.0
//! Full-screen album gallery.
//!
//! Replaces the page surface while an album is selected. A fixed header
//! carries the album identity and the close control; the media mosaic
//! scrolls underneath. Tiles honor the generator's layout hints: wide items
//! span two columns, tall items double the row height, and the opening item
//! gets both treatments.

use crate::catalog::{Album, MediaItem, MEDIA_PER_ALBUM};
use crate::i18n::I18n;
use crate::ui::components::{media_tile, TileImage};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::font::Weight;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Font, Length};

/// Units of horizontal space in one mosaic row.
const ROW_UNITS: u16 = 4;

/// Messages emitted by the gallery.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Leave the gallery and return to the portfolio.
    Close,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub album: &'a Album,
    /// Tile states, parallel to `album.media`.
    pub tiles: Vec<TileImage>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = build_header(&ctx);
    let mosaic = build_mosaic(&ctx);

    let return_button = button(
        Text::new(ctx.i18n.tr("gallery-return")).size(typography::CAPTION_SM),
    )
    .on_press(Message::Close)
    .padding([spacing::MD, spacing::XXL])
    .style(styles::button::outline);

    let body = Column::new()
        .spacing(spacing::XXL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center)
        .push(mosaic)
        .push(return_button);

    let scroll = scrollable(
        Container::new(body)
            .width(Length::Fill)
            .padding([spacing::XL, spacing::XL])
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let layout = Column::new().push(header).push(scroll);

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::gallery)
        .into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let count = MEDIA_PER_ALBUM.to_string();
    let subtitle = ctx.i18n.tr_with_args(
        "gallery-file-count",
        &[
            ("category", ctx.album.category.to_uppercase().as_str()),
            ("count", count.as_str()),
        ],
    );

    let identity = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(ctx.album.title)
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::PORCELAIN),
        )
        .push(
            Text::new(subtitle)
                .size(typography::CAPTION_SM)
                .color(palette::GRAY_500),
        );

    let close = button(icons::sized(
        icons::close(palette::PORCELAIN),
        sizing::ICON_MD,
    ))
    .on_press(Message::Close)
    .padding(spacing::SM)
    .style(styles::button::overlay);

    let bar = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Container::new(identity).width(Length::Fill))
        .push(close);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::XL])
        .style(styles::container::gallery_header)
        .into()
}

fn build_mosaic<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut mosaic = Column::new().spacing(spacing::SM).width(Length::Fill);

    for row_indices in plan_rows(&ctx.album.media) {
        let mut row = Row::new().spacing(spacing::SM).width(Length::Fill);
        for index in row_indices {
            let item = &ctx.album.media[index];
            let tile = ctx
                .tiles
                .get(index)
                .cloned()
                .unwrap_or(TileImage::Unavailable);

            let height = if is_tall(index, item) {
                sizing::GALLERY_ROW_HEIGHT * 2.0 + spacing::SM
            } else {
                sizing::GALLERY_ROW_HEIGHT
            };

            let image: Element<'a, Message> = media_tile::view(ctx.i18n, &tile, height);
            row = row.push(
                Container::new(image).width(Length::FillPortion(units(index, item))),
            );
        }
        mosaic = mosaic.push(row.align_y(alignment::Vertical::Top));
    }

    mosaic.into()
}

/// Horizontal span of a tile in row units.
fn units(index: usize, item: &MediaItem) -> u16 {
    if index == 0 || item.is_wide {
        2
    } else {
        1
    }
}

/// Whether a tile doubles the row height.
fn is_tall(index: usize, item: &MediaItem) -> bool {
    index == 0 || item.is_tall
}

/// Packs media indices into rows of at most [`ROW_UNITS`] span units.
fn plan_rows(media: &[MediaItem]) -> Vec<Vec<usize>> {
    let mut rows = Vec::new();
    let mut current = Vec::new();
    let mut used = 0;

    for (index, item) in media.iter().enumerate() {
        let span = units(index, item);
        if used + span > ROW_UNITS && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(index);
        used += span;
    }

    if !current.is_empty() {
        rows.push(current);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn rows_never_exceed_the_unit_budget() {
        let media = catalog::generate_album_media(100);
        for row in plan_rows(&media) {
            let total: u16 = row.iter().map(|&i| units(i, &media[i])).sum();
            assert!(total <= ROW_UNITS, "row {row:?} spans {total} units");
        }
    }

    #[test]
    fn every_item_is_planned_exactly_once() {
        let media = catalog::generate_album_media(200);
        let planned: Vec<usize> = plan_rows(&media).into_iter().flatten().collect();

        let mut expected: Vec<usize> = (0..media.len()).collect();
        let mut sorted = planned.clone();
        sorted.sort_unstable();
        expected.sort_unstable();

        assert_eq!(sorted, expected);
        // Order within the plan is the generation order.
        assert!(planned.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn opening_item_gets_both_treatments() {
        let media = catalog::generate_album_media(300);
        assert_eq!(units(0, &media[0]), 2);
        assert!(is_tall(0, &media[0]));
    }

    #[test]
    fn gallery_renders_with_loading_tiles() {
        let i18n = I18n::default();
        let albums = catalog::albums();
        let album = &albums[0];
        let _element = view(ViewContext {
            i18n: &i18n,
            album,
            tiles: vec![TileImage::Loading; album.media.len()],
        });
    }
}
