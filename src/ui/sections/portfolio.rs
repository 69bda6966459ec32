// SPDX-License-Identifier: MPL-2.0
//! Portfolio section: the album grid.
//!
//! Each card shows the album cover with the shoot specs, title, category,
//! and a "View Album" badge overlaid along the bottom edge. Activating a
//! card opens the full-screen gallery.

use super::Message;
use crate::catalog::Album;
use crate::i18n::I18n;
use crate::ui::components::{media_tile, TileImage};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Background, Color, Element, Font, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub albums: &'a [Album],
    /// Cover tile states, parallel to `albums`.
    pub covers: Vec<TileImage>,
}

const CARDS_PER_ROW: usize = 3;

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(ctx.i18n.tr("portfolio-heading"))
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::PORCELAIN),
        )
        .push(
            Text::new(ctx.i18n.tr("portfolio-subtitle"))
                .size(typography::BODY)
                .color(palette::GRAY_500),
        );

    let mut grid = Column::new().spacing(spacing::LG);
    for (row_index, chunk) in ctx
        .albums
        .chunks(CARDS_PER_ROW)
        .enumerate()
    {
        let mut row = Row::new().spacing(spacing::LG);
        for (col_index, album) in chunk.iter().enumerate() {
            let cover = ctx
                .covers
                .get(row_index * CARDS_PER_ROW + col_index)
                .cloned()
                .unwrap_or(TileImage::Unavailable);
            row = row.push(card(ctx.i18n, album, cover));
        }
        grid = grid.push(row);
    }

    let content = Column::new()
        .spacing(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(heading)
        .push(grid);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::XL])
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::section_alt)
        .into()
}

fn card<'a>(i18n: &I18n, album: &'a Album, cover: TileImage) -> Element<'a, Message> {
    let image: Element<'a, Message> = media_tile::view(i18n, &cover, sizing::ALBUM_COVER_HEIGHT);

    let badge = Container::new(
        Text::new(i18n.tr("portfolio-view-album")).size(typography::CAPTION_SM),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::badge);

    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(album.specs)
                .size(typography::CAPTION_SM)
                .color(palette::GRAY_400),
        )
        .push(
            Text::new(album.title)
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::PORCELAIN),
        )
        .push(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(
                    Container::new(
                        Text::new(album.category)
                            .size(typography::CAPTION_SM)
                            .color(palette::GRAY_400),
                    )
                    .width(Length::Fill),
                )
                .push(badge),
        );

    let caption_band = Container::new(caption)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            })),
            ..Default::default()
        });

    let composed = Stack::new()
        .push(Container::new(image).width(Length::Fill))
        .push(
            Container::new(caption_band)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::ALBUM_COVER_HEIGHT))
                .align_y(alignment::Vertical::Bottom),
        );

    button(composed)
        .on_press(Message::OpenAlbum(album.id))
        .padding(0.0)
        .width(Length::Fill)
        .style(styles::button::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn portfolio_renders_all_albums() {
        let i18n = I18n::default();
        let albums = catalog::albums();
        let covers = vec![TileImage::Loading; albums.len()];
        let _element = view(ViewContext {
            i18n: &i18n,
            albums: &albums,
            covers,
        });
    }

    #[test]
    fn portfolio_renders_with_missing_covers() {
        let i18n = I18n::default();
        let albums = catalog::albums();
        let _element = view(ViewContext {
            i18n: &i18n,
            albums: &albums,
            covers: Vec::new(),
        });
    }
}
