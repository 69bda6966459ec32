// SPDX-License-Identifier: MPL-2.0
//! About section: the artist portrait and bio on the light surface.
//!
//! This is the one section that inverts the palette, so every text color is
//! set explicitly rather than inherited.

use super::Message;
use crate::catalog::StudioProfile;
use crate::i18n::I18n;
use crate::ui::components::{media_tile, TileImage};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Font, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a StudioProfile,
    pub portrait: TileImage,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let portrait: Element<'a, Message> =
        media_tile::view(ctx.i18n, &ctx.portrait, sizing::PORTRAIT_HEIGHT);

    let name_line = Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(ctx.profile.about_lead)
                .size(typography::TITLE_XL)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::CHARCOAL),
        )
        .push(
            Text::new(ctx.profile.about_name)
                .size(typography::TITLE_XL)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::GRAY_400),
        );

    let mut stats = Row::new().spacing(spacing::XXL);
    for (value, label) in ctx.profile.stats {
        stats = stats.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(value)
                        .size(typography::TITLE_LG)
                        .font(Font {
                            weight: Weight::Bold,
                            ..Font::default()
                        })
                        .color(palette::CHARCOAL),
                )
                .push(
                    Text::new(label)
                        .size(typography::CAPTION_SM)
                        .color(palette::GRAY_400),
                ),
        );
    }

    let bio = Column::new()
        .spacing(spacing::LG)
        .push(
            Text::new(ctx.i18n.tr("about-kicker"))
                .size(typography::CAPTION_SM)
                .color(palette::GRAY_400),
        )
        .push(name_line)
        .push(
            Text::new(ctx.profile.about_text)
                .size(typography::BODY_LG)
                .color(palette::GRAY_600),
        )
        .push(stats);

    let content = Row::new()
        .spacing(spacing::XXL)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(portrait).width(Length::FillPortion(1)))
        .push(Container::new(bio).width(Length::FillPortion(1)));

    let bounded = Column::new()
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(content);

    Container::new(bounded)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::XL])
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::section_light)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn about_renders_with_each_portrait_state() {
        let i18n = I18n::default();
        let profile = catalog::profile();
        for portrait in [TileImage::Loading, TileImage::Unavailable] {
            let _element = view(ViewContext {
                i18n: &i18n,
                profile: &profile,
                portrait,
            });
        }
    }
}
