// SPDX-License-Identifier: MPL-2.0
//! Testimonials band: three client quotes on bordered cards.

use super::Message;
use crate::catalog::Testimonial;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Font, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub testimonials: &'a [Testimonial],
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("testimonials-kicker"))
                .size(typography::CAPTION_SM)
                .color(palette::GRAY_500),
        )
        .push(
            Text::new(ctx.i18n.tr("testimonials-heading"))
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::PORCELAIN),
        );

    let mut cards = Row::new().spacing(spacing::LG);
    for testimonial in ctx.testimonials {
        cards = cards.push(card(testimonial));
    }

    let content = Column::new()
        .spacing(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(cards);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::XL])
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn card(testimonial: &Testimonial) -> Element<'_, Message> {
    // Typographic opening quote in place of an icon glyph.
    let quote_mark = Text::new("\u{201C}")
        .size(typography::TITLE_XL)
        .color(palette::GRAY_700);

    let quote = Text::new(testimonial.quote)
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let attribution = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(testimonial.name)
                .size(typography::CAPTION)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::PORCELAIN),
        )
        .push(
            Text::new(testimonial.role)
                .size(typography::CAPTION_SM)
                .color(palette::GRAY_600),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .push(quote_mark)
        .push(quote)
        .push(attribution);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn testimonials_render_from_catalog() {
        let i18n = I18n::default();
        let testimonials = catalog::testimonials();
        let _element = view(ViewContext {
            i18n: &i18n,
            testimonials: &testimonials,
        });
    }
}
