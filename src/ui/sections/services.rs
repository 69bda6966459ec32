// SPDX-License-Identifier: MPL-2.0
//! Services section: the three expertise cards.

use super::Message;
use crate::catalog::{Service, ServiceIcon};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::font::Weight;
use iced::widget::{Column, Container, Row, Svg, Text};
use iced::{alignment, Element, Font, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub services: &'a [Service],
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("services-kicker"))
                .size(typography::CAPTION_SM)
                .color(palette::GRAY_500),
        )
        .push(
            Text::new(ctx.i18n.tr("services-heading"))
                .size(typography::TITLE_XL)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::PORCELAIN),
        );

    let mut cards = Row::new().spacing(spacing::XL);
    for service in ctx.services {
        cards = cards.push(card(service));
    }

    let content = Column::new()
        .spacing(spacing::XXL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(cards);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::XL])
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::section_alt)
        .into()
}

fn glyph(icon: ServiceIcon) -> Svg<'static> {
    let color = palette::GRAY_500;
    match icon {
        ServiceIcon::Camera => icons::camera(color),
        ServiceIcon::Video => icons::video(color),
        ServiceIcon::Share => icons::share(color),
    }
}

fn card(service: &Service) -> Element<'_, Message> {
    let mut highlights = Column::new().spacing(spacing::XS);
    for highlight in service.highlights {
        highlights = highlights.push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(icons::sized(
                    icons::chevron_right(palette::GRAY_500),
                    sizing::ICON_SM,
                ))
                .push(
                    Text::new(highlight)
                        .size(typography::BODY)
                        .color(palette::GRAY_400),
                ),
        );
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .push(icons::sized(glyph(service.icon), sizing::ICON_XL))
        .push(
            Text::new(service.title)
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::PORCELAIN),
        )
        .push(
            Text::new(service.blurb)
                .size(typography::BODY)
                .color(palette::GRAY_500),
        )
        .push(highlights);

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
    fn services_render_from_catalog() {
        let i18n = I18n::default();
        let services = catalog::services();
        let _element = view(ViewContext {
            i18n: &i18n,
            services: &services,
        });
    }

    #[test]
    fn every_icon_kind_has_a_glyph() {
        let _ = glyph(ServiceIcon::Camera);
        let _ = glyph(ServiceIcon::Video);
        let _ = glyph(ServiceIcon::Share);
    }
}
