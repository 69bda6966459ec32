// SPDX-License-Identifier: MPL-2.0
//! Footer band: rights line, social glyphs, credit, and tagline.

use super::Message;
use crate::catalog::StudioProfile;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use chrono::Datelike;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a StudioProfile,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let year = chrono::Local::now().year().to_string();
    let rights = Text::new(ctx.i18n.tr_with_args("footer-rights", &[("year", &year)]))
        .size(typography::CAPTION_SM)
        .color(palette::GRAY_600);

    let social = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(
            icons::instagram(palette::GRAY_500),
            sizing::ICON_SM,
        ))
        .push(icons::sized(icons::mail(palette::GRAY_500), sizing::ICON_SM))
        .push(icons::sized(
            icons::phone(palette::GRAY_500),
            sizing::ICON_SM,
        ));

    let middle = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(social)
        .push(
            Text::new(ctx.profile.instagram)
                .size(typography::CAPTION_SM)
                .color(palette::GRAY_600),
        )
        .push(
            Text::new(ctx.i18n.tr("footer-credit"))
                .size(typography::CAPTION_SM)
                .color(palette::GRAY_700),
        );

    let tagline = Text::new(ctx.i18n.tr("footer-tagline"))
        .size(typography::CAPTION_SM)
        .color(palette::GRAY_600);

    let content = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Container::new(rights).width(Length::FillPortion(1)))
        .push(Container::new(middle).width(Length::FillPortion(1)).align_x(alignment::Horizontal::Center))
        .push(
            Container::new(tagline)
                .width(Length::FillPortion(1))
                .align_x(alignment::Horizontal::Right),
        );

    let bounded = Column::new()
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(content);

    Container::new(bounded)
        .width(Length::Fill)
        .padding([spacing::XL, spacing::XL])
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::footer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn footer_renders() {
        let i18n = I18n::default();
        let profile = catalog::profile();
        let _element = view(ViewContext {
            i18n: &i18n,
            profile: &profile,
        });
    }
}
