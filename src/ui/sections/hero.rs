// SPDX-License-Identifier: MPL-2.0
//! Full-height opening section: kicker, display headline, intro copy, and
//! the two primary calls to action.

use super::{Message, Section};
use crate::catalog::StudioProfile;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Font, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a StudioProfile,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let kicker = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Container::new(Space::new())
                .width(Length::Fixed(sizing::ICON_LG))
                .height(Length::Fixed(1.0))
                .style(|_theme: &iced::Theme| iced::widget::container::Style {
                    background: Some(iced::Background::Color(palette::GRAY_600)),
                    ..Default::default()
                }),
        )
        .push(
            Text::new(ctx.profile.kicker)
                .size(typography::CAPTION_SM)
                .color(palette::GRAY_400),
        );

    let headline = Column::new()
        .push(
            Text::new(ctx.profile.headline)
                .size(typography::DISPLAY)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::PORCELAIN),
        )
        .push(
            Text::new(ctx.profile.headline_accent)
                .size(typography::DISPLAY)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::GRAY_500),
        );

    let intro = Container::new(
        Text::new(ctx.profile.intro)
            .size(typography::BODY_LG)
            .color(palette::GRAY_400),
    )
    .width(Length::Fixed(560.0));

    let explore = button(
        Text::new(ctx.i18n.tr("hero-explore")).size(typography::CAPTION),
    )
    .on_press(Message::Navigate(Section::Work))
    .padding([spacing::MD, spacing::XL])
    .style(styles::button::primary);

    let connect = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr("hero-connect")).size(typography::CAPTION))
            .push(icons::sized(
                icons::arrow_right(palette::PORCELAIN),
                sizing::ICON_SM,
            )),
    )
    .on_press(Message::Navigate(Section::Contact))
    .padding([spacing::MD, spacing::XL])
    .style(styles::button::outline);

    let actions = Row::new().spacing(spacing::MD).push(explore).push(connect);

    let mut capture_notes = Column::new().spacing(spacing::XXS);
    for note in ctx.profile.capture_notes {
        capture_notes = capture_notes.push(
            Text::new(note)
                .size(typography::CAPTION_SM)
                .color(palette::GRAY_600),
        );
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .push(kicker)
        .push(headline)
        .push(intro)
        .push(actions)
        .push(Container::new(capture_notes).padding([spacing::XL, 0.0]));

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION + sizing::NAVBAR_HEIGHT, spacing::XL])
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn hero_renders_from_catalog_profile() {
        let i18n = I18n::default();
        let profile = catalog::profile();
        let _element = view(ViewContext {
            i18n: &i18n,
            profile: &profile,
        });
    }
}
