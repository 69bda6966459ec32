// SPDX-License-Identifier: MPL-2.0
//! Contact section: studio channels on the left, inquiry form on the right.
//!
//! The form is local-only. Field buffers live in [`State`]; the submit
//! control performs no network activity and simply reports an event so the
//! parent can acknowledge with a toast. See DESIGN.md for the decision
//! record.

use crate::catalog::StudioProfile;
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::font::Weight;
use iced::widget::{button, text_input, Column, Container, Row, Svg, Text};
use iced::{alignment, Background, Border, Element, Font, Length, Theme};

/// Buffers for the four inquiry fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project: String,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Messages emitted by the contact form.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    ProjectChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Submitted,
}

/// Applies a form message to the field buffers.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            Event::None
        }
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::PhoneChanged(value) => {
            state.phone = value;
            Event::None
        }
        Message::ProjectChanged(value) => {
            state.project = value;
            Event::None
        }
        Message::Submit => Event::Submitted,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub profile: &'a StudioProfile,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("contact-heading"))
        .size(typography::TITLE_XL)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .color(palette::PORCELAIN);

    let note = Container::new(
        Text::new(ctx.profile.contact_note)
            .size(typography::BODY_LG)
            .color(palette::GRAY_500),
    )
    .width(Length::Fixed(380.0));

    let channels = Column::new()
        .spacing(spacing::LG)
        .push(channel(
            icons::mail(palette::PORCELAIN),
            ctx.i18n.tr("contact-label-email"),
            ctx.profile.email,
        ))
        .push(channel(
            icons::phone(palette::PORCELAIN),
            ctx.i18n.tr("contact-label-phone"),
            ctx.profile.phone,
        ))
        .push(channel(
            icons::instagram(palette::PORCELAIN),
            ctx.i18n.tr("contact-label-instagram"),
            ctx.profile.instagram,
        ));

    let left = Column::new()
        .spacing(spacing::XL)
        .push(heading)
        .push(note)
        .push(channels);

    let name_and_email = Row::new()
        .spacing(spacing::LG)
        .push(field(
            ctx.i18n.tr("contact-field-name"),
            "",
            &ctx.state.name,
            Message::NameChanged,
        ))
        .push(field(
            ctx.i18n.tr("contact-field-email"),
            "",
            &ctx.state.email,
            Message::EmailChanged,
        ));

    let send = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(ctx.i18n.tr("contact-send")).size(typography::CAPTION))
            .push(icons::sized(
                icons::arrow_right(palette::CHARCOAL),
                sizing::ICON_SM,
            )),
    )
    .on_press(Message::Submit)
    .padding([spacing::MD, spacing::XL])
    .style(styles::button::primary);

    let form = Column::new()
        .spacing(spacing::LG)
        .push(name_and_email)
        .push(field(
            ctx.i18n.tr("contact-field-phone"),
            &ctx.i18n.tr("contact-field-phone-placeholder"),
            &ctx.state.phone,
            Message::PhoneChanged,
        ))
        .push(field(
            ctx.i18n.tr("contact-field-project"),
            "",
            &ctx.state.project,
            Message::ProjectChanged,
        ))
        .push(send);

    let content = Row::new()
        .spacing(spacing::XXL)
        .push(Container::new(left).width(Length::FillPortion(1)))
        .push(Container::new(form).width(Length::FillPortion(1)));

    let bounded = Column::new()
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(content);

    Container::new(bounded)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::XL])
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn channel<'a>(icon: Svg<'static>, label: String, value: &'a str) -> Element<'a, Message> {
    let well = Container::new(icons::sized(icon, sizing::ICON_SM))
        .width(Length::Fixed(sizing::ICON_XL))
        .height(Length::Fixed(sizing::ICON_XL))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::channel_icon);

    let text = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(label)
                .size(typography::CAPTION_SM)
                .color(palette::GRAY_600),
        )
        .push(
            Text::new(value)
                .size(typography::BODY_LG)
                .color(palette::PORCELAIN),
        );

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(well)
        .push(text)
        .into()
}

fn field<'a>(
    label: String,
    placeholder: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .on_input(on_input)
        .padding([spacing::SM, 0.0])
        .size(typography::BODY)
        .style(underline_input_style);

    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            Text::new(label)
                .size(typography::CAPTION_SM)
                .color(palette::GRAY_600),
        )
        .push(input)
        .into()
}

fn underline_input_style(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => palette::GRAY_400,
        text_input::Status::Hovered => palette::GRAY_600,
        _ => palette::GRAY_800,
    };

    text_input::Style {
        background: Background::Color(palette::CHARCOAL),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        icon: palette::GRAY_600,
        placeholder: palette::GRAY_700,
        value: palette::PORCELAIN,
        selection: palette::GRAY_600,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn field_edits_update_buffers() {
        let mut state = State::new();

        let event = update(&mut state, Message::NameChanged("Asha".into()));
        assert_eq!(event, Event::None);
        assert_eq!(state.name, "Asha");

        let _ = update(&mut state, Message::EmailChanged("asha@example.com".into()));
        let _ = update(&mut state, Message::PhoneChanged("98400 00000".into()));
        let _ = update(&mut state, Message::ProjectChanged("Brand film".into()));

        assert_eq!(state.email, "asha@example.com");
        assert_eq!(state.phone, "98400 00000");
        assert_eq!(state.project, "Brand film");
    }

    #[test]
    fn submit_reports_event_and_keeps_fields() {
        let mut state = State {
            name: "Asha".into(),
            ..State::new()
        };

        let event = update(&mut state, Message::Submit);
        assert_eq!(event, Event::Submitted);
        assert_eq!(state.name, "Asha");
    }

    #[test]
    fn contact_section_renders() {
        let i18n = I18n::default();
        let profile = catalog::profile();
        let state = State::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            profile: &profile,
        });
    }
}
