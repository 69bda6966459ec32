// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar over the page.
//!
//! Carries the brand mark, the section links, and a compact menu whose open
//! flag lives on the root state. Activating any link closes the menu and
//! asks the parent to scroll to the target section. Once the page scrolls
//! past the threshold the bar condenses onto a near-opaque backdrop.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::sections::Section;
use crate::ui::{icons, styles};
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Font, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    pub scrolled: bool,
    pub brand: &'a str,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    Navigate(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Section),
}

/// Process a navbar message and return the corresponding event.
///
/// Link activation always forces the menu closed, whether the link was
/// pressed in the bar or inside the open menu.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Navigate(section) => {
            *menu_open = false;
            Event::Navigate(section)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_menu(&ctx));
    }

    content.into()
}

fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(
            icons::brand_mark(palette::PORCELAIN),
            sizing::ICON_MD,
        ))
        .push(
            Text::new(ctx.brand)
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::PORCELAIN),
        );

    let mut links = Row::new().spacing(spacing::XL).align_y(Vertical::Center);
    for section in Section::NAV {
        links = links.push(
            button(
                Text::new(ctx.i18n.tr(section.label_key()))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_300),
            )
            .on_press(Message::Navigate(section))
            .padding(spacing::XS)
            .style(styles::button::link),
        );
    }

    let menu_button = button(icons::sized(
        icons::menu(palette::PORCELAIN),
        sizing::ICON_MD,
    ))
    .on_press(Message::ToggleMenu)
    .padding(spacing::XS)
    .style(styles::button::link);

    let padding = if ctx.scrolled {
        [spacing::SM, spacing::LG]
    } else {
        [spacing::LG, spacing::LG]
    };

    let bar = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Container::new(links).width(Length::Fill).align_x(iced::alignment::Horizontal::Right))
        .push(menu_button);

    let style = if ctx.scrolled {
        styles::container::navbar_scrolled
    } else {
        styles::container::navbar_top
    };

    Container::new(bar)
        .width(Length::Fill)
        .padding(padding)
        .style(style)
        .into()
}

fn build_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(iced::alignment::Horizontal::Center)
        .width(Length::Fill);

    for section in Section::NAV {
        column = column.push(
            button(
                Text::new(ctx.i18n.tr(section.label_key()))
                    .size(typography::TITLE_SM)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::default()
                    })
                    .color(palette::PORCELAIN),
            )
            .on_press(Message::Navigate(section))
            .padding([spacing::SM, spacing::XL])
            .style(styles::button::link),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::navbar_scrolled)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn navigation_closes_menu_and_emits_event() {
        let mut menu_open = true;
        let event = update(Message::Navigate(Section::Contact), &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::Navigate(Section::Contact)));
    }

    #[test]
    fn navigation_with_closed_menu_keeps_it_closed() {
        let mut menu_open = false;
        let _ = update(Message::Navigate(Section::Work), &mut menu_open);
        assert!(!menu_open);
    }

    #[test]
    fn navbar_view_renders_in_both_scroll_states() {
        let i18n = I18n::default();
        for scrolled in [false, true] {
            let ctx = ViewContext {
                i18n: &i18n,
                menu_open: false,
                scrolled,
                brand: "VVS PHOTOGRAPHY",
            };
            let _element = view(ctx);
        }
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: true,
            scrolled: true,
            brand: "VVS PHOTOGRAPHY",
        };
        let _element = view(ctx);
    }
}
