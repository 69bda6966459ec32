// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The view is a pure function of the current state: while an album is
//! selected the gallery replaces the page surface entirely (the desktop
//! equivalent of the modal locking the document scroll); otherwise the
//! scrollable page renders with the navbar floating on top. Toasts overlay
//! both screens.

use super::{Message, PAGE_SCROLLABLE_ID};
use crate::catalog::{Album, Catalog};
use crate::i18n::I18n;
use crate::remote::ImageCache;
use crate::ui::components::TileImage;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{toast, Manager};
use crate::ui::sections::{about, contact, footer, hero, portfolio, services, testimonials};
use crate::ui::{gallery, styles};
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length};
use std::collections::HashSet;

/// Read-only access to the remote image pipeline for the renderer.
pub struct ImageLookup<'a> {
    pub images: &'a ImageCache,
    pub failed: &'a HashSet<String>,
    pub remote_enabled: bool,
}

impl ImageLookup<'_> {
    /// Classifies a URL into its tile presentation state.
    #[must_use]
    pub fn tile(&self, url: &str) -> TileImage {
        if let Some(handle) = self.images.peek(url) {
            TileImage::Ready(handle)
        } else if !self.remote_enabled || self.failed.contains(url) {
            TileImage::Unavailable
        } else {
            TileImage::Loading
        }
    }
}

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub menu_open: bool,
    pub scrolled: bool,
    pub selected_album: Option<&'a Album>,
    pub contact: &'a contact::State,
    pub images: ImageLookup<'a>,
    pub notifications: &'a Manager,
}

/// Renders the current application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match ctx.selected_album {
        Some(album) => gallery_screen(&ctx, album),
        None => page_screen(&ctx),
    };

    let toasts = toast::overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen)
        .push(toasts)
        .into()
}

fn page_screen<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let covers: Vec<TileImage> = ctx
        .catalog
        .albums
        .iter()
        .map(|album| ctx.images.tile(album.cover_url))
        .collect();

    let sections: Element<'a, Message> = Column::new()
        .width(Length::Fill)
        .push(
            hero::view(hero::ViewContext {
                i18n: ctx.i18n,
                profile: &ctx.catalog.profile,
            })
            .map(Message::Sections),
        )
        .push(
            portfolio::view(portfolio::ViewContext {
                i18n: ctx.i18n,
                albums: &ctx.catalog.albums,
                covers,
            })
            .map(Message::Sections),
        )
        .push(
            testimonials::view(testimonials::ViewContext {
                i18n: ctx.i18n,
                testimonials: &ctx.catalog.testimonials,
            })
            .map(Message::Sections),
        )
        .push(
            services::view(services::ViewContext {
                i18n: ctx.i18n,
                services: &ctx.catalog.services,
            })
            .map(Message::Sections),
        )
        .push(
            about::view(about::ViewContext {
                i18n: ctx.i18n,
                profile: &ctx.catalog.profile,
                portrait: ctx.images.tile(ctx.catalog.profile.portrait_url),
            })
            .map(Message::Sections),
        )
        .push(
            contact::view(contact::ViewContext {
                i18n: ctx.i18n,
                state: ctx.contact,
                profile: &ctx.catalog.profile,
            })
            .map(Message::Contact),
        )
        .push(
            footer::view(footer::ViewContext {
                i18n: ctx.i18n,
                profile: &ctx.catalog.profile,
            })
            .map(Message::Sections),
        )
        .into();

    let page = Scrollable::new(sections)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport.absolute_offset()));

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        scrolled: ctx.scrolled,
        brand: ctx.catalog.profile.brand,
    })
    .map(Message::Navbar);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::page),
        )
        .push(Container::new(navbar_view).width(Length::Fill))
        .into()
}

fn gallery_screen<'a>(ctx: &ViewContext<'a>, album: &'a Album) -> Element<'a, Message> {
    let tiles: Vec<TileImage> = album
        .media
        .iter()
        .map(|item| ctx.images.tile(&item.url))
        .collect();

    gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        album,
        tiles,
    })
    .map(Message::Gallery)
}
