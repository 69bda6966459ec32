// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for the three view
//! state flags (menu, scroll threshold, selected album), the contact form,
//! and the remote image pipeline.

use super::{Message, PAGE_SCROLLABLE_ID, SCROLL_THRESHOLD};
use crate::catalog::Catalog;
use crate::remote::{self, ImageCache, RemoteImage};
use crate::ui::gallery;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::{self, contact, Section};
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::Task;
use std::collections::HashSet;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub catalog: &'a Catalog,
    pub menu_open: &'a mut bool,
    pub scrolled: &'a mut bool,
    pub scroll_offset: &'a mut AbsoluteOffset,
    pub selected_album: &'a mut Option<u32>,
    pub saved_scroll: &'a mut AbsoluteOffset,
    pub contact: &'a mut contact::State,
    pub images: &'a mut ImageCache,
    pub pending: &'a mut HashSet<String>,
    pub failed: &'a mut HashSet<String>,
    pub fetch_warning_shown: &'a mut bool,
    pub remote_enabled: bool,
    pub client: &'a reqwest::Client,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles navbar messages: menu toggling and link navigation.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(section) => jump_to(section),
    }
}

/// Handles messages from the stateless marketing sections.
pub fn handle_sections_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    match message {
        sections::Message::Navigate(section) => {
            // In-page calls to action behave like nav links: the menu closes.
            *ctx.menu_open = false;
            jump_to(section)
        }
        sections::Message::OpenAlbum(id) => open_album(ctx, id),
    }
}

/// Handles contact form messages.
pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    match contact::update(ctx.contact, message) {
        contact::Event::None => Task::none(),
        contact::Event::Submitted => {
            // Local-only form: acknowledge and point at the studio email.
            ctx.notifications
                .push(Notification::info("notification-contact-recorded"));
            Task::none()
        }
    }
}

/// Handles gallery messages.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match message {
        gallery::Message::Close => close_gallery(ctx),
    }
}

/// Tracks the page scroll offset and recomputes the threshold flag.
///
/// No hysteresis: the flag follows the offset on every event.
pub fn handle_page_scrolled(ctx: &mut UpdateContext<'_>, offset: AbsoluteOffset) -> Task<Message> {
    *ctx.scroll_offset = offset;
    *ctx.scrolled = offset.y > SCROLL_THRESHOLD;
    Task::none()
}

/// Records a finished image fetch.
///
/// Failures are terminal for the URL; the first one in a session also
/// surfaces a warning toast.
pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<RemoteImage, crate::error::Error>,
) -> Task<Message> {
    ctx.pending.remove(&url);

    match result {
        Ok(image) => {
            ctx.images.insert(url, image);
        }
        Err(_) => {
            ctx.failed.insert(url);
            if !*ctx.fetch_warning_shown {
                *ctx.fetch_warning_shown = true;
                ctx.notifications
                    .push(Notification::warning("notification-image-fetch-error"));
            }
        }
    }

    Task::none()
}

/// Escape closes the gallery if open, otherwise the menu.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.selected_album.is_some() {
        close_gallery(ctx)
    } else {
        *ctx.menu_open = false;
        Task::none()
    }
}

/// Requests fetches for every URL not already cached, in flight, or failed.
///
/// Fire-and-forget: each URL is requested at most once per session.
pub fn request_images(ctx: &mut UpdateContext<'_>, urls: Vec<String>) -> Task<Message> {
    if !ctx.remote_enabled {
        return Task::none();
    }

    let mut tasks = Vec::new();
    for url in urls {
        if ctx.images.contains(&url) || ctx.pending.contains(&url) || ctx.failed.contains(&url) {
            continue;
        }

        ctx.pending.insert(url.clone());
        let client = ctx.client.clone();
        tasks.push(Task::perform(
            async move {
                let result = remote::fetch_image(client, url.clone()).await;
                (url, result)
            },
            |(url, result)| Message::ImageFetched { url, result },
        ));
    }

    Task::batch(tasks)
}

fn jump_to(section: Section) -> Task<Message> {
    operation::snap_to(
        Id::new(PAGE_SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: section.anchor(),
        },
    )
}

/// Opens the gallery for an album: saves the page scroll position and kicks
/// off fetches for the album's media list.
fn open_album(ctx: &mut UpdateContext<'_>, id: u32) -> Task<Message> {
    let Some(album) = ctx.catalog.album(id) else {
        return Task::none();
    };

    *ctx.saved_scroll = *ctx.scroll_offset;
    *ctx.selected_album = Some(id);

    let urls: Vec<String> = album.media.iter().map(|item| item.url.clone()).collect();
    request_images(ctx, urls)
}

/// Clears the selection and restores the saved page scroll position.
fn close_gallery(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.selected_album.take().is_some() {
        operation::scroll_to(Id::new(PAGE_SCROLLABLE_ID), *ctx.saved_scroll)
    } else {
        Task::none()
    }
}
