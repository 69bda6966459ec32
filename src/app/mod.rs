// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and the gallery.
//!
//! The `App` struct owns the three view-state flags (menu, scroll threshold,
//! selected album), the contact form buffers, and the remote image pipeline.
//! Policy decisions (scroll threshold, window bounds, offline behavior) are
//! kept close to the main update loop so user-facing behavior is easy to
//! audit.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::i18n::I18n;
use crate::remote::{self, ImageCache};
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::contact;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

pub const WINDOW_MIN_WIDTH: u32 = 960;
pub const WINDOW_MIN_HEIGHT: u32 = 640;

/// Vertical offset past which the navbar condenses.
pub const SCROLL_THRESHOLD: f32 = 50.0;

/// Widget id of the page scrollable, shared by the view and the scroll
/// tasks.
pub(crate) const PAGE_SCROLLABLE_ID: &str = "portfolio-page";

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    catalog: Catalog,
    /// Whether the compact navigation menu is open.
    menu_open: bool,
    /// Whether the page has scrolled past [`SCROLL_THRESHOLD`].
    scrolled: bool,
    /// Last reported offset of the page scrollable.
    scroll_offset: AbsoluteOffset,
    /// Page offset saved when the gallery opened, restored on close.
    saved_scroll: AbsoluteOffset,
    /// Album currently shown in the gallery, if any.
    selected_album: Option<u32>,
    contact: contact::State,
    images: ImageCache,
    /// URLs with a fetch in flight.
    pending: HashSet<String>,
    /// URLs whose fetch failed; never retried within the session.
    failed: HashSet<String>,
    /// The fetch-failure toast is shown at most once per session.
    fetch_warning_shown: bool,
    remote_enabled: bool,
    client: reqwest::Client,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("menu_open", &self.menu_open)
            .field("scrolled", &self.scrolled)
            .field("selected_album", &self.selected_album)
            .field("cached_images", &self.images.len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            catalog: Catalog::new(),
            menu_open: false,
            scrolled: false,
            scroll_offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            saved_scroll: AbsoluteOffset { x: 0.0, y: 0.0 },
            selected_album: None,
            contact: contact::State::new(),
            images: ImageCache::with_defaults(),
            pending: HashSet::new(),
            failed: HashSet::new(),
            fetch_warning_shown: false,
            remote_enabled: true,
            client: remote::build_client(Duration::from_secs(
                config::DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
            notifications: notifications::Manager::new(),
        }
    }
}

/// Builds the window settings from the loaded configuration.
pub fn window_settings(config: &config::Config) -> window::Settings {
    let icon = crate::icon::load_window_icon();
    let width = config.window.width.unwrap_or(config::DEFAULT_WINDOW_WIDTH);
    let height = config
        .window
        .height
        .unwrap_or(config::DEFAULT_WINDOW_HEIGHT);

    window::Settings {
        size: Size::new(width as f32, height as f32),
        min_size: Some(Size::new(
            WINDOW_MIN_WIDTH as f32,
            WINDOW_MIN_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, _) = config::load();
    let window = window_settings(&config);

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off cover and portrait
    /// fetches.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let remote_enabled = !flags.offline && config.network.remote_images.unwrap_or(true);
        let timeout = Duration::from_secs(
            config
                .network
                .request_timeout_secs
                .unwrap_or(config::DEFAULT_REQUEST_TIMEOUT_SECS),
        );

        let mut app = App {
            i18n,
            remote_enabled,
            client: remote::build_client(timeout),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let mut urls: Vec<String> = app
            .catalog
            .albums
            .iter()
            .map(|album| album.cover_url.to_string())
            .collect();
        urls.push(app.catalog.profile.portrait_url.to_string());

        let mut ctx = app.update_context();
        let task = update::request_images(&mut ctx, urls);

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self
            .selected_album
            .and_then(|id| self.catalog.album(id))
        {
            Some(album) => format!("{} - {app_name}", album.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            catalog: &self.catalog,
            menu_open: &mut self.menu_open,
            scrolled: &mut self.scrolled,
            scroll_offset: &mut self.scroll_offset,
            selected_album: &mut self.selected_album,
            saved_scroll: &mut self.saved_scroll,
            contact: &mut self.contact,
            images: &mut self.images,
            pending: &mut self.pending,
            failed: &mut self.failed,
            fetch_warning_shown: &mut self.fetch_warning_shown,
            remote_enabled: self.remote_enabled,
            client: &self.client,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Sections(section_message) => {
                update::handle_sections_message(&mut ctx, section_message)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::PageScrolled(offset) => update::handle_page_scrolled(&mut ctx, offset),
            Message::ImageFetched { url, result } => {
                update::handle_image_fetched(&mut ctx, url, result)
            }
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            menu_open: self.menu_open,
            scrolled: self.scrolled,
            selected_album: self.selected_album.and_then(|id| self.catalog.album(id)),
            contact: &self.contact,
            images: view::ImageLookup {
                images: &self.images,
                failed: &self.failed,
                remote_enabled: self.remote_enabled,
            },
            notifications: &self.notifications,
        })
    }
}
