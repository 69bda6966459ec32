// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::remote::RemoteImage;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections::{self, contact};
use iced::widget::scrollable::AbsoluteOffset;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Sections(sections::Message),
    Contact(contact::Message),
    Gallery(gallery::Message),
    /// The page scrollable reported a new offset.
    PageScrolled(AbsoluteOffset),
    /// A remote image fetch finished, successfully or not.
    ImageFetched {
        url: String,
        result: Result<RemoteImage, Error>,
    },
    Notification(notifications::Message),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// Escape closes the gallery, then the menu.
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `VVS_PORTFOLIO_CONFIG_DIR` environment
    /// variable.
    pub config_dir: Option<String>,
    /// Disables remote image fetching for this session.
    pub offline: bool,
}
