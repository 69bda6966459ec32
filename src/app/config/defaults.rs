// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 860;

/// Default timeout for remote image requests, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

pub(super) fn default_remote_images() -> Option<bool> {
    Some(true)
}

pub(super) fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

pub(super) fn default_window_width() -> Option<u32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

pub(super) fn default_window_height() -> Option<u32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}
