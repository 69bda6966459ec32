// SPDX-License-Identifier: MPL-2.0
//! Remote image fetching.
//!
//! Cover, portrait, and gallery placeholders live on external image hosts
//! and are fetched lazily, one request per URL per session. Decoding is left
//! to the renderer; this module only moves bytes and tracks their size for
//! cache accounting. There is no retry: a URL that fails once renders as a
//! placeholder for the rest of the session.

pub mod cache;

pub use cache::{CacheConfig, CacheStats, ImageCache};

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::time::Duration;

/// A fetched remote image: decoded handle plus the transfer size used for
/// cache accounting.
#[derive(Debug, Clone)]
pub struct RemoteImage {
    pub handle: Handle,
    pub size_bytes: usize,
}

/// Builds the shared HTTP client used for all image requests.
///
/// Falls back to a default client when the builder fails (no TLS backend is
/// an installation problem, not a recoverable one; requests will then report
/// their own errors).
#[must_use]
pub fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("VVSPortfolio/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}

/// Fetches a single image over HTTP.
///
/// Returns the raw encoded bytes wrapped in an Iced image handle. Callers
/// treat any error as terminal for the URL.
pub async fn fetch_image(client: reqwest::Client, url: String) -> Result<RemoteImage> {
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "{url}: HTTP status {}",
            response.status()
        )));
    }

    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Err(Error::Image(format!("{url}: empty response body")));
    }

    let size_bytes = bytes.len();
    Ok(RemoteImage {
        handle: Handle::from_bytes(bytes.to_vec()),
        size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_short_timeout() {
        // Smoke test: the builder path must not panic.
        let _client = build_client(Duration::from_secs(1));
    }

    #[tokio::test]
    async fn fetch_reports_connection_errors() {
        let client = build_client(Duration::from_millis(200));
        // Reserved TEST-NET address; nothing listens here.
        let result = fetch_image(client, "http://192.0.2.1/image.jpg".to_string()).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
