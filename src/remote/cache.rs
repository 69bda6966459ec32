// SPDX-License-Identifier: MPL-2.0
//! URL-keyed LRU cache for fetched images.
//!
//! # Design
//!
//! - **LRU eviction**: least recently used images are evicted first
//! - **Memory-bounded**: total size limited by a configurable byte limit
//! - **URL-keyed**: images indexed by their source URL
//!
//! Sized for a session that opens every album: 6 covers + portrait + a few
//! open galleries fit comfortably in the default budget.

use super::RemoteImage;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default cache size in bytes (64 MB).
pub const DEFAULT_CACHE_BYTES: usize = 64 * 1024 * 1024;

/// Minimum cache size in bytes (8 MB).
pub const MIN_CACHE_BYTES: usize = 8 * 1024 * 1024;

/// Maximum cache size in bytes (256 MB).
pub const MAX_CACHE_BYTES: usize = 256 * 1024 * 1024;

/// Default maximum number of images to cache.
///
/// Two open albums' worth of tiles plus covers and the portrait.
pub const DEFAULT_MAX_IMAGES: usize = 48;

/// Minimum images to cache.
pub const MIN_MAX_IMAGES: usize = 8;

/// Maximum images to cache.
pub const MAX_MAX_IMAGES: usize = 128;

/// Configuration for the image cache.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Maximum cache size in bytes.
    pub max_bytes: usize,

    /// Maximum number of images to cache.
    pub max_images: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_CACHE_BYTES,
            max_images: DEFAULT_MAX_IMAGES,
        }
    }
}

impl CacheConfig {
    /// Creates a new cache configuration with clamped limits.
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_CACHE_BYTES, MAX_CACHE_BYTES),
            max_images: max_images.clamp(MIN_MAX_IMAGES, MAX_MAX_IMAGES),
        }
    }
}

/// Cached image entry with its transfer size.
#[derive(Debug, Clone)]
struct CacheEntry {
    handle: Handle,
    size_bytes: usize,
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of images currently in cache.
    pub image_count: usize,

    /// Total bytes currently used by cached images.
    pub total_bytes: usize,

    /// Number of cache hits.
    pub hits: u64,

    /// Number of cache misses.
    pub misses: u64,

    /// Number of images evicted due to limits.
    pub evictions: u64,

    /// Number of images inserted.
    pub insertions: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// LRU cache mapping image URLs to decoded handles.
pub struct ImageCache {
    cache: LruCache<String, CacheEntry>,
    config: CacheConfig,
    current_bytes: usize,
    stats: CacheStats,
}

impl ImageCache {
    /// Creates a new cache with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_MAX_IMAGES` is zero, which would indicate a build
    /// configuration error.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(
            NonZeroUsize::new(DEFAULT_MAX_IMAGES).expect("DEFAULT_MAX_IMAGES must be non-zero"),
        );

        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    /// Creates a new cache with the default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    /// Inserts an image into the cache.
    ///
    /// Returns `false` when the image is too large to ever fit.
    pub fn insert(&mut self, url: String, image: RemoteImage) -> bool {
        let entry = CacheEntry {
            handle: image.handle,
            size_bytes: image.size_bytes,
        };

        // Never admit an image larger than half the cache budget
        if entry.size_bytes > self.config.max_bytes / 2 {
            return false;
        }

        while self.current_bytes + entry.size_bytes > self.config.max_bytes
            && !self.cache.is_empty()
        {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }

        if let Some(existing) = self.cache.pop(&url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        self.current_bytes += entry.size_bytes;
        self.cache.put(url, entry);
        self.stats.insertions += 1;
        self.stats.image_count = self.cache.len();
        self.stats.total_bytes = self.current_bytes;

        true
    }

    /// Gets an image handle by URL, updating LRU order.
    ///
    /// The handle is reference-counted internally, so the clone is cheap.
    pub fn get(&mut self, url: &str) -> Option<Handle> {
        if let Some(entry) = self.cache.get(url) {
            self.stats.hits += 1;
            Some(entry.handle.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Checks for a URL without updating LRU order or stats.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.cache.contains(url)
    }

    /// Gets an image handle without updating LRU order or stats.
    ///
    /// Used by the renderer, which must not take `&mut self`.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<Handle> {
        self.cache.peek(url).map(|entry| entry.handle.clone())
    }

    /// Returns the current cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Returns the current number of cached images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the current memory usage in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("max_images", &self.config.max_images)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(size_bytes: usize) -> RemoteImage {
        RemoteImage {
            handle: Handle::from_bytes(vec![0u8; 4]),
            size_bytes,
        }
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = ImageCache::with_defaults();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.memory_usage(), 0);
    }

    #[test]
    fn insert_and_get_image() {
        let mut cache = ImageCache::with_defaults();
        let url = "https://picsum.photos/seed/120/800/1200".to_string();

        assert!(cache.insert(url.clone(), test_image(10_000)));
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&url).is_some());
    }

    #[test]
    fn lru_eviction_on_byte_limit() {
        let config = CacheConfig {
            max_bytes: MIN_CACHE_BYTES,
            max_images: 100,
        };
        let mut cache = ImageCache::new(config);

        // Each entry is 1 MB; inserting 20 must evict to stay under 8 MB.
        for i in 0..20 {
            cache.insert(format!("https://example.com/{i}.jpg"), test_image(1024 * 1024));
        }

        assert!(cache.memory_usage() <= MIN_CACHE_BYTES);
        assert!(cache.stats().evictions > 0);
    }

    #[test]
    fn contains_checks_without_counting_stats() {
        let mut cache = ImageCache::with_defaults();
        cache.insert("a".to_string(), test_image(100));

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.peek("a").is_some());
        assert!(cache.peek("b").is_none());
        assert_eq!(cache.stats().hits, 0);
        assert_eq!(cache.stats().misses, 0);
    }

    #[test]
    fn oversized_image_is_rejected() {
        let config = CacheConfig {
            max_bytes: MIN_CACHE_BYTES,
            max_images: 100,
        };
        let mut cache = ImageCache::new(config);

        assert!(!cache.insert("big".to_string(), test_image(MIN_CACHE_BYTES)));
        assert!(cache.is_empty());
    }

    #[test]
    fn duplicate_url_updates_entry() {
        let mut cache = ImageCache::with_defaults();
        let url = "dup".to_string();

        cache.insert(url.clone(), test_image(100));
        cache.insert(url.clone(), test_image(200));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.memory_usage(), 200);
    }

    #[test]
    fn stats_track_hits_and_misses() {
        let mut cache = ImageCache::with_defaults();
        cache.insert("hit".to_string(), test_image(100));

        let _ = cache.get("hit");
        let _ = cache.get("miss");

        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
        assert!((cache.stats().hit_rate() - 50.0).abs() < 0.01);
    }

    #[test]
    fn config_clamps_values() {
        let config = CacheConfig::new(0, 0);
        assert_eq!(config.max_bytes, MIN_CACHE_BYTES);
        assert_eq!(config.max_images, MIN_MAX_IMAGES);

        let config = CacheConfig::new(usize::MAX, usize::MAX);
        assert_eq!(config.max_bytes, MAX_CACHE_BYTES);
        assert_eq!(config.max_images, MAX_MAX_IMAGES);
    }
}
