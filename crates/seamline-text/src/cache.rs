#![forbid(unsafe_code)]

//! LRU cache of string display widths.
//!
//! Widgets re-measure the same labels every frame. [`WidthCache`] memoizes
//! [`display_width`](crate::display_width) keyed by an `FxHasher` hash of the
//! text. Each entry keeps its source text so a hash collision is detected
//! and treated as a miss; a hit is therefore always identical to a fresh
//! measurement.

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;

use crate::width::{ascii_width, measure};

/// Statistics for a [`WidthCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidthCacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to measure.
    pub misses: u64,
    /// Misses caused by two texts sharing a hash.
    pub collisions: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum number of entries.
    pub capacity: usize,
}

impl WidthCacheStats {
    /// Hit rate as a fraction (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of display widths.
///
/// The cache is not `Sync`. Use one per thread (the `thread_local_cache`
/// feature does exactly that) or wrap it in a `Mutex`.
#[derive(Debug)]
pub struct WidthCache {
    cache: LruCache<u64, (Box<str>, usize)>,
    stats: WidthCacheStats,
}

impl WidthCache {
    /// Capacity used by [`WidthCache::default`].
    pub const DEFAULT_CAPACITY: usize = 4096;

    /// Create a cache holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            cache: LruCache::new(non_zero(capacity)),
            stats: WidthCacheStats {
                capacity,
                ..Default::default()
            },
        }
    }

    /// Width of `text`, measuring and caching it on a miss.
    ///
    /// Printable ASCII is measured directly and never stored.
    pub fn get_or_compute(&mut self, text: &str) -> usize {
        if let Some(width) = ascii_width(text) {
            return width;
        }
        let key = hash_text(text);
        if let Some((stored, width)) = self.cache.get(&key) {
            if stored.as_ref() == text {
                self.stats.hits += 1;
                return *width;
            }
            self.stats.collisions += 1;
            tracing::trace!(key, "width cache hash collision");
        }
        self.stats.misses += 1;
        let width = measure(text);
        self.cache.put(key, (text.into(), width));
        self.stats.size = self.cache.len();
        width
    }

    /// Cached width of `text`, without measuring on a miss.
    pub fn get(&mut self, text: &str) -> Option<usize> {
        let key = hash_text(text);
        match self.cache.get(&key) {
            Some((stored, width)) if stored.as_ref() == text => Some(*width),
            _ => None,
        }
    }

    /// Whether `text` is cached (does not touch recency).
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.cache
            .peek(&hash_text(text))
            .is_some_and(|(stored, _)| stored.as_ref() == text)
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Current statistics.
    #[must_use]
    pub fn stats(&self) -> WidthCacheStats {
        self.stats
    }

    /// Drop every entry. Statistics other than `size` are kept.
    pub fn clear(&mut self) {
        tracing::debug!(
            entries = self.cache.len(),
            hit_rate = self.stats.hit_rate(),
            "width cache cleared"
        );
        self.cache.clear();
        self.stats.size = 0;
    }

    /// Resize the cache capacity.
    ///
    /// If the new capacity is smaller than the current size, excess entries
    /// are evicted in LRU order.
    pub fn resize(&mut self, new_capacity: usize) {
        let new_capacity = new_capacity.max(1);
        tracing::debug!(
            from = self.stats.capacity,
            to = new_capacity,
            "width cache resized"
        );
        self.cache.resize(non_zero(new_capacity));
        self.stats.capacity = new_capacity;
        self.stats.size = self.cache.len();
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

fn non_zero(capacity: usize) -> NonZeroUsize {
    NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)
}

fn hash_text(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}

#[cfg(feature = "thread_local_cache")]
thread_local! {
    static THREAD_CACHE: std::cell::RefCell<WidthCache> =
        std::cell::RefCell::new(WidthCache::default());
}

/// Run `f` with this thread's shared width cache.
#[cfg(feature = "thread_local_cache")]
pub fn with_thread_cache<R>(f: impl FnOnce(&mut WidthCache) -> R) -> R {
    THREAD_CACHE.with(|cache| f(&mut cache.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn hit_matches_miss() {
        let mut cache = WidthCache::new(8);
        let first = cache.get_or_compute("日本語");
        let second = cache.get_or_compute("日本語");
        assert_eq!(first, 6);
        assert_eq!(first, second);
        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.size, 1);
    }

    #[test]
    fn ascii_bypasses_storage() {
        let mut cache = WidthCache::new(8);
        assert_eq!(cache.get_or_compute("plain"), 5);
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 0);
    }

    #[test]
    fn lru_eviction() {
        let mut cache = WidthCache::new(2);
        cache.get_or_compute("日");
        cache.get_or_compute("本");
        cache.get_or_compute("日");
        cache.get_or_compute("語");
        assert!(cache.contains("日"));
        assert!(!cache.contains("本"));
        assert!(cache.contains("語"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn get_without_compute() {
        let mut cache = WidthCache::new(4);
        assert_eq!(cache.get("🧩"), None);
        cache.get_or_compute("🧩");
        assert_eq!(cache.get("🧩"), Some(2));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let cache = WidthCache::new(0);
        assert_eq!(cache.stats().capacity, 1);
    }

    #[test]
    fn hit_rate() {
        let stats = WidthCacheStats {
            hits: 3,
            misses: 1,
            ..Default::default()
        };
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
        assert_eq!(WidthCacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    #[traced_test]
    fn resize_evicts_and_logs() {
        let mut cache = WidthCache::new(4);
        for text in ["日", "本", "語", "テ"] {
            cache.get_or_compute(text);
        }
        cache.resize(2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().size, 2);
        assert!(logs_contain("width cache resized"));
    }

    #[test]
    #[traced_test]
    fn clear_logs_and_empties() {
        let mut cache = WidthCache::default();
        cache.get_or_compute("日本");
        cache.clear();
        assert!(cache.is_empty());
        assert!(logs_contain("width cache cleared"));
    }
}
