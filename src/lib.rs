#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Operation | Cost | Touches recency | Counts hit/miss |
//! |-----------|------|-----------------|-----------------|
//! | [`LruCache::get`] / [`LruCache::get_mut`] | O(1) | yes | yes |
//! | [`LruCache::put`] / [`LruCache::replace`] | O(1) | yes | no |
//! | [`LruCache::peek`] / [`LruCache::contains`] | O(1) | no | no |
//! | [`LruCache::remove`] / [`LruCache::pop_oldest`] | O(1) | - | no |
//! | [`LruCache::iter`] / [`LruCache::keys`] / [`LruCache::values`] | O(n) | no | no |
//! | [`LruCache::clear`] | O(n) | resets | resets |
//!
//! ## Eviction
//!
//! ```rust
//! use arena_lru::LruCache;
//! use arena_lru::config::LruCacheConfig;
//!
//! let mut cache = LruCache::init(LruCacheConfig::new(2).unwrap(), None);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");                                  // "a" becomes most recently used
//! assert_eq!(cache.put("c", 3), Some(("b", 2)));    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ## Overwriting a Key
//!
//! Putting a key that is already cached overwrites its value in place and
//! makes it the newest entry. It never takes a second slot.
//!
//! ```rust
//! use arena_lru::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
//! cache.put("a", 1);
//! assert_eq!(cache.replace("a", 2), Some(1));
//! assert_eq!(cache.len(), 1);
//! ```
//!
//! ## Shared Access
//!
//! Enable the `concurrent` feature for a cache that can be shared across
//! threads behind one lock:
//!
//! ```toml
//! [dependencies]
//! arena-lru = { version = "0.1", features = ["concurrent"] }
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`config`]: Configuration structures
//! - [`entry`]: The stored key-value pair
//! - [`error`]: Configuration errors
//! - [`metrics`]: Usage counters and reporting
//! - [`concurrent`]: Lock-guarded cache for shared use (requires `concurrent` feature)

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Cache entry type.
///
/// Provides `CacheEntry<K, V>`, the key-value pair stored in each arena slot.
pub mod entry;

/// Doubly linked list stored in a slot arena.
///
/// Entries keep a stable slot index for as long as they are stored, which
/// lets the cache index address them directly. Internal infrastructure.
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// Error types.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Cache metrics system.
///
/// Hit, miss, insertion and eviction counters reported in a deterministic
/// order through the `CacheMetrics` trait.
pub mod metrics;

/// Lock-guarded cache for use from several threads.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use config::LruCacheConfig;
pub use entry::CacheEntry;
pub use error::ConfigError;
pub use lru::LruCache;
pub use metrics::CacheMetrics;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLruCache;
