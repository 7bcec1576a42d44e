//! Cache Configuration Module
//!
//! Configuration structures for the cache. Each struct has public fields so
//! it can be written out directly, plus a validating constructor for values
//! that arrive at runtime.
//!
//! # Design
//!
//! - **Simple**: Create the struct with all fields set
//! - **Type safety**: A zero capacity cannot be represented
//! - **Defaults**: `Default` gives a small cache of [`DEFAULT_MAX_SIZE`] entries
//!
//! # Examples
//!
//! ```
//! use arena_lru::config::LruCacheConfig;
//! use arena_lru::LruCache;
//! use core::num::NonZeroUsize;
//!
//! // Create config with all fields
//! let config = LruCacheConfig {
//!     max_size: NonZeroUsize::new(1000).unwrap(),
//! };
//!
//! // Create cache from config
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.cap().get(), 1000);
//! ```

pub mod lru;

pub use lru::{LruCacheConfig, DEFAULT_MAX_SIZE};
