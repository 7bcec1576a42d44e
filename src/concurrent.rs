//! Concurrent Cache Access
//!
//! [`ConcurrentLruCache`] puts one [`LruCache`](crate::LruCache) behind a
//! single `parking_lot::Mutex`. Every operation takes the lock for its whole
//! duration, so the chain and index are never observed half-updated and the
//! LRU order stays global and exact.
//!
//! ## Why Mutex Instead of RwLock?
//!
//! Every `get()` reorders the recency chain, so it needs exclusive access
//! just like `put()`. An `RwLock` would hand out write locks for almost every
//! call anyway; `Mutex` is cheaper and says what actually happens.
//!
//! ## Why Not Sharded?
//!
//! Splitting the key space across several locked caches gives more
//! throughput but only approximates LRU: each shard evicts its own oldest
//! entry. This wrapper keeps exact ordering at the cost of a single lock.
//!
//! # Example
//!
//! ```rust
//! use arena_lru::concurrent::ConcurrentLruCache;
//! use arena_lru::config::LruCacheConfig;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLruCache::init(LruCacheConfig::new(1000).unwrap(), None));
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..100 {
//!             let key = format!("key_{}_{}", t, i);
//!             cache.put(key.clone(), i);
//!             let _ = cache.get(&key);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 400);
//! ```

mod lru;

pub use self::lru::ConcurrentLruCache;
