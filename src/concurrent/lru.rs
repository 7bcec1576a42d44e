//! Lock-guarded LRU Cache
//!
//! The multi-threaded counterpart to [`LruCache`](crate::LruCache): the same
//! engine behind one `parking_lot::Mutex`.
//!
//! | Metric | Value |
//! |--------|-------|
//! | Get/Put/Remove | O(1) plus one lock acquisition |
//! | LRU order | Global and exact |
//! | Memory overhead | One Mutex per cache |
//!
//! # When to Use
//!
//! **Use ConcurrentLruCache when:**
//! - Several threads need the same cache
//! - Strict LRU eviction order matters
//!
//! **Consider alternatives when:**
//! - Single-threaded access only → use `LruCache`
//! - Lock contention dominates → shard several caches by key hash

use crate::config::LruCacheConfig;
use crate::lru::LruCache;
use crate::metrics::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LRU cache guarded by a single lock.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq + Clone + Send`.
/// - `V`: Value type. Must implement `Send`; `Clone` for the cloning getters.
/// - `S`: Hash builder type. Defaults to `DefaultHashBuilder`.
///
/// # Example
///
/// ```rust
/// use arena_lru::concurrent::ConcurrentLruCache;
/// use core::num::NonZeroUsize;
///
/// let cache = ConcurrentLruCache::new(NonZeroUsize::new(2).unwrap());
/// cache.put("a".to_string(), 1);
/// cache.put("b".to_string(), 2);
/// assert_eq!(cache.get("a"), Some(1));
/// assert_eq!(cache.put("c".to_string(), 3), Some(("b".to_string(), 2)));
/// ```
pub struct ConcurrentLruCache<K, V, S = DefaultHashBuilder> {
    inner: Mutex<LruCache<K, V, S>>,
}

impl<K, V> ConcurrentLruCache<K, V, DefaultHashBuilder>
where
    K: Hash + Eq + Clone + Send,
    V: Send,
{
    /// Creates a new cache holding at most `cap` entries.
    pub fn new(cap: NonZeroUsize) -> Self {
        Self::init(LruCacheConfig::from(cap), None)
    }

    /// Creates a new cache from a configuration with an optional hasher.
    ///
    /// This is the recommended way to create a concurrent cache.
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            inner: Mutex::new(LruCache::init(config, hasher)),
        }
    }
}

impl<K, V, S> ConcurrentLruCache<K, V, S>
where
    K: Hash + Eq + Clone + Send,
    V: Send,
    S: BuildHasher + Send,
{
    /// Creates a cache with a custom hash builder.
    pub fn init_with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        Self {
            inner: Mutex::new(LruCache::with_config_and_hasher(config, hash_builder)),
        }
    }

    /// Wraps an existing cache, keeping its entries, order and counters.
    pub fn from_cache(cache: LruCache<K, V, S>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// Unwraps the inner cache.
    pub fn into_inner(self) -> LruCache<K, V, S> {
        self.inner.into_inner()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> NonZeroUsize {
        self.inner.lock().cap()
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Number of lookups that found their key.
    pub fn hits(&self) -> u64 {
        self.inner.lock().hits()
    }

    /// Number of lookups that missed.
    pub fn misses(&self) -> u64 {
        self.inner.lock().misses()
    }

    /// Retrieves a value from the cache.
    ///
    /// Returns a **clone** of the value so the lock is not held by the
    /// caller. For operations that don't need ownership, use
    /// [`get_with()`](Self::get_with) instead.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Retrieves a value and applies a function to it while holding the lock.
    ///
    /// Counts as a lookup and promotes the entry, like [`get`](Self::get).
    ///
    /// ```rust
    /// use arena_lru::concurrent::ConcurrentLruCache;
    /// use core::num::NonZeroUsize;
    ///
    /// let cache = ConcurrentLruCache::new(NonZeroUsize::new(4).unwrap());
    /// cache.put(1, "hello".to_string());
    /// assert_eq!(cache.get_with(&1, |v| v.len()), Some(5));
    /// ```
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().get(key).map(f)
    }

    /// Retrieves a mutable reference and applies a function to it.
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.inner.lock().get_mut(key).map(f)
    }

    /// Returns a clone of the value without touching recency or counters.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    /// Returns `true` if `key` is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains(key)
    }

    /// Inserts a key-value pair, returning the evicted entry if any.
    ///
    /// See [`LruCache::put`].
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.lock().put(key, value)
    }

    /// Inserts a key-value pair, returning the value it replaced.
    ///
    /// See [`LruCache::replace`].
    pub fn replace(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().replace(key, value)
    }

    /// Removes a key from the cache.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().remove(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_oldest(&self) -> Option<(K, V)> {
        self.inner.lock().pop_oldest()
    }

    /// Empties the cache and resets its counters.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Snapshot of the keys, newest to oldest.
    pub fn keys(&self) -> Vec<K> {
        self.inner.lock().keys().cloned().collect()
    }

    /// Snapshot of the values, newest to oldest.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.inner.lock().values().cloned().collect()
    }

    /// Runs `f` with exclusive access to the underlying cache.
    ///
    /// Use this to make several calls atomic with respect to other threads.
    ///
    /// ```rust
    /// use arena_lru::concurrent::ConcurrentLruCache;
    /// use core::num::NonZeroUsize;
    ///
    /// let cache: ConcurrentLruCache<&str, i32> =
    ///     ConcurrentLruCache::new(NonZeroUsize::new(4).unwrap());
    /// let inserted = cache.with_lock(|lru| {
    ///     if lru.contains(&"k") {
    ///         false
    ///     } else {
    ///         lru.put("k", 1);
    ///         true
    ///     }
    /// });
    /// assert!(inserted);
    /// ```
    pub fn with_lock<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut LruCache<K, V, S>) -> R,
    {
        f(&mut *self.inner.lock())
    }
}

impl<K, V, S> CacheMetrics for ConcurrentLruCache<K, V, S>
where
    K: Hash + Eq + Clone + Send,
    V: Send,
    S: BuildHasher + Send,
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLRU"
    }
}

impl<K, V, S> fmt::Debug for ConcurrentLruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(cache) => f
                .debug_struct("ConcurrentLruCache")
                .field("inner", &*cache)
                .finish(),
            None => f
                .debug_struct("ConcurrentLruCache")
                .field("inner", &"<locked>")
                .finish(),
        }
    }
}
