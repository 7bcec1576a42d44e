//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a fixed-capacity LRU cache with O(1) operations for
//! lookup, insertion and eviction.
//!
//! # Algorithm
//!
//! The cache keeps its entries in a recency chain ordered from oldest to
//! newest. Every successful lookup and every put moves the touched entry to
//! the newest end; when a new key arrives at a full cache, the oldest entry is
//! evicted. The chain imposes a strict total order, so there is never a tie to
//! break.
//!
//! # Structure
//!
//! ```text
//!   index: HashMap<K, slot>            arena (List)
//!   ┌─────────┬──────┐          ┌──────┬──────┬──────┬──────┐
//!   │ "a"     │  2   │─────────▶│  0   │  1   │  2   │  3   │
//!   │ "b"     │  0   │          │ "b"  │ free │ "a"  │ "c"  │
//!   │ "c"     │  3   │          └──────┴──────┴──────┴──────┘
//!   └─────────┴──────┘     oldest ─▶ 0 ◀──▶ 2 ◀──▶ 3 ◀─ newest
//! ```
//!
//! The index and the chain share slot identity and are only ever updated
//! together, inside the same `&mut self` method.
//!
//! # Performance Characteristics
//!
//! - get / put / peek / remove: O(1)
//! - clear / iteration: O(n)
//! - The arena is allocated for `max_size` slots up front and vacated slots
//!   are reused, so steady-state churn does not grow it.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe: lookups reorder the chain and need
//! `&mut self`. For shared access, wrap it in a single lock such as
//! `Mutex<LruCache>`, or enable the `concurrent` feature and use
//! `ConcurrentLruCache`.

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::list::{self, List};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::mem;
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Outcome of storing a key.
enum Stored<K, V> {
    /// A new key went into a free slot.
    Inserted,
    /// A new key went in after the oldest entry was evicted.
    Evicted(K, V),
    /// An existing key received a new value; holds the previous one.
    Replaced(V),
}

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When the cache reaches capacity,
/// the least recently used entry will be evicted to make room for new entries.
///
/// # Examples
///
/// ```
/// use arena_lru::LruCache;
/// use core::num::NonZeroUsize;
///
/// let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
///
/// // Add items to the cache
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// assert_eq!(cache.put("cherry", 3), Some(("banana", 2)));
/// assert_eq!(cache.get(&"banana"), None);
///
/// // Newest first
/// let keys: Vec<_> = cache.keys().copied().collect();
/// assert_eq!(keys, ["cherry", "apple"]);
///
/// assert_eq!(cache.hits(), 1);
/// assert_eq!(cache.misses(), 1);
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<CacheEntry<K, V>>,
    map: HashMap<K, usize, S>,
    metrics: LruCacheMetrics,
}

impl<K, V> LruCache<K, V, DefaultHashBuilder>
where
    K: Hash + Eq,
{
    /// Creates a new LRU cache holding at most `cap` entries.
    pub fn new(cap: NonZeroUsize) -> Self {
        LruCache::with_hasher(cap, DefaultHashBuilder::default())
    }

    /// Creates a new LRU cache from a configuration with an optional hasher.
    ///
    /// This is the recommended way to create a cache.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_lru::config::LruCacheConfig;
    /// use arena_lru::LruCache;
    ///
    /// let cache: LruCache<u64, String> = LruCache::init(LruCacheConfig::default(), None);
    /// assert_eq!(cache.cap().get(), 4);
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        LruCache::with_config_and_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K, V> Default for LruCache<K, V, DefaultHashBuilder>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        LruCache::init(LruCacheConfig::default(), None)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the specified capacity and hash builder.
    pub fn with_hasher(cap: NonZeroUsize, hash_builder: S) -> Self {
        Self::with_config_and_hasher(LruCacheConfig::from(cap), hash_builder)
    }

    /// Creates a new LRU cache from a configuration and hash builder.
    pub fn with_config_and_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        let cap = config.capacity();
        LruCache {
            config,
            list: List::new(cap),
            map: HashMap::with_capacity_and_hasher(cap.get(), hash_builder),
            metrics: LruCacheMetrics::new(),
        }
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.list.cap()
    }

    /// Returns the number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Number of lookups that found their key since creation or the last
    /// [`clear`](Self::clear).
    #[inline]
    pub fn hits(&self) -> u64 {
        self.metrics.core.cache_hits
    }

    /// Number of lookups that missed since creation or the last
    /// [`clear`](Self::clear).
    #[inline]
    pub fn misses(&self) -> u64 {
        self.metrics.core.cache_misses()
    }

    /// Returns the full set of usage counters.
    #[inline]
    pub fn lru_metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Looks up `key`, marking it as the most recently used entry.
    ///
    /// Counts a hit or a miss. Looking up the entry that is already the
    /// newest does not touch the chain.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.touch(key)?;
        self.list.get_value(slot).map(|entry| &entry.value)
    }

    /// Like [`get`](Self::get), but returns a mutable reference.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.touch(key)?;
        self.list.get_value_mut(slot).map(|entry| &mut entry.value)
    }

    /// Resolves `key`, promotes it and records the outcome.
    fn touch<Q>(&mut self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(slot) => {
                if self.list.newest() != Some(slot) {
                    self.list.move_to_newest(slot);
                }
                self.metrics.core.record_hit();
                Some(slot)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Returns the value for `key` without changing its recency or the
    /// hit/miss counters.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = *self.map.get(key)?;
        self.list.get_value(slot).map(|entry| &entry.value)
    }

    /// Returns `true` if `key` is present. Does not change recency or counters.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the entry that would be evicted next.
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        let slot = self.list.oldest()?;
        self.list.get_value(slot).map(CacheEntry::as_pair)
    }

    /// Returns the most recently used entry.
    pub fn peek_newest(&self) -> Option<(&K, &V)> {
        let slot = self.list.newest()?;
        self.list.get_value(slot).map(CacheEntry::as_pair)
    }

    /// Removes `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.map.remove(key)?;
        let entry = self.list.remove(slot)?;
        self.metrics.core.record_removal();
        Some(entry.value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_oldest(&mut self) -> Option<(K, V)> {
        let entry = self.list.remove_oldest()?;
        self.map.remove(&entry.key);
        self.metrics.core.record_removal();
        Some(entry.into_pair())
    }

    /// Empties the cache and resets its counters. Capacity is unchanged.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing LRU cache: {} entries, {} hits, {} misses",
            self.len(),
            self.hits(),
            self.misses()
        );
        self.map.clear();
        self.list.clear();
        self.metrics = LruCacheMetrics::new();
    }

    /// Iterates over the entries from newest to oldest.
    ///
    /// Every traversal starts at the newest entry. The iterator is
    /// double-ended; `.rev()` walks oldest to newest.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Iterates over the keys from newest to oldest.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterates over the values from newest to oldest.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Calls `visit` once per entry, newest to oldest.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        for (key, value) in self.iter() {
            visit(key, value);
        }
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Stores `value` under `key` as the most recently used entry.
    ///
    /// If the cache was full and `key` is new, the least recently used entry
    /// is evicted and returned. If `key` was already present its value is
    /// overwritten in place and moved to the newest position; nothing is
    /// evicted and `None` is returned. Use [`replace`](Self::replace) to get
    /// the previous value back.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        match self.store(key, value) {
            Stored::Evicted(key, value) => Some((key, value)),
            Stored::Inserted | Stored::Replaced(_) => None,
        }
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// Behaves like [`put`](Self::put), including eviction when a new key
    /// arrives at a full cache; the evicted entry is dropped.
    pub fn replace(&mut self, key: K, value: V) -> Option<V> {
        match self.store(key, value) {
            Stored::Replaced(old) => Some(old),
            Stored::Inserted | Stored::Evicted(..) => None,
        }
    }

    fn store(&mut self, key: K, value: V) -> Stored<K, V> {
        if let Some(&slot) = self.map.get(&key) {
            if let Some(entry) = self.list.get_value_mut(slot) {
                let old = mem::replace(&mut entry.value, value);
                self.list.move_to_newest(slot);
                self.metrics.core.record_update();
                return Stored::Replaced(old);
            }
        }

        let mut outcome = Stored::Inserted;
        if self.list.is_full() {
            if let Some(entry) = self.list.remove_oldest() {
                self.map.remove(&entry.key);
                self.metrics.core.record_eviction();
                log::trace!("evicted oldest entry, capacity {}", self.cap());
                let (key, value) = entry.into_pair();
                outcome = Stored::Evicted(key, value);
            }
        }

        if let Some(slot) = self.list.add(CacheEntry::new(key.clone(), value)) {
            self.map.insert(key, slot);
            self.metrics.core.record_insertion();
        }

        outcome
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity())
            .field("len", &self.list.len())
            .field("hits", &self.metrics.core.cache_hits)
            .field("misses", &self.metrics.core.cache_misses())
            .finish()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cache entries, newest first.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, CacheEntry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(CacheEntry::as_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(CacheEntry::as_pair)
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> fmt::Debug for Iter<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

/// Iterator over cache keys, newest first.
///
/// Created by [`LruCache::keys`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

impl<'a, K, V> fmt::Debug for Keys<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

/// Iterator over cache values, newest first.
///
/// Created by [`LruCache::values`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}

impl<'a, K, V> FusedIterator for Values<'a, K, V> {}

impl<'a, K, V> fmt::Debug for Values<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
