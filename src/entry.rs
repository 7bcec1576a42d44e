//! Cache Entry Type
//!
//! A `CacheEntry<K, V>` is one stored association: the key it is indexed
//! under and the value handed back on lookup. Entries live in the recency
//! chain's arena; their position in the chain is owned by the list, not by
//! the entry itself.
//!
//! # Memory Layout
//!
//! - `key: K` - User's key type
//! - `value: V` - User's value type
//! - two `Option<usize>` chain links held by the surrounding list node
//!
//! The key is stored twice per entry (once here, once in the index), which is
//! why [`LruCache::put`](crate::LruCache::put) requires `K: Clone`.

use core::fmt;

/// A key-value pair stored in the cache.
///
/// # Examples
///
/// ```
/// use arena_lru::entry::CacheEntry;
///
/// let entry = CacheEntry::new("key", 42);
/// assert_eq!(entry.key, "key");
/// assert_eq!(entry.value, 42);
/// assert_eq!(entry.into_pair(), ("key", 42));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    /// The cached key
    pub key: K,

    /// The cached value
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates a new cache entry.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Borrows the key and value as a tuple.
    #[inline]
    pub fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Consumes the entry, returning the key and value.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn test_entry_pairs() {
        let entry = CacheEntry::new(String::from("apple"), 1);
        let (k, v) = entry.as_pair();
        assert_eq!(k, "apple");
        assert_eq!(*v, 1);
        assert_eq!(entry.into_pair(), (String::from("apple"), 1));
    }

    #[test]
    fn test_entry_debug() {
        let entry = CacheEntry::new("k", 7);
        let debug_str = format!("{:?}", entry);
        assert!(debug_str.contains("CacheEntry"));
        assert!(debug_str.contains("\"k\""));
        assert!(debug_str.contains('7'));
    }
}
