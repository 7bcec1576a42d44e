//! Configuration for the Least Recently Used (LRU) cache.
//!
//! # Sizing
//!
//! `max_size` is a hard cap on the number of live entries. The arena that
//! backs the recency chain is allocated up front for `max_size` slots and
//! never grows past it, so memory use is roughly:
//!
//! ```text
//! Total Memory ≈ max_size × (size_of::<K>() × 2 + size_of::<V>() + overhead_per_entry)
//! overhead_per_entry ≈ 24-40 bytes (two slot links, index bucket)
//! ```
//!
//! # Examples
//!
//! ```
//! use arena_lru::config::LruCacheConfig;
//! use arena_lru::LruCache;
//!
//! // Validated at runtime, e.g. from a settings file
//! let config = LruCacheConfig::new(128).unwrap();
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None);
//! assert_eq!(cache.cap().get(), 128);
//!
//! // Zero is rejected
//! assert!(LruCacheConfig::new(0).is_err());
//!
//! // Omitted values fall back to the default of 4 entries
//! let config = LruCacheConfig::from_option(None);
//! assert_eq!(config.max_size.get(), 4);
//! ```

use crate::error::ConfigError;
use core::fmt;
use core::num::NonZeroUsize;

/// Capacity used when none is given.
pub const DEFAULT_MAX_SIZE: usize = 4;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// LRU evicts the least recently accessed entry when a new key is inserted
/// into a full cache.
///
/// # Fields
///
/// - `max_size`: Maximum number of entries the cache can hold. Fixed for the
///   lifetime of the cache; `clear` does not change it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub max_size: NonZeroUsize,
}

impl LruCacheConfig {
    /// Builds a configuration, rejecting a zero capacity.
    pub fn new(max_size: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(max_size)
            .map(|max_size| Self { max_size })
            .ok_or(ConfigError::ZeroCapacity)
    }

    /// Builds a configuration from an optional capacity.
    ///
    /// `None` and `Some(0)` both mean "not configured" and yield the default.
    pub fn from_option(max_size: Option<usize>) -> Self {
        max_size
            .and_then(|n| Self::new(n).ok())
            .unwrap_or_default()
    }

    /// Returns the configured capacity.
    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.max_size
    }
}

impl Default for LruCacheConfig {
    fn default() -> Self {
        Self {
            max_size: NonZeroUsize::new(DEFAULT_MAX_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl From<NonZeroUsize> for LruCacheConfig {
    fn from(max_size: NonZeroUsize) -> Self {
        Self { max_size }
    }
}

impl TryFrom<usize> for LruCacheConfig {
    type Error = ConfigError;

    fn try_from(max_size: usize) -> Result<Self, Self::Error> {
        Self::new(max_size)
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("max_size", &self.max_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_config_creation() {
        let config = LruCacheConfig {
            max_size: NonZeroUsize::new(1000).unwrap(),
        };
        assert_eq!(config.max_size.get(), 1000);
        assert_eq!(config.capacity().get(), 1000);
    }

    #[test]
    fn test_lru_config_default() {
        let config = LruCacheConfig::default();
        assert_eq!(config.max_size.get(), DEFAULT_MAX_SIZE);
        assert_eq!(config.max_size.get(), 4);
    }

    #[test]
    fn test_lru_config_validation() {
        assert_eq!(LruCacheConfig::new(0), Err(ConfigError::ZeroCapacity));
        assert_eq!(LruCacheConfig::new(3).unwrap().max_size.get(), 3);
        assert_eq!(
            LruCacheConfig::try_from(0usize),
            Err(ConfigError::ZeroCapacity)
        );
        assert_eq!(LruCacheConfig::try_from(9usize).unwrap().max_size.get(), 9);
    }

    #[test]
    fn test_lru_config_from_option() {
        assert_eq!(LruCacheConfig::from_option(None).max_size.get(), 4);
        assert_eq!(LruCacheConfig::from_option(Some(0)).max_size.get(), 4);
        assert_eq!(LruCacheConfig::from_option(Some(16)).max_size.get(), 16);
    }

    #[test]
    fn test_lru_config_from_nonzero() {
        let config: LruCacheConfig = NonZeroUsize::new(2).unwrap().into();
        assert_eq!(config.max_size.get(), 2);
    }
}
