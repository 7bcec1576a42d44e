#![no_std]
extern crate alloc;
extern crate arena_lru;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use arena_lru::config::LruCacheConfig;
use arena_lru::LruCache;
use core::num::NonZeroUsize;

fn make_lru<K: core::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig {
        max_size: NonZeroUsize::new(cap).unwrap(),
    };
    LruCache::init(config, None)
}

#[test]
fn test_lru_in_no_std() {
    let mut cache = make_lru(2);

    // Using String as it requires the alloc crate
    let key1 = String::from("key1");
    let key2 = String::from("key2");
    let key3 = String::from("key3");

    cache.put(key1.clone(), 1);
    cache.put(key2.clone(), 2);

    // Check if keys are present
    assert_eq!(*cache.get(&key1).unwrap(), 1);
    assert_eq!(*cache.get(&key2).unwrap(), 2);

    // This should evict key1
    assert_eq!(cache.put(key3.clone(), 3), Some((key1.clone(), 1)));

    assert!(cache.get(&key1).is_none());
    assert_eq!(*cache.get(&key2).unwrap(), 2);
    assert_eq!(*cache.get(&key3).unwrap(), 3);
}

#[test]
fn test_lru_traversal_in_no_std() {
    let mut cache = make_lru(4);

    let keys: Vec<String> = (0..6).map(|i| format!("key{i}")).collect();
    for (i, key) in keys.iter().enumerate() {
        cache.put(key.clone(), i);
    }

    let newest_first: Vec<&String> = cache.keys().collect();
    assert_eq!(newest_first, [&keys[5], &keys[4], &keys[3], &keys[2]]);

    let values: Vec<usize> = cache.values().copied().collect();
    assert_eq!(values, [5, 4, 3, 2]);
}

#[test]
fn test_lru_counters_in_no_std() {
    let mut cache = make_lru(2);

    cache.put(1u32, String::from("one"));
    assert!(cache.get(&1).is_some());
    assert!(cache.get(&2).is_none());
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.misses(), 1);

    cache.clear();
    assert_eq!(cache.hits(), 0);
    assert_eq!(cache.misses(), 0);
    assert!(cache.is_empty());
}
