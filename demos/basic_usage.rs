//! Basic LRU Cache Usage
//!
//! Walks through insertion, promotion on read, eviction of the least
//! recently used entry, traversal order, and the metrics report.
//!
//! Run with: cargo run --example basic_usage

use arena_lru::config::LruCacheConfig;
use arena_lru::{CacheMetrics, LruCache};

fn print_order(cache: &LruCache<&str, u32>) {
    let order: Vec<String> = cache
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    println!("   newest -> oldest: [{}]", order.join(", "));
}

fn main() {
    let config = LruCacheConfig::new(3).expect("capacity is non-zero");
    let mut cache: LruCache<&str, u32> = LruCache::init(config, None);

    println!("Filling a cache of capacity {}", cache.cap());
    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);
    print_order(&cache);

    println!("\nReading 'apple' makes it the newest entry");
    if let Some(v) = cache.get(&"apple") {
        println!("   apple -> {v}");
    }
    print_order(&cache);

    println!("\nInserting 'date' evicts the least recently used entry");
    if let Some((key, value)) = cache.put("date", 4) {
        println!("   evicted {key}={value}");
    }
    print_order(&cache);

    println!("\nOverwriting 'cherry' keeps the size unchanged");
    let previous = cache.replace("cherry", 30);
    println!("   previous value: {previous:?}, len: {}", cache.len());
    print_order(&cache);

    println!("\nPeeking at 'apple' does not change the order");
    println!("   peek(apple) -> {:?}", cache.peek(&"apple"));
    print_order(&cache);

    println!("\nA miss is counted too");
    println!("   get(fig) -> {:?}", cache.get(&"fig"));

    println!("\n{} metrics:", cache.algorithm_name());
    for (name, value) in cache.metrics() {
        println!("   {name:<15} {value:.3}");
    }

    cache.clear();
    println!(
        "\nAfter clear: len={}, hits={}, misses={}",
        cache.len(),
        cache.hits(),
        cache.misses()
    );
}
