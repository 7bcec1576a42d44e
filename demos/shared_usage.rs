//! Shared Cache Usage
//!
//! Several worker threads share one lock-guarded LRU cache through an `Arc`.
//!
//! Run with: cargo run --example shared_usage --features concurrent

use arena_lru::config::LruCacheConfig;
use arena_lru::{CacheMetrics, ConcurrentLruCache};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

const WORKERS: usize = 8;
const OPS_PER_WORKER: usize = 10_000;

fn main() {
    let config = LruCacheConfig::new(1_000).expect("capacity is non-zero");
    let cache: Arc<ConcurrentLruCache<usize, String>> =
        Arc::new(ConcurrentLruCache::init(config, None));

    let start = Instant::now();
    let handles: Vec<_> = (0..WORKERS)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..OPS_PER_WORKER {
                    // Overlapping key ranges so workers hit each other's entries
                    let key = (worker * 500 + i) % 2_000;
                    if cache.get_with(&key, |v| v.len()).is_none() {
                        cache.put(key, format!("value-{key}"));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
    let elapsed = start.elapsed();

    println!(
        "{} workers x {} ops in {:?}",
        WORKERS, OPS_PER_WORKER, elapsed
    );
    println!("len={} capacity={}", cache.len(), cache.capacity());
    println!("hits={} misses={}", cache.hits(), cache.misses());

    // Compound read-modify-write under a single lock acquisition
    let total = cache.with_lock(|lru| {
        let next = lru.peek(&0).map(|v| v.len()).unwrap_or(0);
        lru.put(0, "x".repeat(next + 1));
        lru.len()
    });
    println!("entries after update: {total}");

    for (name, value) in cache.metrics() {
        println!("   {name:<15} {value:.3}");
    }
}
