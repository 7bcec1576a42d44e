use arena_lru::config::LruCacheConfig;
use arena_lru::LruCache;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::num::NonZeroUsize;

fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig {
        max_size: NonZeroUsize::new(cap).unwrap(),
    };
    LruCache::init(config, None)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const CACHE_SIZE: usize = 1000;
    let mut group = c.benchmark_group("Cache Operations");

    {
        let mut cache = make_lru(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("LRU get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });

        // Repeated hits on the newest entry skip relinking
        group.bench_function("LRU get newest", |b| {
            cache.get(&0);
            b.iter(|| {
                for _ in 0..100 {
                    black_box(cache.get(&0));
                }
            });
        });

        group.bench_function("LRU get miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i + CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LRU peek", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.peek(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LRU put existing", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.put(i % CACHE_SIZE, i));
                }
            });
        });
    }

    {
        let mut cache = make_lru(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        // Every key is new, so each put evicts the oldest entry
        let mut next = CACHE_SIZE;
        group.bench_function("LRU put evicting", |b| {
            b.iter(|| {
                for _ in 0..100 {
                    black_box(cache.put(next, next));
                    next += 1;
                }
            });
        });
    }

    group.finish();
}

pub fn traversal_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Traversal");

    for size in [16usize, 256, 4096] {
        let mut cache = make_lru(size);
        for i in 0..size {
            cache.put(i, i);
        }

        group.bench_with_input(BenchmarkId::new("keys", size), &cache, |b, cache| {
            b.iter(|| black_box(cache.keys().count()));
        });

        group.bench_with_input(BenchmarkId::new("for_each", size), &cache, |b, cache| {
            b.iter(|| {
                let mut sum = 0usize;
                cache.for_each(|_, v| sum += *v);
                black_box(sum)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark, traversal_benchmark);
criterion_main!(benches);
