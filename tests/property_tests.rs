//! Model-based property tests.
//!
//! Random operation sequences are applied both to `LruCache` and to a plain
//! `Vec` kept in newest-to-oldest order. After every step the two must agree
//! on contents, order, returned values and counters.

use arena_lru::LruCache;
use proptest::prelude::*;
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
enum Op {
    Put(u8, u32),
    Get(u8),
    Peek(u8),
    Remove(u8),
    PopOldest,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Small key space so hits, overwrites and evictions all happen often
    prop_oneof![
        6 => (0u8..12, any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
        6 => (0u8..12).prop_map(Op::Get),
        2 => (0u8..12).prop_map(Op::Peek),
        2 => (0u8..12).prop_map(Op::Remove),
        1 => Just(Op::PopOldest),
        1 => Just(Op::Clear),
    ]
}

/// Reference implementation: newest entry first.
#[derive(Default)]
struct Model {
    cap: usize,
    entries: Vec<(u8, u32)>,
    hits: u64,
    misses: u64,
}

impl Model {
    fn position(&self, key: u8) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    fn put(&mut self, key: u8, value: u32) -> Option<(u8, u32)> {
        if let Some(pos) = self.position(key) {
            self.entries.remove(pos);
            self.entries.insert(0, (key, value));
            return None;
        }
        let evicted = if self.entries.len() == self.cap {
            self.entries.pop()
        } else {
            None
        };
        self.entries.insert(0, (key, value));
        evicted
    }

    fn get(&mut self, key: u8) -> Option<u32> {
        match self.position(key) {
            Some(pos) => {
                let entry = self.entries.remove(pos);
                self.entries.insert(0, entry);
                self.hits += 1;
                Some(entry.1)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    fn peek(&self, key: u8) -> Option<u32> {
        self.position(key).map(|pos| self.entries[pos].1)
    }

    fn remove(&mut self, key: u8) -> Option<u32> {
        self.position(key).map(|pos| self.entries.remove(pos).1)
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

proptest! {
    #[test]
    fn cache_matches_model(
        cap in 1usize..8,
        ops in prop::collection::vec(op_strategy(), 0..200)
    ) {
        let mut cache: LruCache<u8, u32> = LruCache::new(NonZeroUsize::new(cap).unwrap());
        let mut model = Model { cap, ..Model::default() };

        for op in ops {
            match op {
                Op::Put(k, v) => prop_assert_eq!(cache.put(k, v), model.put(k, v)),
                Op::Get(k) => prop_assert_eq!(cache.get(&k).copied(), model.get(k)),
                Op::Peek(k) => prop_assert_eq!(cache.peek(&k).copied(), model.peek(k)),
                Op::Remove(k) => prop_assert_eq!(cache.remove(&k), model.remove(k)),
                Op::PopOldest => prop_assert_eq!(cache.pop_oldest(), model.entries.pop()),
                Op::Clear => {
                    cache.clear();
                    model.clear();
                }
            }

            let pairs: Vec<(u8, u32)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
            prop_assert_eq!(&pairs, &model.entries);
            prop_assert!(cache.len() <= cap);
            prop_assert_eq!(cache.len(), model.entries.len());
            prop_assert_eq!(cache.hits(), model.hits);
            prop_assert_eq!(cache.misses(), model.misses);
        }
    }

    #[test]
    fn traversals_agree(
        cap in 1usize..16,
        puts in prop::collection::vec((any::<u16>(), any::<u16>()), 0..64),
        touches in prop::collection::vec(any::<u16>(), 0..32)
    ) {
        let mut cache: LruCache<u16, u16> = LruCache::new(NonZeroUsize::new(cap).unwrap());
        for (k, v) in puts {
            cache.put(k, v);
        }
        for k in touches {
            cache.get(&k);
        }

        let keys: Vec<u16> = cache.keys().copied().collect();
        let values: Vec<u16> = cache.values().copied().collect();
        let mut visited = Vec::new();
        cache.for_each(|k, v| visited.push((*k, *v)));

        prop_assert_eq!(keys.len(), cache.len());
        prop_assert_eq!(values.len(), cache.len());
        let zipped: Vec<(u16, u16)> = keys.iter().copied().zip(values.iter().copied()).collect();
        prop_assert_eq!(&zipped, &visited);

        let mut reversed: Vec<u16> = cache.keys().rev().copied().collect();
        reversed.reverse();
        prop_assert_eq!(reversed, keys);
    }

    #[test]
    fn get_returns_latest_put(
        cap in 1usize..8,
        writes in prop::collection::vec((0u8..4, any::<u32>()), 1..50)
    ) {
        // With at most 4 keys and enough capacity nothing is ever evicted
        let mut cache: LruCache<u8, u32> = LruCache::new(NonZeroUsize::new(cap.max(4)).unwrap());
        let mut latest = std::collections::HashMap::new();
        for (k, v) in writes {
            cache.put(k, v);
            latest.insert(k, v);
        }
        for (k, v) in latest {
            prop_assert_eq!(cache.get(&k), Some(&v));
        }
    }
}
