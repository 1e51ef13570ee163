// Bounded surface → stem cache shared between threads.
//
// Eviction is CLOCK (second chance): each slot has a referenced bit that a
// hit sets; the insertion hand sweeps the slots, clearing set bits and
// evicting the first slot whose bit is already clear. Hits only need the
// read lock because the bit is atomic.

use std::sync::atomic::{AtomicBool, Ordering};

use hashbrown::HashMap;
use parking_lot::RwLock;

/// Default capacity in entries.
pub const DEFAULT_CACHE_CAPACITY: usize = 50_000;

#[derive(Debug)]
struct Slot {
    key: String,
    stem: String,
    referenced: AtomicBool,
}

#[derive(Debug, Default)]
struct Inner {
    index: HashMap<String, usize>,
    slots: Vec<Slot>,
    hand: usize,
}

/// A fixed-capacity cache mapping a lowercased surface to its stem.
/// Eviction is CLOCK, an approximation of LRU: a read spares an entry for one sweep.
///
/// Capacity 0 disables caching: lookups always miss and inserts are no-ops.
#[derive(Debug)]
pub struct StemCache {
    capacity: usize,
    inner: RwLock<Inner>,
}

impl StemCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: RwLock::new(Inner::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.inner.read().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached stem of `key`, marking the entry as recently used.
    pub fn get(&self, key: &str) -> Option<String> {
        if self.capacity == 0 {
            return None;
        }
        let inner = self.inner.read();
        let &slot = inner.index.get(key)?;
        let slot = &inner.slots[slot];
        slot.referenced.store(true, Ordering::Relaxed);
        Some(slot.stem.clone())
    }

    /// Store a stem. An existing entry for `key` is overwritten.
    pub fn insert(&self, key: &str, stem: &str) {
        if self.capacity == 0 {
            return;
        }
        let mut inner = self.inner.write();
        if let Some(&i) = inner.index.get(key) {
            let slot = &mut inner.slots[i];
            slot.stem.clear();
            slot.stem.push_str(stem);
            *slot.referenced.get_mut() = true;
            return;
        }

        let slot = Slot {
            key: key.to_string(),
            stem: stem.to_string(),
            referenced: AtomicBool::new(false),
        };
        if inner.slots.len() < self.capacity {
            let i = inner.slots.len();
            inner.slots.push(slot);
            inner.index.insert(key.to_string(), i);
            return;
        }

        let victim = inner.advance_hand();
        let old = std::mem::replace(&mut inner.slots[victim], slot);
        inner.index.remove(&old.key);
        inner.index.insert(key.to_string(), victim);
    }

    /// Look up `key`, computing and storing the stem on a miss.
    pub fn get_or_insert_with(&self, key: &str, f: impl FnOnce() -> String) -> String {
        if let Some(stem) = self.get(key) {
            return stem;
        }
        let stem = f();
        self.insert(key, &stem);
        stem
    }

    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.index.clear();
        inner.slots.clear();
        inner.hand = 0;
    }
}

impl Inner {
    /// Sweep to the next slot without a second chance and return it.
    fn advance_hand(&mut self) -> usize {
        loop {
            let i = self.hand;
            self.hand = (self.hand + 1) % self.slots.len();
            let referenced = self.slots[i].referenced.get_mut();
            if *referenced {
                *referenced = false;
            } else {
                return i;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cache_is_empty() {
        let cache = StemCache::new(4);
        assert!(cache.is_empty());
        assert_eq!(cache.get("kitaplar"), None);
    }

    #[test]
    fn insert_and_get() {
        let cache = StemCache::new(4);
        cache.insert("kitaplar", "kitap");
        assert_eq!(cache.get("kitaplar").as_deref(), Some("kitap"));
        cache.insert("kitaplar", "kitapçı");
        assert_eq!(cache.get("kitaplar").as_deref(), Some("kitapçı"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn zero_capacity_disables() {
        let cache = StemCache::new(0);
        cache.insert("evler", "ev");
        assert_eq!(cache.get("evler"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn evicts_unreferenced_first() {
        let cache = StemCache::new(2);
        cache.insert("a", "1");
        cache.insert("b", "2");
        // "a" gets a second chance, "b" does not
        assert!(cache.get("a").is_some());
        cache.insert("c", "3");
        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_some());
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("c").as_deref(), Some("3"));
    }

    #[test]
    fn unread_entries_leave_in_insertion_order() {
        let cache = StemCache::new(3);
        for (k, v) in [("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")] {
            cache.insert(k, v);
        }
        assert_eq!(cache.get("a"), None);
        cache.insert("e", "5");
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.len(), 3);
        for k in ["c", "d", "e"] {
            assert!(cache.get(k).is_some(), "{k}");
        }
    }

    #[test]
    fn get_or_insert_with_computes_once() {
        let cache = StemCache::new(8);
        let mut calls = 0;
        for _ in 0..3 {
            let stem = cache.get_or_insert_with("evlerde", || {
                calls += 1;
                "ev".to_string()
            });
            assert_eq!(stem, "ev");
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn clear_resets() {
        let cache = StemCache::new(2);
        cache.insert("a", "1");
        cache.clear();
        assert!(cache.is_empty());
        cache.insert("b", "2");
        assert_eq!(cache.get("b").as_deref(), Some("2"));
    }
}
