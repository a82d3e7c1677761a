use std::hash::Hash;
use std::time::{Duration, Instant};

use dashmap::DashMap;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// Concurrent page cache where entries go stale after a fixed time.
///
/// Stale entries are never returned; they are dropped on the next `get` of
/// the same key or by [`purge_stale`](Self::purge_stale). Two concurrent
/// misses may both fetch; the later insert wins.
#[derive(Debug)]
pub struct PageCache<K, V>
where
    K: Eq + Hash,
{
    entries: DashMap<K, CacheEntry<V>>,
    stale_time: Duration,
}

impl<K, V> PageCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(stale_time: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            stale_time,
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    /// Fresh value for `key`, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        let fresh = {
            let entry = self.entries.get(key)?;
            if entry.stored_at.elapsed() < self.stale_time {
                Some(entry.value.clone())
            } else {
                None
            }
        };
        if fresh.is_none() {
            self.entries
                .remove_if(key, |_, entry| entry.stored_at.elapsed() >= self.stale_time);
        }
        fresh
    }

    pub fn insert(&self, key: K, value: V) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Stores a page that was fetched elsewhere, e.g. server-rendered initial
    /// data, so the first read does not hit the API again.
    pub fn seed(&self, key: K, value: V) {
        self.insert(key, value);
    }

    pub fn invalidate(&self, key: &K) {
        self.entries.remove(key);
    }

    /// Drops every stale entry and returns how many were removed.
    pub fn purge_stale(&self) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.stored_at.elapsed() < self.stale_time);
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let cache: PageCache<String, u32> = PageCache::new(Duration::from_secs(60));
        cache.insert("a".to_string(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(1));
        assert_eq!(cache.get(&"b".to_string()), None);
    }

    #[test]
    fn test_stale_entries_are_not_returned() {
        let cache: PageCache<String, u32> = PageCache::new(Duration::ZERO);
        cache.insert("a".to_string(), 1);
        assert_eq!(cache.get(&"a".to_string()), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_seed_and_invalidate() {
        let cache: PageCache<u32, &str> = PageCache::new(Duration::from_secs(60));
        cache.seed(1, "initial");
        assert_eq!(cache.get(&1), Some("initial"));
        cache.invalidate(&1);
        assert_eq!(cache.get(&1), None);
    }

    #[test]
    fn test_purge_stale() {
        let cache: PageCache<u32, u32> = PageCache::new(Duration::ZERO);
        cache.insert(1, 1);
        cache.insert(2, 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.purge_stale(), 2);
        assert!(cache.is_empty());

        let cache: PageCache<u32, u32> = PageCache::new(Duration::from_secs(60));
        cache.insert(1, 1);
        assert_eq!(cache.purge_stale(), 0);
        assert_eq!(cache.len(), 1);
    }
}
