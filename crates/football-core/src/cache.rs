//! Process-lifetime memo of synthesized statistics.

use std::collections::HashMap;
use std::sync::RwLock;

use rand::Rng;

use crate::stats::{synthesize_statistics, PlayerStatistics};

/// Memoized statistics keyed by player id.
///
/// A player's base statistics stay stable across requests within one process
/// run; trends and heat maps are regenerated per request. Entries are never
/// evicted. The write lock is held across the lookup-then-insert, so two
/// racing requests for the same unseen player resolve to a single record
/// instead of last-write-wins.
pub struct StatsCache {
    records: RwLock<HashMap<i64, PlayerStatistics>>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Return the memoized record for `player_id`, synthesizing and storing
    /// one on first sight.
    pub fn get_or_create(
        &self,
        rng: &mut impl Rng,
        player_id: i64,
        position: &str,
    ) -> PlayerStatistics {
        // Fast path: the player is usually already cached
        if let Ok(records) = self.records.read() {
            if let Some(stats) = records.get(&player_id) {
                return stats.clone();
            }
        }

        // Nothing panics while holding the lock, so a poisoned map is still
        // coherent
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records
            .entry(player_id)
            .or_insert_with(|| synthesize_statistics(rng, position))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_repeat_lookups_are_stable() {
        let cache = StatsCache::new();
        let mut rng = StdRng::seed_from_u64(1);

        let first = cache.get_or_create(&mut rng, 44, "Forward");
        let second = cache.get_or_create(&mut rng, 44, "Forward");
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_position_ignored_after_first_synthesis() {
        let cache = StatsCache::new();
        let mut rng = StdRng::seed_from_u64(2);

        let first = cache.get_or_create(&mut rng, 7, "Goalkeeper");
        // A later request with a different label still returns the memo
        let second = cache.get_or_create(&mut rng, 7, "Striker");
        assert_eq!(first, second);
        assert!(second.saves.is_some());
    }

    #[test]
    fn test_distinct_players_are_independent() {
        let cache = StatsCache::new();
        let mut rng = StdRng::seed_from_u64(3);

        let a = cache.get_or_create(&mut rng, 1, "Goalkeeper");
        let b = cache.get_or_create(&mut rng, 2, "Midfielder");
        assert_eq!(cache.len(), 2);
        assert!(a.saves.is_some());
        assert!(b.saves.is_none());
    }

    #[test]
    fn test_concurrent_first_sight_yields_one_record() {
        use std::sync::Arc;
        use std::thread;

        let cache = Arc::new(StatsCache::new());
        let mut handles = Vec::new();
        for seed in 0..8u64 {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                cache.get_or_create(&mut rng, 99, "Winger")
            }));
        }

        let records: Vec<PlayerStatistics> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(records.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(cache.len(), 1);
    }
}
