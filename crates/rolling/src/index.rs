//! Hash-bucket index over every window of the source document.
//!
//! The key space is bounded by the modulus, so buckets live in a dense arena
//! indexed directly by hash value rather than in a hash map. Each bucket is
//! an append-only list in left-to-right window order; colliding windows stay
//! in the order the source was slid.

use serde::Serialize;

use crate::config::{HashParams, HashStrategy};
use crate::windows::WordSequence;

/// One indexed source window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternEntry<'a> {
    pub window_text: &'a str,
    pub start_index: usize,
}

/// Mapping from window hash to the source windows that produced it.
#[derive(Debug, Clone)]
pub struct PatternIndex<'a> {
    buckets: Vec<Vec<PatternEntry<'a>>>,
    width: usize,
    window_count: usize,
}

impl<'a> PatternIndex<'a> {
    /// Index every window of `width` words in `source`, start index `0`
    /// through `len - width`, none skipped.
    pub fn build(
        source: &'a WordSequence,
        width: usize,
        params: HashParams,
        strategy: HashStrategy,
    ) -> Self {
        let mut buckets: Vec<Vec<PatternEntry<'a>>> = Vec::new();
        let mut window_count = 0;

        for window in source.windows(width, params, strategy) {
            // Hashes are < prime, so the arena never exceeds `prime` buckets.
            let slot = window.hash as usize;
            if slot >= buckets.len() {
                buckets.resize_with(slot + 1, Vec::new);
            }
            buckets[slot].push(PatternEntry {
                window_text: window.text,
                start_index: window.start,
            });
            window_count += 1;
        }

        Self {
            buckets,
            width,
            window_count,
        }
    }

    /// Candidates sharing `hash`, in insertion order. Empty when none do.
    pub fn candidates(&self, hash: u64) -> &[PatternEntry<'a>] {
        usize::try_from(hash)
            .ok()
            .and_then(|slot| self.buckets.get(slot))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First candidate under `hash` whose text equals `text`.
    ///
    /// Colliding-but-unequal candidates are skipped; scanning stops at the
    /// first equal one.
    pub fn find_exact(&self, hash: u64, text: &str) -> Option<&PatternEntry<'a>> {
        self.candidates(hash)
            .iter()
            .find(|candidate| candidate.window_text == text)
    }

    /// Window width in words.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of indexed windows.
    pub fn window_count(&self) -> usize {
        self.window_count
    }

    /// Number of hash values with at least one window.
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|b| !b.is_empty()).count()
    }

    /// Entries whose text differs from the first window in their bucket.
    pub fn collision_count(&self) -> usize {
        self.buckets
            .iter()
            .filter(|bucket| bucket.len() > 1)
            .map(|bucket| {
                let first = bucket[0].window_text;
                bucket.iter().filter(|e| e.window_text != first).count()
            })
            .sum()
    }

    /// Non-empty buckets as `(hash, entries)`, by ascending hash.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &[PatternEntry<'a>])> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(slot, bucket)| (slot as u64, bucket.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::polynomial_hash;

    fn fixture(words: &[&str]) -> (WordSequence, HashParams) {
        (WordSequence::from_words(words), HashParams::default())
    }

    #[test]
    fn indexes_every_window() {
        let (seq, params) = fixture(&["a", "b", "c", "d", "e"]);
        let index = PatternIndex::build(&seq, 3, params, HashStrategy::Rolling);
        assert_eq!(index.window_count(), 3);
        assert_eq!(index.width(), 3);

        let total: usize = index.iter().map(|(_, entries)| entries.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn entries_are_stored_under_their_hash() {
        let (seq, params) = fixture(&["the", "cat", "sat", "on", "the", "mat"]);
        let index = PatternIndex::build(&seq, 2, params, HashStrategy::Rolling);
        for (hash, entries) in index.iter() {
            assert!(hash < params.prime());
            for entry in entries {
                assert_eq!(polynomial_hash(entry.window_text, &params), hash);
            }
        }
    }

    #[test]
    fn candidates_for_unknown_hash_are_empty() {
        let (seq, params) = fixture(&["a", "b"]);
        let index = PatternIndex::build(&seq, 2, params, HashStrategy::Rolling);
        assert!(index.candidates(u64::MAX).is_empty());
        let hash = polynomial_hash("a b", &params);
        assert_eq!(index.candidates(hash).len(), 1);
    }

    #[test]
    fn collisions_keep_insertion_order() {
        // With prime 2 every window lands in one of two buckets.
        let seq = WordSequence::from_words(&["w1", "w2", "w3", "w4", "w5", "w6", "w7"]);
        let params = HashParams::new(256, 2).unwrap();
        let index = PatternIndex::build(&seq, 2, params, HashStrategy::Rolling);
        for (_, entries) in index.iter() {
            let starts: Vec<usize> = entries.iter().map(|e| e.start_index).collect();
            let mut sorted = starts.clone();
            sorted.sort_unstable();
            assert_eq!(starts, sorted);
        }
        assert!(index.occupied_buckets() <= 2);
        assert!(index.collision_count() > 0);
    }

    #[test]
    fn find_exact_resolves_collisions_by_text() {
        let seq = WordSequence::from_words(&["x", "y", "x", "z", "x", "y"]);
        let params = HashParams::new(256, 2).unwrap();
        let index = PatternIndex::build(&seq, 2, params, HashStrategy::Rolling);

        let hash = polynomial_hash("x y", &params);
        let hit = index.find_exact(hash, "x y").expect("window present");
        assert_eq!(hit.start_index, 0, "first equal candidate wins");

        let miss_hash = polynomial_hash("y z", &params);
        assert!(index.find_exact(miss_hash, "y z").is_none());
    }

    #[test]
    fn width_larger_than_source_builds_empty_index() {
        let (seq, params) = fixture(&["a", "b"]);
        let index = PatternIndex::build(&seq, 3, params, HashStrategy::Rolling);
        assert_eq!(index.window_count(), 0);
        assert_eq!(index.occupied_buckets(), 0);
    }

    #[test]
    fn strategies_build_identical_indexes() {
        let words = ["one", "fish", "two", "fish", "red", "fish", "blue", "fish"];
        let seq = WordSequence::from_words(&words);
        let params = HashParams::default();
        let rolling = PatternIndex::build(&seq, 3, params, HashStrategy::Rolling);
        let recompute = PatternIndex::build(&seq, 3, params, HashStrategy::Recompute);
        let a: Vec<_> = rolling.iter().collect();
        let b: Vec<_> = recompute.iter().collect();
        assert_eq!(a, b);
    }
}
