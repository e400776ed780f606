use std::sync::{Mutex, PoisonError};

use cached::{Cached, SizedCache};

/// Checks if `candidate` can follow `word` in a ladder: both have the same
/// number of characters and differ in exactly one position.
pub fn is_next_word_for(word: &str, candidate: &str) -> bool {
    let mut lhs = word.chars();
    let mut rhs = candidate.chars();
    let mut differences = 0;
    loop {
        match (lhs.next(), rhs.next()) {
            (Some(a), Some(b)) => {
                if a != b {
                    differences += 1;
                    if differences > 1 {
                        return false;
                    }
                }
            }
            (None, None) => return differences == 1,
            // Lengths differ
            _ => return false,
        }
    }
}

/// Memoized version of [`is_next_word_for`]. Entries are keyed by the
/// unordered pair of word positions in one fixed word list, so a cache must
/// not be shared between vocabularies. Least-recently-used entries are
/// evicted once the cache reaches its capacity.
pub struct AdjacencyCache {
    cache: Mutex<SizedCache<(usize, usize), bool>>,
}

impl AdjacencyCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: Mutex::new(SizedCache::with_size(capacity.max(1))),
        }
    }

    /// Takes each word together with its position in the word list
    pub fn is_next_word_for(
        &self,
        (i, word): (usize, &str),
        (j, candidate): (usize, &str),
    ) -> bool {
        let key = (i.min(j), i.max(j));
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(&adjacent) = cache.cache_get(&key) {
            return adjacent;
        }
        let adjacent = is_next_word_for(word, candidate);
        cache.cache_set(key, adjacent);
        adjacent
    }

    /// Number of pairs currently memoized
    pub fn len(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cache_size()
    }

    pub fn hits(&self) -> u64 {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cache_hits()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("dot", "dog", true)]
    #[case("dot", "hog", false)]
    #[case("hit", "hot", true)]
    #[case("hot", "hot", false)]
    #[case("hot", "ho", false)]
    #[case("ho", "hot", false)]
    #[case("a", "b", true)]
    #[case("", "", false)]
    #[case("café", "cafe", true)]
    #[case("straße", "strasse", false)]
    fn test_is_next_word_for(#[case] word: &str, #[case] candidate: &str, #[case] expected: bool) {
        assert_eq!(is_next_word_for(word, candidate), expected);
        // Adjacency is symmetric
        assert_eq!(is_next_word_for(candidate, word), expected);
    }

    #[test]
    fn test_cache_is_keyed_by_unordered_pair() {
        let cache = AdjacencyCache::with_capacity(16);
        assert!(cache.is_next_word_for((1, "dot"), (0, "dog")));
        assert!(cache.is_next_word_for((0, "dog"), (1, "dot")));
        assert!(!cache.is_next_word_for((1, "dot"), (2, "hog")));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn test_cache_is_bounded() {
        let cache = AdjacencyCache::with_capacity(2);
        let words = ["aa", "ab", "ac", "ad", "ae", "za", "zz"];
        for (i, word) in words.iter().enumerate().take(5) {
            cache.is_next_word_for((6, "zz"), (i, word));
        }
        assert_eq!(cache.len(), 2);
        // Evicted entries are recomputed with the same answer
        assert!(!cache.is_next_word_for((0, "aa"), (6, "zz")));
        assert!(cache.is_next_word_for((6, "zz"), (5, "za")));
    }
}
