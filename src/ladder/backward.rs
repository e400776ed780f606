use std::collections::{BTreeSet, HashSet};

use rayon::prelude::*;
use tracing::debug;

use super::adjacency::AdjacencyCache;
use super::graph::Graph;
use crate::vocab::{NeighborStrategy, Vocabulary};

/// Breadth-first expansion over a vocabulary. Produces one adjacency map per
/// BFS depth, where every word maps to its neighbors in the next depth only.
#[derive(Clone, Copy)]
pub struct Expander<'a> {
    pub vocabulary: &'a Vocabulary,
    pub strategy: NeighborStrategy,
    pub cache: Option<&'a AdjacencyCache>,
    /// Evaluate the words of a level on the rayon pool
    pub parallel: bool,
}

impl<'a> Expander<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            strategy: NeighborStrategy::default(),
            cache: None,
            parallel: false,
        }
    }

    fn unvisited_neighbors(&self, word: &str, visited: &HashSet<String>) -> BTreeSet<String> {
        self.vocabulary
            .neighbors(word, self.strategy, self.cache)
            .into_iter()
            .filter(|next| !visited.contains(next))
            .collect()
    }

    /// Fills in the successors of every word in `level` and returns the union
    /// of them. `visited` is only read here so that every word of the level
    /// sees the same set regardless of evaluation order.
    pub fn expand_level(&self, level: &mut Graph, visited: &HashSet<String>) -> BTreeSet<String> {
        let words: Vec<&str> = level.words().collect();
        let expanded: Vec<(String, BTreeSet<String>)> = if self.parallel {
            words
                .par_iter()
                .map(|&word| (word.to_string(), self.unvisited_neighbors(word, visited)))
                .collect()
        } else {
            words
                .iter()
                .map(|&word| (word.to_string(), self.unvisited_neighbors(word, visited)))
                .collect()
        };

        let mut next_words = BTreeSet::new();
        for (word, successors) in expanded {
            next_words.extend(successors.iter().cloned());
            level.set_successors(&word, successors);
        }
        next_words
    }

    /// Builds the levels from `start` until one contains `end`. Returns `None`
    /// when a level discovers no new words before `end` is reached.
    /// When `start == end` the single level `{start: {}}` is returned.
    pub fn find_path_backward(&self, start: &str, end: &str) -> Option<Vec<Graph>> {
        if start == end {
            return Some(vec![Graph::with_word(start)]);
        }

        let mut visited = HashSet::from([start.to_string()]);
        let mut levels = vec![Graph::with_word(start)];
        loop {
            let level = levels.last_mut()?;
            let next_words = self.expand_level(level, &visited);
            debug!(
                depth = levels.len(),
                discovered = next_words.len(),
                "expanded level"
            );

            visited.extend(next_words.iter().cloned());
            let found = next_words.contains(end);
            let no_progress = next_words.is_empty();
            levels.push(
                next_words
                    .into_iter()
                    .map(|word| (word, BTreeSet::new()))
                    .collect(),
            );

            if found {
                return Some(levels);
            }
            if no_progress {
                debug!(start, end, "vocabulary exhausted before reaching end");
                return None;
            }
        }
    }
}

/// Runs the backward level build with the default automaton lookup.
/// `start == end` gives the single level `{start: {}}` rather than no path.
pub fn find_path_backward(start: &str, end: &str, vocabulary: &Vocabulary) -> Option<Vec<Graph>> {
    Expander::new(vocabulary).find_path_backward(start, end)
}
