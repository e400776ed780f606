use std::iter::Take;

use tracing::{debug, info};

use super::adjacency::AdjacencyCache;
use super::backward::Expander;
use super::forward::find_path_forward;
use super::graph::{merge_graphs, Graph};
use super::paths::{all_paths, Paths};
use super::Ladder;
use crate::config::LadderConfig;
use crate::error::Result;
use crate::vocab::Vocabulary;

/// Builds the pruned shortest-path graph between two words, or `None` when
/// they are not connected through the vocabulary.
pub fn find_shortest_path(start: &str, end: &str, vocabulary: &Vocabulary) -> Option<Graph> {
    shortest_path_graph(&Expander::new(vocabulary), start, end)
}

/// Every shortest ladder from `start` to `end`, sorted. Empty when no ladder
/// exists.
pub fn shortest_ladders(start: &str, end: &str, vocabulary: &Vocabulary) -> Result<Vec<Ladder>> {
    match find_shortest_path(start, end, vocabulary) {
        Some(graph) => Ok(collect_ladders(all_paths(&graph, start, end)?)),
        None => Ok(Vec::new()),
    }
}

fn shortest_path_graph(expander: &Expander, start: &str, end: &str) -> Option<Graph> {
    let levels = expander.find_path_backward(start, end)?;
    let graph = merge_graphs(&levels);
    let pruned = find_path_forward(&graph, end);
    debug!(
        levels = levels.len(),
        words = graph.len(),
        kept = pruned.len(),
        "pruned level graph"
    );
    Some(pruned)
}

fn collect_ladders<I: Iterator<Item = Ladder>>(paths: I) -> Vec<Ladder> {
    let mut ladders: Vec<Ladder> = paths.collect();
    ladders.sort();
    ladders
}

/// Owns a vocabulary and the settings used to search it
pub struct LadderSolver {
    vocabulary: Vocabulary,
    config: LadderConfig,
    cache: Option<AdjacencyCache>,
}

impl LadderSolver {
    pub fn new(vocabulary: Vocabulary, config: LadderConfig) -> Self {
        let cache = config
            .memoize_adjacency
            .then(|| AdjacencyCache::with_capacity(config.cache_capacity));
        Self {
            vocabulary,
            config,
            cache,
        }
    }

    fn expander(&self) -> Expander<'_> {
        Expander {
            vocabulary: &self.vocabulary,
            strategy: self.config.strategy,
            cache: self.cache.as_ref(),
            parallel: self.config.parallel,
        }
    }

    pub fn find_shortest_path(&self, start: &str, end: &str) -> Option<Graph> {
        let graph = shortest_path_graph(&self.expander(), start, end);
        if let Some(cache) = &self.cache {
            debug!(
                memoized = cache.len(),
                hits = cache.hits(),
                "adjacency cache"
            );
        }
        graph
    }

    /// Lazily enumerates the ladders of a graph returned by
    /// [`LadderSolver::find_shortest_path`], stopping after `max_paths`.
    pub fn ladders<'g>(
        &self,
        graph: &'g Graph,
        start: &'g str,
        end: &'g str,
    ) -> Result<Take<Paths<'g>>> {
        let limit = self.config.max_paths.unwrap_or(usize::MAX);
        Ok(all_paths(graph, start, end)?.take(limit))
    }

    /// Every shortest ladder (up to `max_paths`) in sorted order
    pub fn shortest_ladders(&self, start: &str, end: &str) -> Result<Vec<Ladder>> {
        let Some(graph) = self.find_shortest_path(start, end) else {
            info!(start, end, "no ladder found");
            return Ok(Vec::new());
        };
        let ladders = collect_ladders(self.ladders(&graph, start, end)?);
        info!(
            start,
            end,
            ladders = ladders.len(),
            length = ladders.first().map_or(0, Vec::len),
            "found shortest ladders"
        );
        Ok(ladders)
    }
}
