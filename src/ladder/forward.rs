use std::collections::BTreeSet;

use tracing::trace;

use super::graph::Graph;

/// Walks the merged level graph back from `end`, keeping only the edges that
/// lead into the current frontier. The result holds exactly the edges that lie
/// on a shortest path ending at `end`.
pub fn find_path_forward(graph: &Graph, end: &str) -> Graph {
    let mut pruned = Graph::new();
    pruned.set_successors(end, graph.successors(end).cloned().unwrap_or_default());

    let mut frontier = BTreeSet::from([end.to_string()]);
    while !frontier.is_empty() {
        let used: Graph = graph
            .iter()
            .filter_map(|(word, successors)| {
                let kept: BTreeSet<String> = successors.intersection(&frontier).cloned().collect();
                (!kept.is_empty()).then(|| (word.clone(), kept))
            })
            .collect();
        trace!(frontier = frontier.len(), predecessors = used.len(), "pruning step");

        frontier = used.words().map(str::to_string).collect();
        pruned.merge(&used);
    }
    pruned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::backward::find_path_backward;
    use crate::ladder::graph::{graph_from, merge_graphs};
    use crate::vocab::Vocabulary;

    fn merged_levels(start: &str, end: &str, words: &[&str]) -> Graph {
        let vocab = Vocabulary::from_words(words).unwrap();
        let levels = find_path_backward(start, end, &vocab).unwrap();
        merge_graphs(&levels)
    }

    #[test]
    fn test_single_step() {
        let graph = merged_levels("a", "b", &["a", "b"]);
        let pruned = find_path_forward(&graph, "b");
        assert_eq!(pruned.to_string(), "{a: {b}, b: {}}");
    }

    #[test]
    fn test_keeps_every_shortest_edge() {
        let graph = merged_levels("hit", "cog", &["hot", "dot", "dog", "lot", "log", "cog"]);
        let pruned = find_path_forward(&graph, "cog");
        assert_eq!(
            pruned.to_string(),
            "{cog: {}, dog: {cog}, dot: {dog}, hit: {hot}, hot: {dot, lot}, log: {cog}, lot: {log}}"
        );
    }

    #[test]
    fn test_drops_dead_branches() {
        // "hip" and "hop" sit in the level graph but never lead to "cog"
        let graph = merged_levels(
            "hit",
            "cog",
            &["hot", "dot", "dog", "lot", "log", "cog", "hip", "hop"],
        );
        assert!(graph.contains("hip"));
        assert!(graph.contains("hop"));

        let pruned = find_path_forward(&graph, "cog");
        assert!(!pruned.contains("hip"));
        assert!(!pruned.contains("hop"));
        assert_eq!(pruned.successors("hot").unwrap().len(), 2);
    }

    #[test]
    fn test_every_node_reaches_end() {
        let graph = merged_levels(
            "hit",
            "cog",
            &["hot", "dot", "dog", "lot", "log", "cog", "lit", "hat", "cat", "cot"],
        );
        let pruned = find_path_forward(&graph, "cog");
        for (word, successors) in &pruned {
            if word == "cog" {
                assert!(successors.is_empty());
            } else {
                assert!(!successors.is_empty(), "{word} has no way forward");
            }
        }
    }

    #[test]
    fn test_end_missing_from_graph() {
        let graph = graph_from(&[("a", &["b"])]);
        let pruned = find_path_forward(&graph, "c");
        assert_eq!(pruned.to_string(), "{c: {}}");
    }
}
