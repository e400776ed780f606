use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Adjacency map from a word to the words directly reachable from it.
/// Keys and successor sets are kept sorted so that iteration order and the
/// `Display` form are canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph holding a single word with no successors
    pub fn with_word(word: &str) -> Self {
        let mut graph = Self::new();
        graph.insert_word(word);
        graph
    }

    /// Adds the word as a key if it is missing and returns its successor set
    pub fn insert_word(&mut self, word: &str) -> &mut BTreeSet<String> {
        self.edges.entry(word.to_string()).or_default()
    }

    /// Replaces the successor set of `word`
    pub fn set_successors(&mut self, word: &str, successors: BTreeSet<String>) {
        self.edges.insert(word.to_string(), successors);
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.insert_word(from).insert(to.to_string());
    }

    pub fn successors(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.edges.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.edges.contains_key(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, BTreeSet<String>> {
        self.edges.iter()
    }

    /// Number of words (keys) in the graph
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Union-merges `other` into this graph. Successor sets of shared keys are
    /// unioned, never overwritten.
    pub fn merge(&mut self, other: &Graph) {
        for (word, successors) in other.iter() {
            self.insert_word(word).extend(successors.iter().cloned());
        }
    }
}

impl FromIterator<(String, BTreeSet<String>)> for Graph {
    fn from_iter<T: IntoIterator<Item = (String, BTreeSet<String>)>>(iter: T) -> Self {
        let mut graph = Self::new();
        for (word, successors) in iter {
            graph.insert_word(&word).extend(successors);
        }
        graph
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = (&'a String, &'a BTreeSet<String>);
    type IntoIter = btree_map::Iter<'a, String, BTreeSet<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (word, successors)) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {{", word)?;
            for (j, next) in successors.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", next)?;
            }
            write!(f, "}}")?;
        }
        write!(f, "}}")
    }
}

/// Merges any number of adjacency maps into one
pub fn merge_graphs<'a, I>(graphs: I) -> Graph
where
    I: IntoIterator<Item = &'a Graph>,
{
    let mut merged = Graph::new();
    for graph in graphs {
        merged.merge(graph);
    }
    merged
}

#[cfg(test)]
pub(crate) fn graph_from(entries: &[(&str, &[&str])]) -> Graph {
    entries
        .iter()
        .map(|(word, successors)| {
            (
                word.to_string(),
                successors.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_empty() {
        let merged = merge_graphs(Vec::<&Graph>::new());
        assert!(merged.is_empty());
        assert_eq!(merged.to_string(), "{}");
    }

    #[test]
    fn test_merge_single() {
        let g = graph_from(&[("a", &["b"]), ("b", &[])]);
        assert_eq!(merge_graphs([&g]), g);
    }

    #[test]
    fn test_merge_unions_successors() {
        let g1 = graph_from(&[("a", &["b"]), ("c", &[])]);
        let g2 = graph_from(&[("a", &["c"]), ("d", &["a"])]);

        let merged = merge_graphs([&g1, &g2]);
        assert_eq!(merged.to_string(), "{a: {b, c}, c: {}, d: {a}}");
        assert_eq!(merged.edge_count(), 3);
    }

    #[test]
    fn test_merge_commutative_and_associative() {
        let g1 = graph_from(&[("hit", &["hot"])]);
        let g2 = graph_from(&[("hot", &["dot"]), ("hit", &["hat"])]);
        let g3 = graph_from(&[("hot", &["lot"]), ("dot", &[])]);

        let forward = merge_graphs([&g1, &g2, &g3]);
        let backward = merge_graphs([&g3, &g2, &g1]);
        let nested = merge_graphs([&merge_graphs([&g1, &g2]), &g3]);
        let nested_right = merge_graphs([&g1, &merge_graphs([&g2, &g3])]);

        assert_eq!(forward, backward);
        assert_eq!(forward, nested);
        assert_eq!(forward, nested_right);
    }

    #[test]
    fn test_display_is_sorted() {
        let mut g = Graph::new();
        g.add_edge("hot", "lot");
        g.add_edge("hot", "dot");
        g.add_edge("hit", "hot");
        g.insert_word("cog");
        assert_eq!(g.to_string(), "{cog: {}, hit: {hot}, hot: {dot, lot}}");
    }

    #[test]
    fn test_json_shape() {
        let g = graph_from(&[("a", &["b"]), ("b", &[])]);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"a":["b"],"b":[]}"#);

        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
