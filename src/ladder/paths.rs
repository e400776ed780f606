use std::collections::{btree_set, BTreeSet};

use super::graph::Graph;
use crate::error::{LadderError, Result};

/// Lazy depth-first enumeration of every path between two words of a graph.
///
/// Paths are produced one at a time, so a caller can stop after the first few
/// without the rest being computed. Cloning the iterator restarts from the same
/// point. The graph must be acyclic for the enumeration to be finite, which is
/// always the case for pruned ladder graphs.
#[derive(Debug, Clone)]
pub struct Paths<'a> {
    graph: &'a Graph,
    end: &'a str,
    /// Words from the start to the current position
    path: Vec<&'a str>,
    /// Remaining successors to try for each word on `path`
    stack: Vec<btree_set::Iter<'a, String>>,
    /// The current path ends at `end` and has not been yielded yet
    emit: bool,
}

/// Enumerates all paths from `start` to `end`. Fails with
/// [`LadderError::UnknownWord`] if `start`, or any word reachable from it, is
/// not a key of `graph`.
pub fn all_paths<'a>(graph: &'a Graph, start: &'a str, end: &'a str) -> Result<Paths<'a>> {
    let successors = lookup(graph, start)?;
    check_reachable(graph, successors)?;
    Ok(Paths {
        graph,
        end,
        path: vec![start],
        stack: vec![successors.iter()],
        emit: start == end,
    })
}

fn lookup<'a>(graph: &'a Graph, word: &str) -> Result<&'a BTreeSet<String>> {
    graph
        .successors(word)
        .ok_or_else(|| LadderError::UnknownWord(word.to_string()))
}

/// Every word below `successors` must have an entry of its own, so the
/// iterator never has to look up a missing word.
fn check_reachable(graph: &Graph, successors: &BTreeSet<String>) -> Result<()> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut pending: Vec<&str> = successors.iter().map(String::as_str).collect();
    while let Some(word) = pending.pop() {
        if seen.insert(word) {
            pending.extend(lookup(graph, word)?.iter().map(String::as_str));
        }
    }
    Ok(())
}

impl<'a> Iterator for Paths<'a> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if std::mem::take(&mut self.emit) {
                return Some(self.path.iter().map(|w| w.to_string()).collect());
            }

            let successor = self.stack.last_mut()?.next();
            match successor {
                Some(word) => {
                    // Checked by `all_paths`, a missing entry is skipped
                    let Some(successors) = self.graph.successors(word) else {
                        continue;
                    };
                    self.path.push(word.as_str());
                    self.stack.push(successors.iter());
                    self.emit = word.as_str() == self.end;
                }
                None => {
                    // Every successor of the last word has been explored
                    self.stack.pop();
                    self.path.pop();
                }
            }
        }
    }
}
