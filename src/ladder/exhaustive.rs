use tracing::trace;

use super::adjacency::is_next_word_for;
use super::Ladder;
use crate::vocab::Vocabulary;

/// Enumerates every ladder from `start` to `end` that never repeats a word,
/// regardless of its length. The search is exponential in the size of the
/// vocabulary and is only meant for small word sets.
pub fn all_ladders(start: &str, end: &str, vocabulary: &Vocabulary) -> Vec<Ladder> {
    if start == end {
        return vec![vec![start.to_string()]];
    }
    let words = vocabulary.words();
    let mut used = vec![false; words.len()];
    // The start word may itself be part of the vocabulary
    if let Ok(i) = words.binary_search_by(|w| w.as_str().cmp(start)) {
        used[i] = true;
    }

    let mut ladders = Vec::new();
    let mut path = vec![start.to_string()];
    extend_ladders(words, end, &mut used, &mut path, &mut ladders);
    trace!(start, end, ladders = ladders.len(), "exhaustive search done");
    ladders
}

fn extend_ladders(
    words: &[String],
    end: &str,
    used: &mut [bool],
    path: &mut Vec<String>,
    ladders: &mut Vec<Ladder>,
) {
    let Some(last) = path.last().cloned() else {
        return;
    };
    for (i, word) in words.iter().enumerate() {
        if used[i] || !is_next_word_for(&last, word) {
            continue;
        }
        path.push(word.clone());
        if word == end {
            ladders.push(path.clone());
        } else {
            used[i] = true;
            extend_ladders(words, end, used, path, ladders);
            used[i] = false;
        }
        path.pop();
    }
}

/// Brute-force counterpart of the level based search: keeps only the ladders
/// of minimum length, sorted.
pub fn shortest_ladders(start: &str, end: &str, vocabulary: &Vocabulary) -> Vec<Ladder> {
    let ladders = all_ladders(start, end, vocabulary);
    let Some(shortest) = ladders.iter().map(Vec::len).min() else {
        return Vec::new();
    };
    let mut ladders: Vec<Ladder> = ladders
        .into_iter()
        .filter(|ladder| ladder.len() == shortest)
        .collect();
    ladders.sort();
    ladders
}
