use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fst::{IntoStreamer, Set, Streamer};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LadderConfig;
use crate::error::{LadderError, Result};
use crate::ladder::adjacency::{is_next_word_for, AdjacencyCache};

pub mod neighbor_search;

use self::neighbor_search::OneSubstitution;

/// How neighbors of a word are looked up in the vocabulary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NeighborStrategy {
    /// Search the FST with a one-substitution automaton
    #[default]
    Automaton,
    /// Test every word in the vocabulary against the adjacency predicate
    Scan,
}

/// Immutable set of legal words, stored as an FST
pub struct Vocabulary {
    words: Set<Vec<u8>>,
    /// Decoded words for scanning, filled on first use
    list: OnceCell<Vec<String>>,
}

impl Vocabulary {
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // The FST builder needs unique keys in sorted order
        let sorted: BTreeSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect();
        let words = Set::from_iter(sorted)?;
        Ok(Self {
            words,
            list: OnceCell::new(),
        })
    }

    /// Reads a word list with one word per line
    pub fn from_file<P: AsRef<Path>>(path: P, config: &LadderConfig) -> Result<Self> {
        let path = path.as_ref();
        let io_error = |source| LadderError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        let reader = BufReader::new(file);
        let mut words = BTreeSet::new();
        for line in reader.lines() {
            let line = line.map_err(io_error)?;
            let word = line.trim();
            if word.is_empty() || word.chars().count() < config.min_word_length {
                continue;
            }
            if config.uppercase {
                words.insert(word.to_uppercase());
            } else {
                words.insert(word.to_string());
            }
        }
        debug!(path = %path.display(), words = words.len(), "read word list");
        Self::from_words(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// All words in sorted order
    pub fn words(&self) -> &[String] {
        self.list.get_or_init(|| {
            let mut words = Vec::with_capacity(self.len());
            let mut stream = self.words.stream();
            while let Some(bytes) = stream.next() {
                if let Ok(word) = std::str::from_utf8(bytes) {
                    words.push(word.to_string());
                }
            }
            words
        })
    }

    /// Finds every word in the vocabulary that is a single substitution away
    /// from `word`. The cache is only consulted by the scan strategy, and only
    /// when `word` is itself in the vocabulary.
    pub fn neighbors(
        &self,
        word: &str,
        strategy: NeighborStrategy,
        cache: Option<&AdjacencyCache>,
    ) -> Vec<String> {
        match strategy {
            NeighborStrategy::Automaton => {
                let automaton = OneSubstitution::new(word);
                let mut stream = self.words.search(automaton).into_stream();
                let mut neighbors = Vec::new();
                while let Some(bytes) = stream.next() {
                    if let Ok(next) = std::str::from_utf8(bytes) {
                        neighbors.push(next.to_string());
                    }
                }
                neighbors
            }
            NeighborStrategy::Scan => {
                let words = self.words();
                let position =
                    cache.and_then(|_| words.binary_search_by(|w| w.as_str().cmp(word)).ok());
                words
                    .iter()
                    .enumerate()
                    .filter(|&(i, candidate)| match (cache, position) {
                        (Some(cache), Some(at)) => {
                            cache.is_next_word_for((at, word), (i, candidate))
                        }
                        _ => is_next_word_for(word, candidate),
                    })
                    .map(|(_, candidate)| candidate.clone())
                    .collect()
            }
        }
    }
}
