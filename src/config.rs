use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::utils::serialization;
use crate::vocab::NeighborStrategy;

/// Settings for loading a vocabulary and searching it for ladders. Every field
/// is optional in the JSON file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// Word list with one word per line
    pub words_path: Option<PathBuf>,
    /// Words shorter than this many characters are skipped when reading the word list
    pub min_word_length: usize,
    /// Uppercase every word read from the word list (and the start and end words)
    pub uppercase: bool,
    pub strategy: NeighborStrategy,
    /// Memoize the adjacency predicate when scanning the vocabulary
    pub memoize_adjacency: bool,
    pub cache_capacity: usize,
    /// Expand the words of a level on the rayon thread pool
    pub parallel: bool,
    /// Stop after this many ladders have been produced
    pub max_paths: Option<usize>,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            words_path: None,
            min_word_length: 1,
            uppercase: false,
            strategy: NeighborStrategy::Automaton,
            memoize_adjacency: true,
            cache_capacity: 100_000,
            parallel: true,
            max_paths: None,
        }
    }
}

impl LadderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        serialization::load_json(path)
    }
}
