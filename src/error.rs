use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LadderError>;

#[derive(Debug, Error)]
pub enum LadderError {
    /// A path was requested from a word that is not a key of the graph
    #[error("Word not present in graph: {0}")]
    UnknownWord(String),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to build vocabulary: {0}")]
    Vocabulary(#[from] fst::Error),
    #[error("Failed to set up logging: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}
