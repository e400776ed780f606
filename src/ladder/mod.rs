// Shortest word ladders: levels are built breadth-first from the start word,
// pruned back from the end word, then every remaining path is enumerated.
pub mod adjacency;
pub mod backward;
pub mod exhaustive;
pub mod forward;
pub mod graph;
pub mod paths;
pub mod solver;

/// Sequence of words from a start word to an end word where each consecutive
/// pair differs in a single character
pub type Ladder = Vec<String>;

pub use self::solver::LadderSolver;
