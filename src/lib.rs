pub mod config;
pub mod error;
pub mod ladder;
pub mod utils;
pub mod vocab;
