//! Reading words and word pairs
//!
//! Input is whitespace-delimited tokens; line breaks carry no meaning.

pub mod loader;
mod pairs;

pub use pairs::{PairReader, WordPair};

use std::io;
use thiserror::Error;

/// Errors raised while reading duel input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("unpaired word '{word}' at end of input (word #{position})")]
    UnpairedWord { word: String, position: usize },
}
