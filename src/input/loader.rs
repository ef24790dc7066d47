//! File loading utilities
//!
//! Provides functions to load duel pairs or bare word lists from files.

use super::{InputError, PairReader, WordPair};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

/// Load every word pair from a file
///
/// # Errors
///
/// Returns `InputError::Io` if the file cannot be opened or read, and
/// `InputError::UnpairedWord` if `strict` is set and the file holds an odd
/// number of words.
///
/// # Examples
/// ```no_run
/// use word_duel::input::loader::load_pairs_from_file;
///
/// let pairs = load_pairs_from_file("duels.txt", false).unwrap();
/// println!("Loaded {} duels", pairs.len());
/// ```
pub fn load_pairs_from_file<P: AsRef<Path>>(
    path: P,
    strict: bool,
) -> Result<Vec<WordPair>, InputError> {
    let file = File::open(path)?;
    PairReader::new(BufReader::new(file))
        .strict(strict)
        .collect()
}

/// Load every whitespace-delimited word from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split text into words
///
/// # Examples
/// ```
/// use word_duel::input::loader::words_from_text;
///
/// let words = words_from_text("level\n radar  abc");
/// assert_eq!(words, vec!["level", "radar", "abc"]);
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}
