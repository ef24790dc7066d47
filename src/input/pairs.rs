//! Streaming word pairs out of whitespace-delimited text

use super::InputError;
use std::collections::VecDeque;
use std::io::BufRead;

/// Two words facing each other in one duel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub first: String,
    pub second: String,
}

impl WordPair {
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Iterator over word pairs read from a buffered reader
///
/// Tokens are consumed two at a time until the reader is exhausted. A pair
/// may span lines. A single leftover token at the end is dropped with a
/// warning, or reported as [`InputError::UnpairedWord`] in strict mode.
///
/// # Examples
/// ```
/// use word_duel::input::{PairReader, WordPair};
///
/// let input = "level radar\nabc\nace";
/// let pairs: Vec<WordPair> = PairReader::new(input.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(pairs, vec![WordPair::new("level", "radar"), WordPair::new("abc", "ace")]);
/// ```
pub struct PairReader<R> {
    reader: R,
    pending: VecDeque<String>,
    consumed: usize,
    strict: bool,
    exhausted: bool,
}

impl<R: BufRead> PairReader<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            consumed: 0,
            strict: false,
            exhausted: false,
        }
    }

    /// Treat a trailing unpaired word as an error instead of ignoring it
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Read lines until at least two tokens are pending or input ends
    fn fill(&mut self) -> Result<(), InputError> {
        while self.pending.len() < 2 && !self.exhausted {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                self.exhausted = true;
            } else {
                self.pending
                    .extend(line.split_whitespace().map(str::to_owned));
            }
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for PairReader<R> {
    type Item = Result<WordPair, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.fill() {
            self.exhausted = true;
            self.pending.clear();
            return Some(Err(e));
        }

        if self.pending.len() >= 2 {
            let first = self.pending.pop_front()?;
            let second = self.pending.pop_front()?;
            self.consumed += 2;
            return Some(Ok(WordPair { first, second }));
        }

        let word = self.pending.pop_front()?;
        self.consumed += 1;
        if self.strict {
            Some(Err(InputError::UnpairedWord {
                word,
                position: self.consumed,
            }))
        } else {
            tracing::warn!(%word, position = self.consumed, "ignoring unpaired word at end of input");
            None
        }
    }
}
