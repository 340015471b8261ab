//! The ordered list of words to play through

use super::{EntryError, WordEntry};
use std::fmt;
use std::io;

/// A fixed, ordered, non-empty sequence of word entries
///
/// Order defines the play sequence. The list is never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

/// Error type for word lists that cannot be played
#[derive(Debug)]
pub enum WordListError {
    Empty,
    InvalidEntry { line: usize, source: EntryError },
    MalformedLine(usize),
    Io(io::Error),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no words"),
            Self::InvalidEntry { line, source } => write!(f, "Line {line}: {source}"),
            Self::MalformedLine(line) => {
                write!(f, "Line {line}: expected WORD|hint|emoji")
            }
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEntry { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::Empty | Self::MalformedLine(_) => None,
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl WordList {
    /// Create a word list from entries
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `entries` is empty.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, WordListError> {
        if entries.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { entries })
    }

    /// Get the entry at `index`
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    /// Get the entry at `index`, clamped to the last entry
    ///
    /// The list is non-empty, so this always returns an entry.
    #[must_use]
    pub fn entry(&self, index: usize) -> &WordEntry {
        &self.entries[index.min(self.entries.len() - 1)]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: construction rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the final word
    #[inline]
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.entries.len() - 1
    }

    /// Whether `index` is the final word of the list
    ///
    /// This single rule decides both when the total time is captured and
    /// whether the player is offered "next word" or "restart".
    #[inline]
    #[must_use]
    pub fn is_last(&self, index: usize) -> bool {
        index >= self.last_index()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
