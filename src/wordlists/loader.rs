//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.
//!
//! Files hold one `WORD|hint|emoji` entry per line. Blank lines and lines
//! starting with `#` are skipped; the emoji field is optional.

use crate::core::{WordEntry, WordList, WordListError};
use std::fs;
use std::path::Path;

/// Load a word list from a file
///
/// # Errors
///
/// Returns `WordListError` if the file cannot be read, a line is malformed or
/// holds an invalid entry, or no entries remain.
///
/// # Examples
/// ```no_run
/// use tebak_kata::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let content = fs::read_to_string(path)?;
    parse_word_list(&content)
}

/// Parse word list text
///
/// # Errors
///
/// Returns `WordListError` for the first malformed or invalid line, or if the
/// text holds no entries. Line numbers are 1-based.
pub fn parse_word_list(content: &str) -> Result<WordList, WordListError> {
    let mut entries = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let line_no = i + 1;
        let mut fields = trimmed.splitn(3, '|');
        let (Some(word), Some(hint)) = (fields.next(), fields.next()) else {
            return Err(WordListError::MalformedLine(line_no));
        };
        let emoji = fields.next().unwrap_or_default();

        let entry = WordEntry::new(word, hint, emoji).map_err(|source| {
            WordListError::InvalidEntry {
                line: line_no,
                source,
            }
        })?;
        entries.push(entry);
    }

    WordList::new(entries)
}

/// Convert embedded (word, hint, emoji) triples to a word list
///
/// Invalid triples are skipped.
///
/// # Errors
///
/// Returns `WordListError::Empty` if no valid triple remains.
///
/// # Examples
/// ```
/// use tebak_kata::wordlists::loader::entries_from_slice;
/// use tebak_kata::wordlists::WORDS;
///
/// let words = entries_from_slice(WORDS).unwrap();
/// assert_eq!(words.len(), WORDS.len());
/// ```
pub fn entries_from_slice(slice: &[(&str, &str, &str)]) -> Result<WordList, WordListError> {
    WordList::new(
        slice
            .iter()
            .filter_map(|&(word, hint, emoji)| WordEntry::new(word, hint, emoji).ok())
            .collect(),
    )
}
