//! Word list entries
//!
//! A `WordEntry` pairs a hidden word with its hint text and emoji, and keeps a
//! map of letter positions so a single guess can reveal every occurrence.

use super::{Letter, LetterSet};
use rustc_hash::FxHashMap;
use std::fmt;

/// A hidden word with its hint and emoji
///
/// The word is normalized to uppercase and guaranteed to contain only A-Z.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    letters: Vec<Letter>,
    positions: FxHashMap<Letter, Vec<usize>>,
    hint: String,
    emoji: String,
}

/// Error type for invalid word entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    EmptyWord,
    InvalidCharacter(char),
    EmptyHint,
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "Word must not be empty"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word may only contain letters A-Z, found {c:?}")
            }
            Self::EmptyHint => write!(f, "Hint must not be empty"),
        }
    }
}

impl std::error::Error for EntryError {}

impl WordEntry {
    /// Create a new entry
    ///
    /// # Errors
    /// Returns `EntryError` if:
    /// - The word is empty (after trimming)
    /// - The word contains anything other than ASCII letters
    /// - The hint is empty (after trimming)
    ///
    /// # Examples
    /// ```
    /// use tebak_kata::core::WordEntry;
    ///
    /// let entry = WordEntry::new("ketupat", "Nasi dalam anyaman janur", "🍙").unwrap();
    /// assert_eq!(entry.word(), "KETUPAT");
    ///
    /// assert!(WordEntry::new("", "hint", "🍙").is_err());
    /// assert!(WordEntry::new("thr2", "hint", "💰").is_err());
    /// ```
    pub fn new(
        word: impl AsRef<str>,
        hint: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Result<Self, EntryError> {
        let word = word.as_ref().trim();
        if word.is_empty() {
            return Err(EntryError::EmptyWord);
        }

        let letters = word
            .chars()
            .map(|c| Letter::from_char(c).ok_or(EntryError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let hint: String = hint.into().trim().to_string();
        if hint.is_empty() {
            return Err(EntryError::EmptyHint);
        }

        let mut positions: FxHashMap<Letter, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            word: letters.iter().map(|l| l.as_char()).collect(),
            letters,
            positions,
            hint,
            emoji: emoji.into().trim().to_string(),
        })
    }

    /// Get the uppercase word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[inline]
    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    /// Get the word's letters in order, duplicates included
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letter slots in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.positions.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// The set of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> LetterSet {
        self.letters.iter().copied().collect()
    }

    /// Check whether every character of the word is in `guessed`
    ///
    /// Membership is per character, so one guess of a repeated letter
    /// satisfies all of its occurrences.
    #[must_use]
    pub fn is_revealed_by(&self, guessed: LetterSet) -> bool {
        self.letters.iter().all(|&letter| guessed.contains(letter))
    }

    /// Distinct letters of the word not yet in `guessed`
    ///
    /// Letters are listed in order of first appearance in the word.
    #[must_use]
    pub fn missing_letters(&self, guessed: LetterSet) -> Vec<Letter> {
        let mut seen = LetterSet::new();
        self.letters
            .iter()
            .copied()
            .filter(|&letter| !guessed.contains(letter) && seen.insert(letter))
            .collect()
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn set(text: &str) -> LetterSet {
        text.chars().map(letter).collect()
    }

    fn ketupat() -> WordEntry {
        WordEntry::new("KETUPAT", "Nasi dalam anyaman janur kelapa", "🍙").unwrap()
    }

    #[test]
    fn entry_creation_uppercase_normalized() {
        let entry = WordEntry::new("  mudik ", " Pulang kampung ", " 🚌 ").unwrap();
        assert_eq!(entry.word(), "MUDIK");
        assert_eq!(entry.hint(), "Pulang kampung");
        assert_eq!(entry.emoji(), "🚌");
        assert_eq!(entry.len(), 5);
    }

    #[test]
    fn entry_creation_invalid() {
        assert_eq!(WordEntry::new("", "h", "e"), Err(EntryError::EmptyWord));
        assert_eq!(WordEntry::new("   ", "h", "e"), Err(EntryError::EmptyWord));
        assert_eq!(
            WordEntry::new("hari raya", "h", "e"),
            Err(EntryError::InvalidCharacter(' '))
        );
        assert_eq!(
            WordEntry::new("thr5", "h", "e"),
            Err(EntryError::InvalidCharacter('5'))
        );
        assert_eq!(WordEntry::new("opor", "  ", "e"), Err(EntryError::EmptyHint));
    }

    #[test]
    fn entry_allows_empty_emoji() {
        let entry = WordEntry::new("opor", "Masakan ayam", "").unwrap();
        assert_eq!(entry.emoji(), "");
    }

    #[test]
    fn positions_of_duplicates() {
        let entry = ketupat();
        assert_eq!(entry.positions_of(letter('T')), &[2, 6]);
        assert_eq!(entry.positions_of(letter('K')), &[0]);
        assert_eq!(entry.positions_of(letter('Z')), &[] as &[usize]);
    }

    #[test]
    fn has_letter() {
        let entry = ketupat();
        assert!(entry.has_letter(letter('A')));
        assert!(!entry.has_letter(letter('Z')));
    }

    #[test]
    fn distinct_letters_collapse_repeats() {
        assert_eq!(ketupat().distinct_letters(), set("KETUPA"));
    }

    #[test]
    fn revealed_once_every_distinct_letter_is_guessed() {
        let entry = ketupat();
        assert!(!entry.is_revealed_by(LetterSet::EMPTY));
        assert!(!entry.is_revealed_by(set("KETUP")));
        assert!(entry.is_revealed_by(set("KETUPA")));
        assert!(entry.is_revealed_by(set("KETUPAZX")));
    }

    #[test]
    fn missing_letters_in_first_appearance_order() {
        let entry = ketupat();
        let missing: String = entry
            .missing_letters(set("E"))
            .into_iter()
            .map(Letter::as_char)
            .collect();
        assert_eq!(missing, "KTUPA");
        assert!(entry.missing_letters(set("KETUPA")).is_empty());
    }

    #[test]
    fn entry_display() {
        assert_eq!(format!("{}", ketupat()), "KETUPAT");
    }
}
