//! Keyboard letters and guessed-letter sets
//!
//! A `Letter` is one of the 26 uppercase Latin letters on the virtual keyboard.
//! A `LetterSet` stores a set of letters as a 26-bit mask.

use std::fmt;

/// Number of letters on the virtual keyboard
pub const ALPHABET_LEN: usize = 26;

/// Virtual keyboard rows, top to bottom
///
/// Together the rows cover each of the 26 letters exactly once.
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// An uppercase Latin letter (A-Z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, case-insensitively
    ///
    /// Returns `None` for anything outside `a-z` / `A-Z`.
    ///
    /// # Examples
    /// ```
    /// use tebak_kata::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('k').unwrap().as_char(), 'K');
    /// assert!(Letter::from_char('5').is_none());
    /// assert!(Letter::from_char('é').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Parse a raw input value into a letter
    ///
    /// Accepts exactly one ASCII letter. Empty strings, multi-character key
    /// names such as `"Enter"` or `"Shift"`, digits and symbols are rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Create a letter from its alphabet index (0 = A, 25 = Z)
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self(b'A' + index as u8))
        } else {
            None
        }
    }

    /// Get the letter as an uppercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Get the alphabet index (0 = A, 25 = Z)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Iterate over all 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A set of letters stored as a bit mask
///
/// Bit `i` is set when the letter with index `i` is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Insert a letter
    ///
    /// Returns `true` if the letter was not already present.
    #[inline]
    pub const fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1u32 << letter.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Check whether a letter is present
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1u32 << letter.index()) != 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn from_char_normalizes_case() {
        assert_eq!(letter('a'), letter('A'));
        assert_eq!(letter('z').as_char(), 'Z');
    }

    #[test]
    fn from_char_rejects_non_letters() {
        for c in ['5', '!', ' ', '-', 'ß', 'é', '\n'] {
            assert!(Letter::from_char(c).is_none(), "{c:?} should be rejected");
        }
    }

    #[test]
    fn parse_accepts_single_letters_only() {
        assert_eq!(Letter::parse("t"), Some(letter('T')));
        assert_eq!(Letter::parse("T"), Some(letter('T')));
        assert_eq!(Letter::parse(""), None);
        assert_eq!(Letter::parse("Enter"), None);
        assert_eq!(Letter::parse("ab"), None);
        assert_eq!(Letter::parse("5"), None);
    }

    #[test]
    fn index_round_trips_through_from_index() {
        for l in Letter::all() {
            assert_eq!(Letter::from_index(l.index()), Some(l));
        }
        assert_eq!(Letter::from_index(26), None);
    }

    #[test]
    fn all_yields_alphabet_in_order() {
        let text: String = Letter::all().map(Letter::as_char).collect();
        assert_eq!(text, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn keyboard_rows_cover_alphabet_once() {
        let mut seen: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|row| row.chars()).collect();
        assert_eq!(seen.len(), ALPHABET_LEN);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), ALPHABET_LEN);
        assert!(seen.iter().all(|&c| Letter::from_char(c).is_some()));
    }

    #[test]
    fn set_insert_is_idempotent() {
        let mut set = LetterSet::new();
        assert!(set.insert(letter('T')));
        assert!(!set.insert(letter('T')));
        assert_eq!(set.len(), 1);
        assert!(set.contains(letter('T')));
        assert!(!set.contains(letter('K')));
    }

    #[test]
    fn set_iterates_alphabetically() {
        let set: LetterSet = "ZKA".chars().map(letter).collect();
        let text: String = set.iter().map(Letter::as_char).collect();
        assert_eq!(text, "AKZ");
    }

    #[test]
    fn empty_set() {
        assert!(LetterSet::EMPTY.is_empty());
        assert_eq!(LetterSet::default(), LetterSet::EMPTY);
        assert_eq!(LetterSet::new().iter().count(), 0);
    }
}
