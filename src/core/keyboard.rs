//! Derived display state for the keyboard and the word slots
//!
//! Everything here is a pure projection of the guessed set and the current
//! word. Nothing is stored, so the projections can never drift from the state.

use super::{KEYBOARD_ROWS, Letter, LetterSet, WordEntry};

/// Display state of a single keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Not guessed yet; the key is still interactive
    Unguessed,
    /// Guessed and present in the word; the key is disabled
    Correct,
    /// Guessed and absent from the word; the key is disabled
    Incorrect,
}

impl KeyState {
    /// Whether the key can still be pressed
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Unguessed)
    }
}

/// Derive the state of one key
#[must_use]
pub fn key_state(letter: Letter, guessed: LetterSet, entry: &WordEntry) -> KeyState {
    if !guessed.contains(letter) {
        KeyState::Unguessed
    } else if entry.has_letter(letter) {
        KeyState::Correct
    } else {
        KeyState::Incorrect
    }
}

/// Derive the state of every key, laid out in keyboard rows
///
/// # Examples
/// ```
/// use tebak_kata::core::{keyboard, KeyState, Letter, LetterSet, WordEntry};
///
/// let entry = WordEntry::new("KETUPAT", "Nasi dalam anyaman janur", "🍙").unwrap();
/// let guessed: LetterSet = "ZT".chars().filter_map(Letter::from_char).collect();
/// let rows = keyboard(guessed, &entry);
///
/// let z = rows[2][0];
/// assert_eq!(z.0.as_char(), 'Z');
/// assert_eq!(z.1, KeyState::Incorrect);
/// ```
#[must_use]
pub fn keyboard(guessed: LetterSet, entry: &WordEntry) -> Vec<Vec<(Letter, KeyState)>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .filter_map(Letter::from_char)
                .map(|letter| (letter, key_state(letter, guessed, entry)))
                .collect()
        })
        .collect()
}

/// Per-character reveal state of the word
///
/// Each slot holds the letter once guessed, or `None` while hidden.
#[must_use]
pub fn reveal(entry: &WordEntry, guessed: LetterSet) -> Vec<Option<char>> {
    entry
        .letters()
        .iter()
        .map(|&letter| guessed.contains(letter).then_some(letter.as_char()))
        .collect()
}

/// Number of revealed slots (repeated letters count once per slot)
#[must_use]
pub fn revealed_count(entry: &WordEntry, guessed: LetterSet) -> usize {
    entry
        .letters()
        .iter()
        .filter(|&&letter| guessed.contains(letter))
        .count()
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
    fn key_states_for_hits_and_misses() {
        let entry = ketupat();
        let guessed = set("ZT");

        assert_eq!(key_state(letter('Z'), guessed, &entry), KeyState::Incorrect);
        assert_eq!(key_state(letter('T'), guessed, &entry), KeyState::Correct);
        for other in Letter::all().filter(|&l| l != letter('Z') && l != letter('T')) {
            assert_eq!(key_state(other, guessed, &entry), KeyState::Unguessed);
        }
    }

    #[test]
    fn only_unguessed_keys_are_enabled() {
        assert!(KeyState::Unguessed.is_enabled());
        assert!(!KeyState::Correct.is_enabled());
        assert!(!KeyState::Incorrect.is_enabled());
    }

    #[test]
    fn keyboard_follows_row_layout() {
        let rows = keyboard(LetterSet::EMPTY, &ketupat());
        let lens: Vec<usize> = rows.iter().map(Vec::len).collect();
        assert_eq!(lens, [10, 9, 7]);
        assert_eq!(rows[0][0].0, letter('Q'));
        assert!(
            rows.iter()
                .flatten()
                .all(|&(_, state)| state == KeyState::Unguessed)
        );
    }

    #[test]
    fn keyboard_matches_key_state() {
        let entry = ketupat();
        let guessed = set("KAZQ");
        for &(l, state) in keyboard(guessed, &entry).iter().flatten() {
            assert_eq!(state, key_state(l, guessed, &entry));
        }
    }

    #[test]
    fn reveal_shows_every_occurrence() {
        let entry = ketupat();
        assert_eq!(
            reveal(&entry, set("T")),
            [None, None, Some('T'), None, None, None, Some('T')]
        );
        assert_eq!(revealed_count(&entry, set("T")), 2);
    }

    #[test]
    fn reveal_ignores_wrong_guesses() {
        let entry = ketupat();
        assert!(reveal(&entry, set("ZXQ")).iter().all(Option::is_none));
        assert_eq!(revealed_count(&entry, set("ZXQ")), 0);
    }

    #[test]
    fn reveal_complete_word() {
        let entry = ketupat();
        let slots: String = reveal(&entry, set("KETUPA")).into_iter().flatten().collect();
        assert_eq!(slots, "KETUPAT");
        assert_eq!(revealed_count(&entry, set("KETUPA")), entry.len());
    }
}
