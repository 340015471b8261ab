//! Render-ready snapshot of the game

use super::state::{GameState, Phase};
use crate::core::{KeyState, Letter, WordList, keyboard, reveal, revealed_count};
use crate::output::formatters::format_total_time;

/// Everything a presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView<'a> {
    pub phase: Phase,
    /// 1-based position of the current word
    pub word_number: usize,
    pub word_count: usize,
    /// Revealed character or `None` per slot
    pub slots: Vec<Option<char>>,
    /// Number of slots already revealed
    pub revealed: usize,
    pub hint: &'a str,
    pub emoji: &'a str,
    /// Key states in keyboard rows
    pub keys: Vec<Vec<(Letter, KeyState)>>,
    /// Selects "restart" instead of "next word" once won
    pub is_last_word: bool,
    /// Formatted total time, once the last word is won
    pub total_time: Option<String>,
}

impl<'a> GameView<'a> {
    #[must_use]
    pub fn new(state: &GameState, words: &'a WordList) -> Self {
        let index = state.current_index();
        let entry = words.entry(index);

        Self {
            phase: state.phase(),
            word_number: index + 1,
            word_count: words.len(),
            slots: reveal(entry, state.guessed()),
            revealed: revealed_count(entry, state.guessed()),
            hint: entry.hint(),
            emoji: entry.emoji(),
            keys: keyboard(state.guessed(), entry),
            is_last_word: words.is_last(index),
            total_time: state.total_time().map(format_total_time),
        }
    }

    /// Key state of a single letter
    #[must_use]
    pub fn key(&self, letter: Letter) -> KeyState {
        self.keys
            .iter()
            .flatten()
            .find(|(l, _)| *l == letter)
            .map_or(KeyState::Unguessed, |&(_, state)| state)
    }

    /// Word slots as display text, hidden slots drawn as `_`
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.unwrap_or('_').to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
