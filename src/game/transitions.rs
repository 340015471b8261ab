//! Pure state transitions
//!
//! Each function takes the current state by value and returns the next one.
//! Rejected inputs return the state unchanged; nothing here can fail.

use super::random::RandomSource;
use super::state::{GameState, Phase};
use crate::core::{Letter, LetterSet, WordList};

/// What a guess did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Dropped: wrong phase, not a letter, or already guessed
    Ignored,
    /// Letter recorded; `hit` tells whether it is in the word
    Recorded { letter: Letter, hit: bool },
    /// Letter recorded and the word is now fully revealed
    ///
    /// This is the celebration trigger. `total_time` is set only when the
    /// won word is the last of the list.
    Won {
        letter: Letter,
        total_time: Option<u64>,
    },
}

impl GuessOutcome {
    /// Whether the guess changed the state
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Whether this guess completed the word
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// Begin a new playthrough at the first word
///
/// Callable from any phase; always a full reset.
#[must_use]
pub const fn start(now_millis: u64) -> GameState {
    GameState {
        phase: Phase::Playing,
        current_index: 0,
        guessed: LetterSet::EMPTY,
        started_at: Some(now_millis),
        total_time: None,
    }
}

/// Record a guessed letter and re-evaluate the win condition
#[must_use]
pub fn guess(
    state: GameState,
    words: &WordList,
    letter: Letter,
    now_millis: u64,
) -> (GameState, GuessOutcome) {
    if state.phase != Phase::Playing {
        return (state, GuessOutcome::Ignored);
    }

    let mut next = state;
    if !next.guessed.insert(letter) {
        return (state, GuessOutcome::Ignored);
    }

    let entry = words.entry(next.current_index);
    if !entry.is_revealed_by(next.guessed) {
        let hit = entry.has_letter(letter);
        return (next, GuessOutcome::Recorded { letter, hit });
    }

    next.phase = Phase::Won;
    if words.is_last(next.current_index) && next.total_time.is_none() {
        let started = next.started_at.unwrap_or(now_millis);
        next.total_time = Some(now_millis.saturating_sub(started) / 1000);
    }

    (
        next,
        GuessOutcome::Won {
            letter,
            total_time: next.total_time,
        },
    )
}

/// Reveal one random missing letter of the current word
///
/// The chosen letter goes through [`guess`], so the same acceptance rules
/// apply. A fully revealed word is left untouched and `rng` is not consulted.
#[must_use]
pub fn hint<R: RandomSource + ?Sized>(
    state: GameState,
    words: &WordList,
    rng: &mut R,
    now_millis: u64,
) -> (GameState, GuessOutcome) {
    let missing = words.entry(state.current_index).missing_letters(state.guessed);
    if missing.is_empty() {
        return (state, GuessOutcome::Ignored);
    }

    let pick = rng.pick(missing.len()).min(missing.len() - 1);
    guess(state, words, missing[pick], now_millis)
}

/// Move on from a won word
///
/// Goes to the next word with a cleared guessed set, or back to the title
/// screen after the last word. Ignored outside `Won`.
#[must_use]
pub fn advance(state: GameState, words: &WordList) -> GameState {
    if state.phase != Phase::Won {
        return state;
    }

    if words.is_last(state.current_index) {
        return GameState {
            phase: Phase::Start,
            ..state
        };
    }

    GameState {
        phase: Phase::Playing,
        current_index: state.current_index + 1,
        guessed: LetterSet::EMPTY,
        ..state
    }
}
