//! Game controller owning the state, word list, randomness and clock

use super::clock::{Clock, SystemClock};
use super::random::{RandomSource, RngSource};
use super::state::{GameState, Phase};
use super::transitions::{self, GuessOutcome};
use super::view::GameView;
use crate::core::{KeyState, Letter, WordEntry, WordList, key_state};

/// Drives one game through its phases
///
/// All input funnels through [`GameController::submit_guess`] (raw key values)
/// or [`GameController::guess`] (already parsed letters); both apply the same
/// acceptance rules.
pub struct GameController<R: RandomSource = RngSource, C: Clock = SystemClock> {
    words: WordList,
    state: GameState,
    rng: R,
    clock: C,
}

impl GameController {
    /// Controller with an entropy-seeded random source and the system clock
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self::with_sources(words, RngSource::from_entropy(), SystemClock::new())
    }
}

impl<R: RandomSource, C: Clock> GameController<R, C> {
    /// Controller with explicit random source and clock
    #[must_use]
    pub fn with_sources(words: WordList, rng: R, clock: C) -> Self {
        Self {
            words,
            state: GameState::new(),
            rng,
            clock,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The word currently shown
    #[must_use]
    pub fn current_entry(&self) -> &WordEntry {
        self.words.entry(self.state.current_index())
    }

    #[must_use]
    pub fn is_last_word(&self) -> bool {
        self.words.is_last(self.state.current_index())
    }

    /// Start (or restart) from the first word
    pub fn start(&mut self) {
        self.state = transitions::start(self.clock.now_millis());
    }

    /// Guess a parsed letter
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        let (state, outcome) =
            transitions::guess(self.state, &self.words, letter, self.clock.now_millis());
        self.state = state;
        outcome
    }

    /// Guess from a raw input value such as a key name or a typed character
    ///
    /// Anything other than a single Latin letter is ignored.
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        Letter::parse(raw).map_or(GuessOutcome::Ignored, |letter| self.guess(letter))
    }

    /// Guess from a single typed character
    pub fn submit_char(&mut self, c: char) -> GuessOutcome {
        Letter::from_char(c).map_or(GuessOutcome::Ignored, |letter| self.guess(letter))
    }

    /// Reveal a random missing letter
    pub fn hint(&mut self) -> GuessOutcome {
        let (state, outcome) = transitions::hint(
            self.state,
            &self.words,
            &mut self.rng,
            self.clock.now_millis(),
        );
        self.state = state;
        outcome
    }

    /// Leave the won screen; returns the new phase
    pub fn advance(&mut self) -> Phase {
        self.state = transitions::advance(self.state, &self.words);
        self.state.phase()
    }

    /// Key state of one letter for the current word
    #[must_use]
    pub fn key_state(&self, letter: Letter) -> KeyState {
        key_state(letter, self.state.guessed(), self.current_entry())
    }

    /// Whole seconds since `start()`, frozen once the list is finished
    #[must_use]
    pub fn elapsed_secs(&self) -> Option<u64> {
        self.state.total_time().or_else(|| {
            self.state
                .started_at()
                .map(|started| self.clock.now_millis().saturating_sub(started) / 1000)
        })
    }

    /// Snapshot for rendering
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView::new(&self.state, &self.words)
    }
}
