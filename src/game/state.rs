//! Game phase and state value

use crate::core::LetterSet;
use std::fmt;

/// Which screen of the game is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Title screen, waiting for the player to start
    #[default]
    Start,
    /// Guessing the current word
    Playing,
    /// Current word fully revealed
    Won,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Playing => write!(f, "Playing"),
            Self::Won => write!(f, "Won"),
        }
    }
}

/// Complete mutable state of one playthrough
///
/// Invariants maintained by the transition functions:
/// - `guessed` is only cleared when entering `Playing`
/// - `phase == Won` implies every letter of the current word is guessed
/// - `total_time` is set at most once, when the last word is won
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameState {
    pub(super) phase: Phase,
    pub(super) current_index: usize,
    pub(super) guessed: LetterSet,
    pub(super) started_at: Option<u64>,
    pub(super) total_time: Option<u64>,
}

impl GameState {
    /// Fresh state on the title screen
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Start,
            current_index: 0,
            guessed: LetterSet::EMPTY,
            started_at: None,
            total_time: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the current word in the list
    #[inline]
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Letters guessed for the current word
    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    /// Millisecond timestamp of the last `start()`
    #[inline]
    #[must_use]
    pub const fn started_at(&self) -> Option<u64> {
        self.started_at
    }

    /// Whole seconds taken to finish the list, once the last word is won
    #[inline]
    #[must_use]
    pub const fn total_time(&self) -> Option<u64> {
        self.total_time
    }

    #[inline]
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing)
    }
}
