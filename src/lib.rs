//! Tebak Kata
//!
//! A Lebaran word-guessing game: reveal each hidden word letter by letter,
//! guided by a hint and an emoji, through a fixed list of words.
//!
//! # Quick Start
//!
//! ```rust
//! use tebak_kata::core::{WordEntry, WordList};
//! use tebak_kata::game::{GameController, Phase};
//!
//! let words = WordList::new(vec![WordEntry::new("mudik", "Pulang kampung", "🚌").unwrap()]).unwrap();
//! let mut game = GameController::new(words);
//!
//! game.start();
//! for key in ["m", "u", "d", "i", "k"] {
//!     game.submit_guess(key);
//! }
//! assert_eq!(game.phase(), Phase::Won);
//! assert!(game.view().is_last_word);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
