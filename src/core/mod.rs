//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with no UI or I/O concerns.
//! All types here are pure, testable, and cheap to copy or borrow.

mod entry;
mod keyboard;
mod letter;
mod word_list;

pub use entry::{EntryError, WordEntry};
pub use keyboard::{KeyState, key_state, keyboard, reveal, revealed_count};
pub use letter::{ALPHABET_LEN, KEYBOARD_ROWS, Letter, LetterSet};
pub use word_list::{WordList, WordListError};
