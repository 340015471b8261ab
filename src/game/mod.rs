//! The guessing-game state machine
//!
//! `GameState` is a plain `Copy` value and every transition in [`transitions`]
//! is a pure function of state, word list and injected inputs. `GameController`
//! owns one state together with the random source and clock it needs.

mod clock;
mod controller;
mod random;
mod state;
pub mod transitions;
mod view;

pub use clock::{Clock, SystemClock};
pub use controller::GameController;
pub use random::{RandomSource, RngSource};
pub use state::{GameState, Phase};
pub use transitions::GuessOutcome;
pub use view::GameView;
