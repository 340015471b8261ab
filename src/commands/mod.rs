//! Command implementations

pub mod autoplay;
pub mod simple;

pub use autoplay::{AutoplayResult, AutoplayStep, run_autoplay};
pub use simple::{run_simple, run_simple_session};
