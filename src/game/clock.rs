//! Injectable wall clock for playthrough timing

use std::time::Instant;

/// A millisecond clock
///
/// Only differences between readings matter, so the epoch is arbitrary.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Monotonic clock counting from its creation
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}
