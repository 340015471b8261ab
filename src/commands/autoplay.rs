//! Autoplay command
//!
//! Plays the whole word list using nothing but hints.

use crate::game::{Clock, GameController, GuessOutcome, Phase, RandomSource};
use crate::output::formatters::format_total_time;

/// Result of an autoplay run
pub struct AutoplayResult {
    pub steps: Vec<AutoplayStep>,
    pub total_time: Option<String>,
}

/// One solved word
pub struct AutoplayStep {
    pub word: String,
    pub emoji: String,
    pub hints_used: usize,
    /// Letters in the order the hints revealed them
    pub reveal_order: String,
}

/// Solve every word of the list in order by requesting hints
///
/// # Errors
///
/// Returns an error if a hint is rejected while a word is still being played,
/// which would mean the game cannot make progress.
pub fn run_autoplay<R: RandomSource, C: Clock>(
    game: &mut GameController<R, C>,
) -> Result<AutoplayResult, String> {
    game.start();
    let mut steps = Vec::with_capacity(game.words().len());

    loop {
        let mut reveal_order = String::new();
        while game.phase() == Phase::Playing {
            match game.hint() {
                GuessOutcome::Ignored => {
                    return Err(format!(
                        "Hint rejected while playing {}",
                        game.current_entry().word()
                    ));
                }
                GuessOutcome::Recorded { letter, .. } | GuessOutcome::Won { letter, .. } => {
                    reveal_order.push(letter.as_char());
                }
            }
        }

        let entry = game.current_entry();
        tracing::debug!(
            word = entry.word(),
            hints = reveal_order.len(),
            "autoplay solved word"
        );
        steps.push(AutoplayStep {
            word: entry.word().to_string(),
            emoji: entry.emoji().to_string(),
            hints_used: reveal_order.len(),
            reveal_order,
        });

        let total_time = game.state().total_time();
        if game.advance() == Phase::Start {
            return Ok(AutoplayResult {
                steps,
                total_time: total_time.map(format_total_time),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{WordEntry, WordList};
    use crate::game::{RngSource, SystemClock};

    fn words(list: &[&str]) -> WordList {
        WordList::new(
            list.iter()
                .map(|w| WordEntry::new(w, "hint", "✨").unwrap())
                .collect(),
        )
        .unwrap()
    }

    struct Last;

    impl RandomSource for Last {
        fn pick(&mut self, len: usize) -> usize {
            len - 1
        }
    }

    #[test]
    fn solves_every_word_with_distinct_letter_hints() {
        let mut game = GameController::with_sources(
            words(&["ketupat", "opor", "thr"]),
            RngSource::seeded(1),
            SystemClock::new(),
        );
        let result = run_autoplay(&mut game).unwrap();

        let summary: Vec<(&str, usize)> = result
            .steps
            .iter()
            .map(|s| (s.word.as_str(), s.hints_used))
            .collect();
        assert_eq!(summary, [("KETUPAT", 6), ("OPOR", 3), ("THR", 3)]);
        assert_eq!(result.total_time.as_deref(), Some("0s"));
        assert_eq!(game.phase(), Phase::Start);
    }

    #[test]
    fn reveal_order_follows_random_source() {
        let mut game = GameController::with_sources(
            words(&["opor"]),
            Last,
            SystemClock::new(),
        );
        let result = run_autoplay(&mut game).unwrap();
        // Missing letters are listed O P R, always taking the last one
        assert_eq!(result.steps[0].reveal_order, "RPO");
    }
}
