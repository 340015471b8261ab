//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::core::KeyState;
use crate::game::{Clock, GameController, GuessOutcome, Phase, RandomSource};
use crate::output::formatters::create_progress_bar;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<R: RandomSource, C: Clock>(
    game: &mut GameController<R, C>,
) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_session(game, &mut stdin.lock(), &mut stdout.lock())
}

/// Play a session reading commands from `input` and printing to `output`
///
/// The session ends on `quit` or when `input` is exhausted.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output` fails.
pub fn run_simple_session<R, C, I, W>(
    game: &mut GameController<R, C>,
    input: &mut I,
    output: &mut W,
) -> Result<(), String>
where
    R: RandomSource,
    C: Clock,
    I: BufRead,
    W: Write,
{
    print_banner(output).map_err(|e| e.to_string())?;

    loop {
        match game.phase() {
            Phase::Start => {
                let Some(line) = get_user_input(input, output, "Press Enter to start")? else {
                    return Ok(());
                };
                if is_quit(&line) {
                    break;
                }
                game.start();
                tracing::info!(words = game.words().len(), "game started");
            }
            Phase::Playing => {
                print_board(game, output).map_err(|e| e.to_string())?;
                let Some(line) = get_user_input(input, output, "Guess (letters, '?' for hint)")?
                else {
                    return Ok(());
                };
                match line.to_lowercase().as_str() {
                    "quit" | "exit" => break,
                    "restart" => {
                        game.start();
                        writeln!(output, "\n🔄 Restarted from the first word!\n")
                            .map_err(|e| e.to_string())?;
                    }
                    "?" | "hint" => {
                        let outcome = game.hint();
                        report(game, outcome, output).map_err(|e| e.to_string())?;
                    }
                    letters => {
                        if !letters.chars().any(|c| c.is_ascii_alphabetic()) {
                            writeln!(output, "❌ Type one or more letters A-Z\n")
                                .map_err(|e| e.to_string())?;
                        }
                        for c in letters.chars() {
                            let outcome = game.submit_char(c);
                            report(game, outcome, output).map_err(|e| e.to_string())?;
                            if outcome.is_win() {
                                break;
                            }
                        }
                    }
                }
            }
            Phase::Won => {
                print_celebration(game, output).map_err(|e| e.to_string())?;
                let prompt = if game.is_last_word() {
                    "Play again? (yes/no)"
                } else {
                    "Press Enter for the next word"
                };
                let Some(line) = get_user_input(input, output, prompt)? else {
                    return Ok(());
                };
                if is_quit(&line) || (game.is_last_word() && !is_yes(&line)) {
                    break;
                }
                if game.advance() == Phase::Start {
                    game.start();
                    tracing::info!("game restarted");
                }
            }
        }
    }

    writeln!(output, "\n👋 Selamat Hari Raya! Thanks for playing!\n").map_err(|e| e.to_string())
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "exit" | "no" | "n")
}

fn is_yes(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "yes" | "y" | "")
}

fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Tebak Kata - Lebaran Edition                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Reveal each hidden word letter by letter, guided by its hint.")?;
    writeln!(out, "  - Type letters to guess (several at once is fine)")?;
    writeln!(out, "  - Type '?' or 'hint' to reveal a random letter")?;
    writeln!(out, "Commands: 'restart' to start over, 'quit' to exit\n")
}

fn print_board<R: RandomSource, C: Clock, W: Write>(
    game: &GameController<R, C>,
    out: &mut W,
) -> io::Result<()> {
    let view = game.view();

    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Word {}/{} [{}]",
        view.word_number,
        view.word_count,
        create_progress_bar(view.word_number - 1, view.word_count, 20)
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(out, "\n  {}  {}", view.emoji, view.hint.italic())?;
    writeln!(out, "\n      {}\n", view.masked_word().bright_white().bold())?;

    for (indent, row) in view.keys.iter().enumerate() {
        let keys: Vec<String> = row
            .iter()
            .map(|&(letter, state)| {
                let key = letter.to_string();
                match state {
                    KeyState::Unguessed => key.normal().to_string(),
                    KeyState::Correct => key.green().bold().to_string(),
                    KeyState::Incorrect => key.bright_black().strikethrough().to_string(),
                }
            })
            .collect();
        writeln!(out, "  {}{}", " ".repeat(indent), keys.join(" "))?;
    }
    writeln!(out)
}

fn report<R: RandomSource, C: Clock, W: Write>(
    game: &GameController<R, C>,
    outcome: GuessOutcome,
    out: &mut W,
) -> io::Result<()> {
    match outcome {
        GuessOutcome::Ignored => Ok(()),
        GuessOutcome::Recorded { letter, hit: true } => {
            let count = game.current_entry().positions_of(letter).len();
            writeln!(out, "{}", format!("✓ {letter} appears {count}×").green())
        }
        GuessOutcome::Recorded { letter, hit: false } => {
            writeln!(out, "{}", format!("✗ No {letter} in this word").red())
        }
        GuessOutcome::Won { .. } => Ok(()),
    }
}

fn print_celebration<R: RandomSource, C: Clock, W: Write>(
    game: &GameController<R, C>,
    out: &mut W,
) -> io::Result<()> {
    let view = game.view();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        format!("    🎉 ✨  {}  {}  ✨ 🎉    ", view.masked_word(), view.emoji)
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;

    if let Some(total) = &view.total_time {
        writeln!(
            out,
            "\n  🏁 All {} words done! Total time: {}",
            view.word_count,
            total.bright_yellow().bold()
        )?;
        tracing::info!(total_time = total.as_str(), "playthrough finished");
    }
    writeln!(out)
}

/// Get user input with a prompt; `None` once input is exhausted
fn get_user_input<I: BufRead, W: Write>(
    input: &mut I,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, String> {
    write!(output, "{prompt}: ").map_err(|e| e.to_string())?;
    output.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, WordEntry, WordList};
    use crate::game::SystemClock;
    use std::io::Cursor;

    struct First;

    impl RandomSource for First {
        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn game(list: &[&str]) -> GameController<First, SystemClock> {
        let words = WordList::new(
            list.iter()
                .map(|w| WordEntry::new(w, "hint", "✨").unwrap())
                .collect(),
        )
        .unwrap();
        GameController::with_sources(words, First, SystemClock::new())
    }

    fn session(game: &mut GameController<First, SystemClock>, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_simple_session(game, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn quits_from_title_screen() {
        let mut game = game(&["mudik"]);
        let out = session(&mut game, "quit\n");
        assert_eq!(game.phase(), Phase::Start);
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn eof_ends_session() {
        let mut game = game(&["mudik"]);
        let out = session(&mut game, "\nmu\n");
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.state().guessed().len(), 2);
        assert!(!out.contains("Thanks for playing"));
    }

    #[test]
    fn multi_letter_lines_guess_each_letter() {
        let mut game = game(&["mudik", "opor"]);
        session(&mut game, "\nm5u!dik\n");
        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.state().guessed().len(), 5);
    }

    #[test]
    fn hint_command_reveals_first_missing_letter() {
        let mut game = game(&["opor"]);
        session(&mut game, "\n?\n");
        assert!(
            game.state()
                .guessed()
                .contains(Letter::from_char('O').unwrap())
        );
    }

    #[test]
    fn full_playthrough_reports_total_time() {
        let mut game = game(&["a", "b"]);
        let out = session(&mut game, "\na\n\nb\nno\n");
        assert!(out.contains("Total time"));
        assert!(out.contains("Thanks for playing"));
        assert_eq!(game.phase(), Phase::Won);
    }

    #[test]
    fn play_again_restarts_from_first_word() {
        let mut game = game(&["a"]);
        session(&mut game, "\na\nyes\n");
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.state().current_index(), 0);
        assert!(game.state().guessed().is_empty());
    }

    #[test]
    fn restart_command_resets_progress() {
        let mut game = game(&["a", "b"]);
        session(&mut game, "\na\n\nrestart\n");
        assert_eq!(game.state().current_index(), 0);
        assert_eq!(game.phase(), Phase::Playing);
    }
}
