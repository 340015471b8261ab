//! TUI application state and logic

use crate::game::{
    Clock, GameController, GuessOutcome, Phase, RandomSource, RngSource, SystemClock,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Redraw interval so the live timer keeps ticking without input
const TICK: Duration = Duration::from_millis(250);

/// Application state
pub struct App<R: RandomSource = RngSource, C: Clock = SystemClock> {
    pub game: GameController<R, C>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<R: RandomSource, C: Clock> App<R, C> {
    #[must_use]
    pub fn new(game: GameController<R, C>) -> Self {
        Self {
            game,
            messages: vec![Message {
                text: "Selamat datang! Press Enter to start.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Apply one key press to the game
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.game.phase() {
            Phase::Start => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.start_game();
                }
            }
            Phase::Playing => match key.code {
                KeyCode::Tab | KeyCode::Char('?') => {
                    let outcome = self.game.hint();
                    self.report(outcome, true);
                }
                KeyCode::Char(c) => {
                    let outcome = self.game.submit_char(c);
                    self.report(outcome, false);
                }
                _ => {}
            },
            Phase::Won => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.advance();
                }
            }
        }
    }

    pub fn start_game(&mut self) {
        self.game.start();
        self.messages.clear();
        tracing::info!(words = self.game.words().len(), "game started");
        self.add_message(
            "Guess the word! Type letters, TAB for a hint.",
            MessageStyle::Info,
        );
    }

    fn advance(&mut self) {
        match self.game.advance() {
            Phase::Playing => {
                self.messages.clear();
                let view = self.game.view();
                let text = format!("Word {} of {}", view.word_number, view.word_count);
                self.add_message(&text, MessageStyle::Info);
            }
            Phase::Start => {
                self.messages.clear();
                self.add_message("Press Enter to play again.", MessageStyle::Info);
            }
            Phase::Won => {}
        }
    }

    fn report(&mut self, outcome: GuessOutcome, from_hint: bool) {
        match outcome {
            GuessOutcome::Ignored => {}
            GuessOutcome::Recorded { letter, hit: true } => {
                let count = self.game.current_entry().positions_of(letter).len();
                let text = if from_hint {
                    format!("💡 Hint: {letter} ({count}×)")
                } else {
                    format!("✓ {letter} appears {count}×")
                };
                self.add_message(&text, MessageStyle::Success);
            }
            GuessOutcome::Recorded { letter, hit: false } => {
                self.add_message(&format!("✗ No {letter} in this word"), MessageStyle::Error);
            }
            GuessOutcome::Won { total_time, .. } => {
                let entry = self.game.current_entry();
                let text = format!("🎉 {} {} solved!", entry.word(), entry.emoji());
                tracing::info!(word = entry.word(), "word won");
                self.add_message(&text, MessageStyle::Success);

                if let Some(secs) = total_time {
                    tracing::info!(total_secs = secs, "playthrough finished");
                    self.add_message(
                        "All words done! Press Enter to return to the title.",
                        MessageStyle::Info,
                    );
                } else {
                    self.add_message("Press Enter for the next word.", MessageStyle::Info);
                }
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: RandomSource, C: Clock>(app: App<R, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("tui loop failed: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, R, C>(terminal: &mut Terminal<B>, mut app: App<R, C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    R: RandomSource,
    C: Clock,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeyState, Letter, WordEntry, WordList};

    struct First;

    impl RandomSource for First {
        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn app(list: &[&str]) -> App<First, SystemClock> {
        let words = WordList::new(
            list.iter()
                .map(|w| WordEntry::new(w, "hint", "✨").unwrap())
                .collect(),
        )
        .unwrap();
        App::new(GameController::with_sources(words, First, SystemClock::new()))
    }

    fn press(app: &mut App<First, SystemClock>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn letters_ignored_on_title_screen() {
        let mut app = app(&["mudik"]);
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.game.phase(), Phase::Start);
        assert!(app.game.state().guessed().is_empty());
    }

    #[test]
    fn enter_starts_and_letters_guess() {
        let mut app = app(&["ketupat"]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.phase(), Phase::Playing);

        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.game.key_state(letter('Z')), KeyState::Incorrect);
        assert_eq!(app.game.key_state(letter('T')), KeyState::Correct);
        assert_eq!(app.game.state().guessed().len(), 2);

        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "✓ T appears 2×");
    }

    #[test]
    fn tab_requests_hint() {
        let mut app = app(&["opor"]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        assert!(app.game.state().guessed().contains(letter('O')));
        assert!(app.messages.last().unwrap().text.starts_with("💡"));
    }

    #[test]
    fn enter_advances_after_win_then_returns_to_title() {
        let mut app = app(&["a", "b"]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.game.phase(), Phase::Won);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.phase(), Phase::Playing);
        assert_eq!(app.game.state().current_index(), 1);

        press(&mut app, KeyCode::Char('b'));
        assert!(app.game.state().total_time().is_some());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.phase(), Phase::Start);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app(&["a"]);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app(&["a"]);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn release_events_ignored() {
        let mut app = app(&["a"]);
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.game.phase(), Phase::Start);
    }

    #[test]
    fn messages_capped_at_five() {
        let mut app = app(&["mudik"]);
        for i in 0..8 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m3");
    }
}
