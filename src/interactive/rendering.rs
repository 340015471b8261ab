//! TUI rendering with ratatui
//!
//! Title screen, word board, hint panel and keyboard.

use super::app::{App, MessageStyle};
use crate::core::KeyState;
use crate::game::{Clock, GameView, Phase, RandomSource};
use crate::output::formatters::format_total_time;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: RandomSource, C: Clock>(f: &mut Frame, app: &App<R, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    if app.game.phase() == Phase::Start {
        render_title(f, app, chunks[1]);
    } else {
        let view = app.game.view();
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(65), // Board
                Constraint::Percentage(35), // Progress and messages
            ])
            .split(chunks[1]);

        render_board(f, &view, main_chunks[0]);
        render_info_panel(f, app, &view, main_chunks[1]);
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌙 TEBAK KATA - Lebaran Edition")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_title<R: RandomSource, C: Clock>(f: &mut Frame, app: &App<R, C>, area: Rect) {
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Tebak Kata",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Guess {} hidden words, one letter at a time.",
            app.game.words().len()
        )),
        Line::from("Each word comes with a hint and an emoji."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if let Some(total) = app.game.state().total_time() {
        content.push(Line::from(""));
        content.push(Line::from(format!(
            "Last playthrough: {}",
            format_total_time(total)
        )));
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, view: &GameView<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hint
            Constraint::Min(5),    // Word slots
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    render_hint(f, view, chunks[0]);
    render_word(f, view, chunks[1]);
    render_keyboard(f, view, chunks[2]);
}

fn render_hint(f: &mut Frame, view: &GameView<'_>, area: Rect) {
    let content = vec![
        Line::from(view.emoji.to_string()),
        Line::from(Span::styled(
            view.hint.to_string(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, view: &GameView<'_>, area: Rect) {
    let won = view.phase == Phase::Won;
    let slot_style = if won {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };

    let slots: Vec<Span> = view
        .slots
        .iter()
        .map(|slot| match slot {
            Some(c) => Span::styled(format!(" {c} "), slot_style),
            None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
        })
        .collect();

    let mut content = vec![Line::from(""), Line::from(slots)];
    if won {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            "🎉 SELAMAT! 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        if let Some(ref total) = view.total_time {
            content.push(Line::from(format!("Total time: {total}")));
        }
    }

    let title = format!(
        " Word {}/{} · {}/{} letters ",
        view.word_number,
        view.word_count,
        view.revealed,
        view.slots.len()
    );
    let border_color = if won { Color::Green } else { Color::White };
    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(border_color)),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, view: &GameView<'_>, area: Rect) {
    let rows: Vec<Line> = view
        .keys
        .iter()
        .map(|row| {
            let keys: Vec<Span> = row
                .iter()
                .map(|&(letter, state)| {
                    let style = match state {
                        KeyState::Unguessed => Style::default().fg(Color::White),
                        KeyState::Correct => Style::default()
                            .fg(Color::Black)
                            .bg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                        KeyState::Incorrect => Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(keys)
        })
        .collect();

    let keyboard = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel<R: RandomSource, C: Clock>(
    f: &mut Frame,
    app: &App<R, C>,
    view: &GameView<'_>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word progress gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_progress(f, view, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, view: &GameView<'_>, area: Rect) {
    let solved = view.word_number - usize::from(view.phase != Phase::Won);
    let percent = (solved * 100 / view.word_count.max(1)).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{solved}/{} words", view.word_count));

    f.render_widget(gauge, area);
}

fn render_messages<R: RandomSource, C: Clock>(f: &mut Frame, app: &App<R, C>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<R: RandomSource, C: Clock>(f: &mut Frame, app: &App<R, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Phase: {}", app.game.phase())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let time_text = app
        .game
        .elapsed_secs()
        .map_or_else(|| "Time: -".to_string(), |secs| format!("Time: {}", format_total_time(secs)));
    let time = Paragraph::new(time_text).alignment(Alignment::Center);
    f.render_widget(time, chunks[1]);

    let help_text = match app.game.phase() {
        Phase::Start => "Enter: Start | Esc: Quit",
        Phase::Playing => "A-Z: Guess | TAB: Hint | Esc: Quit",
        Phase::Won if app.game.is_last_word() => "Enter: Restart | Esc: Quit",
        Phase::Won => "Enter: Next Word | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
