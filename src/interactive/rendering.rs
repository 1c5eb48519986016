//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::output::render::{Key, Row, TileStyle, board, keyboard};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board + messages
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn tile_style(style: TileStyle) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match style {
        TileStyle::Empty => Style::default().fg(Color::DarkGray),
        TileStyle::Pending => base.fg(Color::White),
        TileStyle::Correct => base.fg(Color::Black).bg(Color::Green),
        TileStyle::Present => base.fg(Color::Black).bg(Color::Yellow),
        TileStyle::Absent => base.fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn board_line(row: &Row) -> Line<'static> {
    let spans: Vec<Span> = row
        .iter()
        .flat_map(|tile| {
            let text = tile.letter.map_or_else(
                || " _ ".to_string(),
                |l| format!(" {} ", l.as_char().to_ascii_uppercase()),
            );
            [Span::styled(text, tile_style(tile.style)), Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let rows = board(app.session.engine(), &app.input);

    let mut lines = vec![Line::from("")];
    for row in &rows {
        lines.push(board_line(row));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn key_line(keys: &[Key]) -> Line<'static> {
    let spans: Vec<Span> = keys
        .iter()
        .map(|key| {
            let style = match key.style {
                TileStyle::Empty | TileStyle::Pending => Style::default().fg(Color::White),
                other => tile_style(other),
            };
            Span::styled(
                format!(" {} ", key.letter.as_char().to_ascii_uppercase()),
                style,
            )
        })
        .collect();
    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = keyboard(&app.session.engine().letter_hints())
        .iter()
        .map(|keys| key_line(keys))
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let engine = app.session.engine();
    let stats = app.session.stats();

    let turn_text = if engine.round_state().is_over() {
        "Round over".to_string()
    } else {
        format!("Attempts left: {}", engine.attempts_remaining())
    };
    f.render_widget(
        Paragraph::new(turn_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.games_played,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let streak_text = format!("Streak: {} (max {})", stats.current_streak, stats.max_streak);
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if engine.round_state().is_over() {
        "n: New Round | q: Quit"
    } else {
        "Enter: Submit | Ctrl-N: New | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
