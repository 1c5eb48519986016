//! TUI application state and logic

use crate::engine::{EngineError, InputBuffer, RoundState};
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::error;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'d> {
    pub session: Session<'d, StdRng>,
    pub input: InputBuffer,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'d> App<'d> {
    #[must_use]
    pub fn new(session: Session<'d, StdRng>) -> Self {
        Self {
            session,
            input: InputBuffer::new(),
            messages: vec![Message {
                text: "Guess the word! Type letters, Enter to submit.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    #[must_use]
    pub fn round_state(&self) -> RoundState {
        self.session.engine().round_state()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_round(),
            _ if self.round_state().is_over() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_round(),
                _ => {}
            },
            KeyCode::Char(c) => {
                self.input.push(c, self.round_state());
            }
            KeyCode::Backspace => {
                self.input.pop(self.round_state());
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        if !self.input.is_complete() {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        let guess = self.input.text();
        match self.session.submit(&guess) {
            Ok(_) => {
                self.input.clear();
                self.announce_outcome();
            }
            Err(EngineError::NotInDictionary(word)) => self.add_message(
                &format!("{} is not in the word list", word.to_uppercase()),
                MessageStyle::Error,
            ),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn announce_outcome(&mut self) {
        let engine = self.session.engine();
        let Ok(solution) = engine.revealed_solution() else {
            return;
        };
        let solution = solution.text().to_uppercase();

        let (text, style) = match engine.round_state() {
            RoundState::Won => {
                let praise = match engine.history().len() {
                    1 => "🎯 Genius!",
                    2 => "🔥 Magnificent!",
                    3 => "✨ Impressive!",
                    4 => "👏 Splendid!",
                    5 => "🎉 Great!",
                    _ => "😅 Phew!",
                };
                (format!("{praise} The word was {solution}"), MessageStyle::Success)
            }
            _ => (
                format!("Out of guesses! The word was {solution}"),
                MessageStyle::Error,
            ),
        };
        self.add_message(&text, style);
        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_round(&mut self) {
        self.session.new_round();
        self.input.clear();
        self.messages.clear();
        self.add_message("New round started!", MessageStyle::Info);
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
pub fn run_tui(app: App<'_>) -> Result<()> {
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
        error!("tui exited with error: {err:#}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App<'_>) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
