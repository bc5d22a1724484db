//! TUI application state and logic

use crate::commands::{PlayConfig, RoundResult, Verdict, judge_answer, play_round};
use crate::solver::{Solver, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 10;

/// Application state
pub struct App {
    pub solver: Solver<StrategyType>,
    pub config: PlayConfig,
    rng: StdRng,
    pub round: Option<RoundResult>,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a word for the current round
    Answering,
    /// Best words are shown; waiting for a new round
    Revealed,
}

/// One answer given by the player
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub word: String,
    pub verdict: Verdict,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds: usize,
    /// Rounds in which the player matched the best metric
    pub best_found: usize,
    pub points: u64,
}

impl App {
    #[must_use]
    pub fn new(solver: Solver<StrategyType>, config: PlayConfig, rng: StdRng) -> Self {
        Self {
            solver,
            config,
            rng,
            round: None,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Welcome! Find the best word by {} from the letters shown.",
                    config.mode.metric_name()
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Answering,
        }
    }

    pub fn add_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            text: text.into(),
            style,
        });

        // Keep only the latest messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Draw a fresh set of letters
    pub fn new_round(&mut self) {
        self.history.clear();
        self.input_buffer.clear();
        self.input_mode = InputMode::Answering;

        match play_round(self.config, &self.solver, &mut self.rng) {
            Ok(round) => {
                self.stats.rounds += 1;
                self.add_message(
                    format!("Round {} started", self.stats.rounds),
                    MessageStyle::Info,
                );
                self.round = Some(round);
            }
            Err(err) => {
                log::warn!("cannot start round: {err}");
                self.add_message(format!("Cannot draw letters: {err}"), MessageStyle::Error);
                self.round = None;
            }
        }
    }

    /// Judge the word in the input buffer
    pub fn submit_answer(&mut self) {
        let word = self.input_buffer.trim().to_lowercase();
        self.input_buffer.clear();
        if word.is_empty() {
            return;
        }
        if self.round.is_none() {
            self.add_message("No round in progress (Ctrl-N)", MessageStyle::Error);
            return;
        }
        let label = word.to_uppercase();
        if self.history.iter().any(|entry| entry.word == word) {
            self.add_message(format!("{label} already tried"), MessageStyle::Error);
            return;
        }
        let Some(round) = &self.round else {
            return;
        };

        let verdict = judge_answer(&self.solver, round, &word);
        match verdict {
            Verdict::Unknown => {
                self.add_message(format!("{label} is not in the dictionary"), MessageStyle::Error);
            }
            Verdict::NotFormable => {
                self.add_message(
                    format!("{label} cannot be formed from these letters"),
                    MessageStyle::Error,
                );
            }
            Verdict::Valid { metric, best } => {
                self.stats.points += u64::from(metric);
                if best {
                    self.stats.best_found += 1;
                    self.add_message(
                        format!("{label} is a best answer ({metric})!"),
                        MessageStyle::Success,
                    );
                    self.input_mode = InputMode::Revealed;
                } else {
                    self.add_message(format!("{label} is valid ({metric})"), MessageStyle::Info);
                }
            }
        }
        self.history.push(HistoryEntry { word, verdict });
    }

    /// Show the best words of the current round
    pub fn reveal(&mut self) {
        if self.round.is_some() {
            self.input_mode = InputMode::Revealed;
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_round(),
            _ => match self.input_mode {
                InputMode::Revealed => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
                        self.new_round();
                    }
                }
                InputMode::Answering => match key.code {
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                    KeyCode::Backspace => {
                        self.input_buffer.pop();
                    }
                    KeyCode::Enter => self.submit_answer(),
                    KeyCode::Tab => self.reveal(),
                    _ => {}
                },
            },
        }
    }
}

/// Run the TUI until the player quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or restored.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_round();

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
