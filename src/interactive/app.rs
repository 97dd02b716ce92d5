//! TUI application state and logic

use crate::core::RoundStatus;
use crate::output::messages::{Banner, guess_announcement};
use crate::round::{GuessError, GuessOutcome, Session};
use crate::wordlists::RandomWords;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long to wait for input when no tick is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub session: Session<RandomWords>,
    pub rng: StdRng,
    pub messages: Vec<Message>,
    /// Title and body of the status area, recomputed after every change
    pub banner: Option<(Option<&'static str>, String)>,
    /// Spoken-style feedback on the last guess
    pub announcement: Option<String>,
    pub show_overlay: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session<RandomWords>, rng: StdRng) -> Self {
        Self {
            session,
            rng,
            messages: vec![Message {
                text: "Press SPACE to start the clock.".to_string(),
                style: MessageStyle::Info,
            }],
            banner: None,
            announcement: None,
            show_overlay: false,
            should_quit: false,
        }
    }

    pub fn start_game(&mut self) {
        if self.session.round().is_started() {
            return;
        }
        self.session.start(Instant::now());
        self.add_message("Clock started! Type letters to guess.", MessageStyle::Info);
    }

    pub fn handle_letter(&mut self, c: char) {
        match self.session.guess(c) {
            Ok(GuessOutcome::Repeated(letter)) => {
                self.add_message(
                    &format!("{} was already guessed", letter.as_char().to_ascii_uppercase()),
                    MessageStyle::Info,
                );
            }
            Ok(outcome) => {
                debug!(?outcome, "guess applied");
                self.refresh();
                self.announce_end();
            }
            Err(GuessError::NotStarted) => {
                self.add_message("Press SPACE to start first!", MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Apply ticks that came due
    pub fn on_tick(&mut self, now: Instant) {
        let before = self.session.status();
        if self.session.advance(now) > 0 && before != self.session.status() {
            self.refresh();
            self.announce_end();
        }
    }

    pub fn new_game(&mut self) {
        match self.session.new_round(Instant::now()) {
            Ok(()) => {
                self.messages.clear();
                self.banner = None;
                self.announcement = None;
                self.show_overlay = false;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&format!("Cannot start a new game: {e}"), MessageStyle::Error),
        }
    }

    pub fn dismiss_overlay(&mut self) {
        self.show_overlay = false;
    }

    fn refresh(&mut self) {
        let round = self.session.round();
        self.announcement = guess_announcement(round);
        self.banner = Banner::for_round(round).map(|banner| (banner.title(), banner.body(&mut self.rng)));
    }

    fn announce_end(&mut self) {
        let word = self.session.round().engine().word().text().to_uppercase();
        match self.session.status() {
            RoundStatus::InProgress => return,
            RoundStatus::Won => {
                self.add_message(&format!("🎉 Solved: {word}"), MessageStyle::Success);
            }
            RoundStatus::Lost | RoundStatus::TimedOut => {
                self.show_overlay = true;
                self.add_message(&format!("The word was {word}"), MessageStyle::Error);
            }
        }
        self.add_message("Press ENTER for a new game or ESC to quit.", MessageStyle::Info);
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
pub fn run_tui(app: App) -> Result<()> {
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
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.on_tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = app
            .session
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(Instant::now())
            });

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c' | 'q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    if app.show_overlay {
                        app.dismiss_overlay();
                    } else {
                        app.should_quit = true;
                    }
                }
                KeyCode::Char(' ') => app.start_game(),
                KeyCode::Enter if app.session.round().is_over() => app.new_game(),
                KeyCode::Char(c) if !app.show_overlay => app.handle_letter(c),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
