//! Main TUI dashboard for Xboard.
//!
//! Shows the panel pages behind a navigation bar, with modals for client
//! import and the login, register and password-recovery forms.
//!
//! # Module Structure
//!
//! - `state` - Panel state and key handling (no rendering dependencies)
//! - `render` - Layout orchestration
//! - `summary` - Plain-text output for non-TTY use

mod render;
pub mod state;
mod summary;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub use state::{
    AuthForm, DashboardConfig, DashboardEvent, Overlay, PanelState, QUIT_CONFIRM_TIMEOUT,
    SPINNER_FRAMES,
};
pub use summary::print_summary;

/// The main dashboard UI.
pub struct Dashboard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: PanelState,
    /// Spinner frame index while the quote is loading.
    spinner_frame: usize,
    quote_loaded: bool,
}

impl Dashboard {
    /// Take over the terminal and show the dashboard page.
    pub fn new(config: DashboardConfig) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state: PanelState::new(config),
            spinner_frame: 0,
            quote_loaded: false,
        })
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    /// Replace the loading placeholder with the fetched quote.
    pub fn set_quote(&mut self, quote: String) {
        self.state.set_quote(quote);
        self.quote_loaded = true;
    }

    /// Restore terminal to normal state.
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the current state.
    pub fn draw(&mut self) -> io::Result<()> {
        let spinner = if self.quote_loaded {
            None
        } else {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
            Some(SPINNER_FRAMES[self.spinner_frame])
        };

        let state = &self.state;
        let now = Instant::now();
        self.terminal.draw(|frame| {
            render::render_ui(frame, state, now, spinner);
        })?;

        Ok(())
    }

    /// Check for events (non-blocking).
    ///
    /// `Ctrl+C` quits at once; every other key goes through
    /// [`PanelState::handle_key`].
    pub fn poll_event(&mut self) -> io::Result<Option<DashboardEvent>> {
        if event::poll(Duration::from_millis(10))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(None);
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    return Ok(Some(DashboardEvent::Quit));
                }
                return Ok(self.state.handle_key(key.code, Instant::now()));
            }
        }

        Ok(None)
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
