//! TUI rendering and terminal management (impure shell)

pub mod surface;

pub use surface::BufferSurface;

use crate::config::keybindings::KeyBindings;
use crate::config::ResolvedConfig;
use crate::model::{ItemSpec, Viewport};
use crate::state::AppState;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    frame_interval: Duration,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and spawns every
    /// item at the right edge.
    pub fn new(items: Vec<ItemSpec>, config: &ResolvedConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let app_state = AppState::new(items, config.ticker_settings());
        Ok(Self::with_terminal(
            terminal,
            app_state,
            config.frame_interval(),
        ))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wrap an existing terminal and spawn the state's items against its
    /// current size.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut app_state: AppState,
        frame_interval: Duration,
    ) -> Self {
        let viewport = terminal_viewport(&terminal);
        app_state.spawn_items(viewport);

        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            frame_interval,
        }
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q, Esc or Ctrl+C).
    /// Animation advances only on frame deadlines; key presses are applied
    /// between frames without moving anything.
    pub fn run(&mut self) -> Result<(), TuiError> {
        info!(
            frame_interval_ms = self.frame_interval.as_millis() as u64,
            elements = self.app_state.elements.len(),
            "starting event loop"
        );

        let mut next_frame = Instant::now();

        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Resize(width, height) => self.handle_resize(width, height),
                    _ => {}
                }
                continue;
            }

            self.draw()?;

            // Skip frames we are too late for rather than bursting to catch up
            next_frame += self.frame_interval;
            let now = Instant::now();
            if next_frame < now {
                next_frame = now + self.frame_interval;
            }
        }
    }

    /// Handle a key event. Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "key action");
        let viewport = terminal_viewport(&self.terminal);
        self.app_state.apply(action, viewport)
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        self.app_state.resize();
    }

    /// Render one frame, advancing the animation.
    fn draw(&mut self) -> Result<(), TuiError> {
        let app_state = &mut self.app_state;
        self.terminal.draw(|frame| {
            let area = frame.area();
            let mut surface = BufferSurface::new(frame.buffer_mut(), area);
            app_state.tick(&mut surface);
        })?;
        Ok(())
    }
}

/// Current terminal size, or an empty viewport if it cannot be queried.
fn terminal_viewport<B: ratatui::backend::Backend>(terminal: &Terminal<B>) -> Viewport {
    match terminal.size() {
        Ok(size) => Viewport::new(size.width, size.height),
        Err(_) => Viewport::default(),
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16) {
        self.handle_resize(width, height)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Initialize and run the TUI with the given items
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(items: Vec<ItemSpec>, config: &ResolvedConfig) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(items, config) {
        Ok(app) => app,
        Err(err) => {
            // raw mode may already be on
            let _ = restore_terminal();
            return Err(err);
        }
    };

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
