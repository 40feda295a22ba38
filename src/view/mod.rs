//! TUI rendering and event loop (impure shell)

pub mod constants;
pub mod host;
pub mod measure;
mod sheet;
mod styles;

pub use host::TerminalHost;
pub use measure::{measure_sheet, wrap_text, SheetMeasurement};
pub use sheet::{render_sheet, SheetLayout};
pub use styles::{ColorConfig, SheetStyles};

use crate::model::{Region, SheetConfig};
use crate::sizing::{DetentResolver, SizeFeed};
use crate::state::{handle_sheet_key, SheetKeyContext, SheetOutcome, SheetState};
use constants::EVENT_TICK_MS;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Size;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Options carried from the CLI and config file into the TUI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    /// Fraction of the screen the largest detent may cover.
    pub max_detent_fraction: f64,
    /// Whether colors are drawn.
    pub colors: ColorConfig,
}

impl ViewOptions {
    /// Create new view options
    pub fn new(max_detent_fraction: f64, colors: ColorConfig) -> Self {
        Self {
            max_detent_fraction,
            colors,
        }
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::new(1.0, ColorConfig::from_env_and_args(false))
    }
}

/// Sheet application
///
/// Generic over backend to support testing with TestBackend
pub struct SheetApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    sheet: SheetConfig,
    state: SheetState,
    feed: SizeFeed,
    host: TerminalHost,
    styles: SheetStyles,
    /// Screen size seen by the last layout pass
    last_size: Option<Size>,
    /// Region rows reported by the last layout pass
    last_measurement: Option<SheetMeasurement>,
    /// Last rendered sheet (for body scroll limits)
    last_layout: Option<SheetLayout>,
}

impl SheetApp<CrosstermBackend<Stdout>> {
    /// Create and present a sheet on the real terminal
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(sheet: SheetConfig, options: ViewOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, sheet, options))
    }

    /// Run the event loop until the sheet closes
    ///
    /// A refresh parked by the resolver during one turn is delivered at the
    /// start of the next, so the loop polls without waiting while one is
    /// outstanding.
    pub fn run(&mut self) -> Result<SheetOutcome, TuiError> {
        let tick = Duration::from_millis(EVENT_TICK_MS);

        loop {
            self.turn()?;

            if self.state.outcome().is_final() {
                return Ok(self.state.outcome());
            }

            let timeout = if self.feed.has_pending() {
                Duration::ZERO
            } else {
                tick
            };
            if !event::poll(timeout)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key);
                }
                Event::Resize(width, height) => {
                    // Picked up by the next layout pass
                    debug!(width, height, "Terminal resized");
                }
                _ => {}
            }
        }
    }
}

impl<B> SheetApp<B>
where
    B: Backend,
{
    /// Present `sheet` on an existing terminal.
    pub fn with_terminal(terminal: Terminal<B>, sheet: SheetConfig, options: ViewOptions) -> Self {
        let resolver = DetentResolver::new(0.0, sheet.policy());
        let mut state = SheetState::new();
        state.open();

        Self {
            terminal,
            sheet,
            state,
            feed: SizeFeed::new(resolver),
            host: TerminalHost::new(options.max_detent_fraction),
            styles: SheetStyles::new(options.colors),
            last_size: None,
            last_measurement: None,
            last_layout: None,
        }
    }

    /// One event-loop turn: deliver, lay out, draw.
    pub fn turn(&mut self) -> Result<(), TuiError> {
        if self.feed.deliver(&mut self.host) {
            debug!(revision = ?self.host.revision(), "Delivered stop refresh");
        }
        self.layout_pass()?;
        self.draw()
    }

    /// Replace the body text; the sheet re-measures on the next turn.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.sheet.set_body(body);
        self.host.invalidate_body();
    }

    /// Handle a single keyboard event
    ///
    /// Returns true once the sheet has closed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even when dismissal is disabled
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info!("Sheet interrupted");
            self.state.interrupt();
            self.state.close();
            return true;
        }

        match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.host.expand();
                return false;
            }
            KeyCode::Char('-') => {
                self.host.shrink();
                return false;
            }
            _ => {}
        }

        let context = self.key_context();
        if !handle_sheet_key(&mut self.state, key, &context) {
            return false;
        }

        self.settle()
    }

    /// Sheet being presented.
    pub fn sheet(&self) -> &SheetConfig {
        &self.sheet
    }

    /// Interaction state.
    pub fn state(&self) -> &SheetState {
        &self.state
    }

    /// Presentation host.
    pub fn host(&self) -> &TerminalHost {
        &self.host
    }

    /// Size feed and resolver.
    pub fn feed(&self) -> &SizeFeed {
        &self.feed
    }

    /// Where the sheet was last drawn.
    pub fn last_layout(&self) -> Option<SheetLayout> {
        self.last_layout
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Mutable access to the terminal, e.g. to resize a test backend.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    fn key_context(&self) -> SheetKeyContext {
        let (max_body_scroll, body_rows) = self
            .last_layout
            .map(|layout| (layout.max_body_scroll(), layout.body.height))
            .unwrap_or((0, 0));

        SheetKeyContext {
            button_count: self.sheet.buttons().len(),
            interactive_dismiss: self.sheet.is_interactive_dismiss_enabled(),
            max_body_scroll,
            body_rows,
        }
    }

    /// Run the side effects of a final outcome and close the sheet.
    fn settle(&mut self) -> bool {
        match self.state.outcome() {
            SheetOutcome::Activated(index) => {
                if let Some(label) = self.sheet.activate(index) {
                    info!(index, button = label, "Button activated");
                }
                self.state.close();
                true
            }
            SheetOutcome::Dismissed => {
                info!("Sheet dismissed");
                self.sheet.fire_dismiss();
                self.state.close();
                true
            }
            SheetOutcome::Interrupted => true,
            SheetOutcome::Pending => false,
        }
    }

    /// Feed screen size and region heights to the resolver.
    ///
    /// Only regions whose rows changed since the last pass are reported.
    fn layout_pass(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;

        if self.last_size != Some(size) {
            debug!(width = size.width, height = size.height, "Screen size changed");
            self.last_size = Some(size);
            let max_detent = self.host.max_detent_value(size.height);
            self.feed.resolver_mut().set_max_detent(Some(max_detent));
            self.feed.set_screen_height(f64::from(size.height));
        }

        let measurement = measure_sheet(&self.sheet, size.width);
        if self.last_measurement == Some(measurement) {
            return Ok(());
        }

        for region in Region::ALL {
            let rows = measurement.rows(region);
            let previous = self.last_measurement.map(|last| last.rows(region));
            if previous != Some(rows) {
                self.feed.report_height(region, f64::from(rows));
            }
        }
        self.last_measurement = Some(measurement);

        Ok(())
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let sheet = &self.sheet;
        let state = &self.state;
        let host = &mut self.host;
        let styles = self.styles;
        let mut layout = None;

        self.terminal.draw(|frame| {
            layout = render_sheet(frame, sheet, state, host, styles);
        })?;

        self.last_layout = layout;
        if let Some(layout) = layout {
            self.state.clamp_body_scroll(layout.max_body_scroll());
        }

        Ok(())
    }
}

/// Present a sheet on the terminal and wait for the user
///
/// This is the main entry point for the TUI. It handles terminal setup,
/// runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_sheet(sheet: SheetConfig, options: ViewOptions) -> Result<SheetOutcome, TuiError> {
    let mut app = SheetApp::new(sheet, options)?;

    // Run the app and ensure cleanup happens even on error
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
