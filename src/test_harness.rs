//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing by wrapping
//! SheetApp<TestBackend> with convenient methods for simulating user
//! interactions and terminal resizes.

use crate::model::{SheetConfig, Stop};
use crate::state::SheetOutcome;
use crate::view::{ColorConfig, SheetApp, TuiError, ViewOptions};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Turns allowed before the harness gives up waiting for the sizing loop to settle.
const MAX_SETTLE_TURNS: usize = 8;

/// Convert a ratatui buffer to a string representation for assertions.
///
/// Captures the visual output character by character, preserving layout.
/// Trailing whitespace on each row is removed.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps SheetApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct SheetHarness {
    app: SheetApp<TestBackend>,
}

impl SheetHarness {
    /// Present `sheet` on a `width` x `height` test terminal, colors off.
    pub fn new(sheet: SheetConfig, width: u16, height: u16) -> Result<Self, TuiError> {
        Self::with_options(sheet, width, height, ViewOptions::new(1.0, ColorConfig::disabled()))
    }

    /// Present `sheet` with explicit view options.
    pub fn with_options(
        sheet: SheetConfig,
        width: u16,
        height: u16,
        options: ViewOptions,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            app: SheetApp::with_terminal(terminal, sheet, options),
        })
    }

    /// Run turns until no refresh is pending.
    ///
    /// Returns the number of turns taken.
    pub fn settle(&mut self) -> Result<usize, TuiError> {
        for turn in 1..=MAX_SETTLE_TURNS {
            self.app.turn()?;
            if !self.app.feed().has_pending() {
                return Ok(turn);
            }
        }
        panic!("sizing did not settle within {MAX_SETTLE_TURNS} turns");
    }

    /// Send a single key event
    ///
    /// Returns `true` if the sheet closed as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        self.app.handle_key(KeyEvent::new(key, mods))
    }

    /// Send a sequence of keys, stopping once the sheet closes.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Resize the test terminal; takes effect on the next turn.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
    }

    /// Replace the body text.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.app.set_body(body);
    }

    /// Stop the terminal currently presents.
    pub fn active_stop(&self) -> Option<Stop> {
        self.app.host().active_stop()
    }

    /// How the sheet ended, if it has.
    pub fn outcome(&self) -> SheetOutcome {
        self.app.state().outcome()
    }

    /// Access the wrapped app for assertions.
    pub fn app(&self) -> &SheetApp<TestBackend> {
        &self.app
    }

    /// Render current state to string
    pub fn render_to_string(&mut self) -> Result<String, TuiError> {
        self.app.turn()?;
        Ok(buffer_to_string(self.app.terminal().backend().buffer()))
    }
}

#[cfg(test)]
mod acceptance {
    use super::*;
    use crate::model::{ButtonRole, Revision, SheetButton, SheetCategory, StopPolicy};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn lines(n: usize) -> String {
        (1..=n)
            .map(|i| format!("row {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn short_sheet_rests_compact_after_one_refresh() {
        let mut harness = SheetHarness::new(SheetConfig::new("Saved"), 60, 40).unwrap();

        assert_eq!(harness.settle().unwrap(), 2);
        assert_eq!(harness.active_stop(), Some(Stop::Compact));
        assert_eq!(harness.app().host().revision(), Some(Revision::initial().next()));
        assert_eq!(harness.app().host().relayout_count(), 1);
    }

    #[test]
    fn sheet_occupies_the_bottom_of_the_screen() {
        let sheet = SheetConfig::new("Saved").body("Your changes are stored.");
        let mut harness = SheetHarness::new(sheet, 60, 40).unwrap();
        harness.settle().unwrap();

        let screen = harness.render_to_string().unwrap();
        let rows: Vec<&str> = screen.lines().collect();

        // Compact is 30% of 40 rows: 12 rows at the bottom
        assert!(rows[..28].iter().all(|row| row.is_empty()), "\n{screen}");
        assert!(rows[28].starts_with('╭'), "\n{screen}");
        assert!(rows[39].starts_with('╰'), "\n{screen}");
        assert!(screen.contains("Saved"));
        assert!(screen.contains("Your changes are stored."));
    }

    #[test]
    fn tall_content_gets_a_sheet_of_its_own_height() {
        // 5 header + 20 body + 1 = 26 of 40: between 0.60 and 0.80
        let sheet = SheetConfig::new("Changelog").body(lines(20));
        let mut harness = SheetHarness::new(sheet, 60, 40).unwrap();
        harness.settle().unwrap();

        assert_eq!(harness.active_stop(), Some(Stop::Tall(26.0)));
        let layout = harness.app().last_layout().unwrap();
        assert_eq!(layout.sheet.height, 26);
        assert_eq!(layout.max_body_scroll(), 0, "content fits exactly");
    }

    #[test]
    fn body_growth_walks_up_the_stops() {
        let mut harness = SheetHarness::new(SheetConfig::new("Log"), 60, 100).unwrap();
        let mut seen = Vec::new();

        // header 5 + body + 1
        for body_rows in [10, 40, 64, 90] {
            harness.set_body(lines(body_rows));
            harness.settle().unwrap();
            seen.push(harness.active_stop().map(|s| s.to_string()).unwrap_or_default());
        }

        assert_eq!(seen, ["compact", "medium", "tall(70)", "large"]);
    }

    #[test]
    fn shrinking_the_terminal_moves_to_a_larger_stop() {
        let sheet = SheetConfig::new("Notice").body(lines(8));
        let mut harness = SheetHarness::new(sheet, 60, 60).unwrap();
        harness.settle().unwrap();
        assert_eq!(harness.active_stop(), Some(Stop::Compact));

        // 14 rows of content on 20 rows is 0.70
        harness.resize(60, 20);
        harness.settle().unwrap();
        assert_eq!(harness.active_stop(), Some(Stop::Tall(14.0)));
    }

    #[test]
    fn include_medium_offers_medium_alongside_the_fit() {
        let sheet = SheetConfig::new("Pick").stop_policy(StopPolicy::IncludeMedium);
        let mut harness = SheetHarness::new(sheet, 60, 40).unwrap();
        harness.settle().unwrap();

        let allowed = harness.app().host().allowed_stops();
        assert!(allowed.contains(Stop::Medium));
        assert!(allowed.contains(Stop::Compact));
        assert_eq!(harness.active_stop(), Some(Stop::Compact));

        harness.send_key(KeyCode::Char('+'));
        assert_eq!(harness.active_stop(), Some(Stop::Medium));
    }

    #[test]
    fn max_detent_fraction_clamps_tall_and_large() {
        let sheet = SheetConfig::new("Changelog").body(lines(20));
        let options = ViewOptions::new(0.5, ColorConfig::disabled());
        let mut harness = SheetHarness::with_options(sheet, 60, 40, options).unwrap();
        harness.settle().unwrap();

        // 26 rows of content, but the host allows at most 20
        assert_eq!(harness.active_stop(), Some(Stop::Tall(20.0)));
        assert_eq!(harness.app().last_layout().unwrap().sheet.height, 20);
    }

    #[test]
    fn choosing_a_button_runs_its_action() {
        let chosen = Rc::new(RefCell::new(Vec::new()));
        let keep = Rc::clone(&chosen);
        let discard = Rc::clone(&chosen);
        let sheet = SheetConfig::new("Unsaved changes")
            .category(SheetCategory::Confirm)
            .button(SheetButton::new("Save", ButtonRole::Primary, move || {
                keep.borrow_mut().push("save")
            }))
            .button(SheetButton::new("Discard", ButtonRole::Destructive, move || {
                discard.borrow_mut().push("discard")
            }));
        let mut harness = SheetHarness::new(sheet, 60, 30).unwrap();
        harness.settle().unwrap();

        harness.send_keys(&[KeyCode::Tab, KeyCode::Enter, KeyCode::Enter]);

        assert_eq!(harness.outcome(), SheetOutcome::Activated(1));
        assert_eq!(*chosen.borrow(), ["discard"]);
    }

    #[test]
    fn focused_button_is_marked_on_screen() {
        let sheet = SheetConfig::new("Proceed?")
            .button(SheetButton::inert("Yes", ButtonRole::Primary))
            .button(SheetButton::inert("No", ButtonRole::Cancel));
        let mut harness = SheetHarness::new(sheet, 60, 30).unwrap();
        harness.settle().unwrap();

        harness.send_key(KeyCode::Down);
        harness.send_key(KeyCode::Tab);
        let screen = harness.render_to_string().unwrap();

        assert!(screen.contains("▸ No ◂"), "\n{screen}");
        assert!(!screen.contains("▸ Yes ◂"));
    }

    #[test]
    fn ctrl_c_interrupts() {
        let mut harness = SheetHarness::new(SheetConfig::new("Busy"), 60, 30).unwrap();
        harness.settle().unwrap();

        assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(harness.outcome(), SheetOutcome::Interrupted);
    }
}
