//! Interaction state of an open sheet.

/// How a sheet ended, or that it has not ended yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SheetOutcome {
    /// Still open.
    #[default]
    Pending,
    /// The button at this index was activated.
    Activated(usize),
    /// Dismissed without choosing a button.
    Dismissed,
    /// Aborted with Ctrl+C.
    Interrupted,
}

impl SheetOutcome {
    /// Whether the sheet has finished.
    pub fn is_final(self) -> bool {
        self != SheetOutcome::Pending
    }
}

/// State for the sheet overlay.
///
/// # Cardinality
/// - Closed: outcome records why
/// - Open: one state per (focused button, body scroll offset)
#[derive(Debug, Clone, Default)]
pub struct SheetState {
    /// Whether the sheet is on screen.
    visible: bool,

    /// Focused button (0-indexed). Meaningless when there are no buttons.
    focused: usize,

    /// First body row shown.
    body_scroll: u16,

    outcome: SheetOutcome,
}

impl SheetState {
    /// Create closed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the sheet is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Open the sheet with the first button focused and the body at the top.
    pub fn open(&mut self) {
        self.visible = true;
        self.focused = 0;
        self.body_scroll = 0;
        self.outcome = SheetOutcome::Pending;
    }

    /// Hide the sheet, keeping its outcome.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Focused button index.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Focus the next button, clamping at the last.
    pub fn focus_next(&mut self, button_count: usize) {
        if button_count > 0 {
            self.focused = (self.focused + 1).min(button_count - 1);
        }
    }

    /// Focus the button at `index`, clamping to the last one.
    pub fn focus(&mut self, index: usize, button_count: usize) {
        self.focused = index.min(button_count.saturating_sub(1));
    }

    /// Focus the previous button, clamping at 0.
    pub fn focus_prev(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    /// Body scroll offset.
    pub fn body_scroll(&self) -> u16 {
        self.body_scroll
    }

    /// Scroll the body up by `rows`.
    pub fn scroll_body_up(&mut self, rows: u16) {
        self.body_scroll = self.body_scroll.saturating_sub(rows);
    }

    /// Scroll the body down by `rows`, never past `max_scroll`.
    pub fn scroll_body_down(&mut self, rows: u16, max_scroll: u16) {
        self.body_scroll = self.body_scroll.saturating_add(rows).min(max_scroll);
    }

    /// Re-clamp the scroll offset after the viewport or content changed.
    pub fn clamp_body_scroll(&mut self, max_scroll: u16) {
        self.body_scroll = self.body_scroll.min(max_scroll);
    }

    /// Record activation of the focused button.
    ///
    /// Does nothing when there are no buttons.
    pub fn activate(&mut self, button_count: usize) {
        if self.focused < button_count {
            self.outcome = SheetOutcome::Activated(self.focused);
        }
    }

    /// Record an interactive dismiss.
    pub fn dismiss(&mut self) {
        self.outcome = SheetOutcome::Dismissed;
    }

    /// Record a Ctrl+C abort.
    pub fn interrupt(&mut self) {
        self.outcome = SheetOutcome::Interrupted;
    }

    /// How the sheet ended so far.
    pub fn outcome(&self) -> SheetOutcome {
        self.outcome
    }
}
