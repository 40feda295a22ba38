//! Keyboard handler for an open sheet.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::sheet::SheetState;

/// Facts about the rendered sheet the key handler needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetKeyContext {
    /// Number of buttons in the button row.
    pub button_count: usize,
    /// Whether Esc/q may close the sheet without a button.
    pub interactive_dismiss: bool,
    /// Largest useful body scroll offset.
    pub max_body_scroll: u16,
    /// Rows in the body viewport, for paging.
    pub body_rows: u16,
}

/// Handle keyboard input while the sheet is visible.
///
/// Returns `true` if the key was consumed, `false` otherwise.
///
/// # Key Bindings
/// - Tab/Right/l: Focus next button (clamps)
/// - Shift+Tab/Left/h: Focus previous button (clamps)
/// - Down/j, Up/k: Scroll body one row
/// - PageDown/Ctrl+d, PageUp/Ctrl+u: Scroll body one page
/// - Home/g, End/G: Jump to top/bottom of body
/// - Enter/Space: Activate focused button
/// - 1-9: Activate button N directly (if it exists)
/// - Esc/q: Dismiss, only when interactive dismiss is enabled
///
/// # Behavior
/// - Navigation clamps to bounds (does NOT wrap)
/// - Esc/q are consumed even when dismissing is disabled, so they never leak
///   to whatever is behind the sheet
/// - Returns false if the sheet is not visible
pub fn handle_sheet_key(state: &mut SheetState, key: KeyEvent, ctx: &SheetKeyContext) -> bool {
    if !state.is_visible() {
        return false;
    }

    let page = ctx.body_rows.max(1);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            if ctx.interactive_dismiss {
                state.dismiss();
            }
            true
        }

        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            state.focus_next(ctx.button_count);
            true
        }

        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            state.focus_prev();
            true
        }

        KeyCode::Char('d') if ctrl => {
            state.scroll_body_down(page, ctx.max_body_scroll);
            true
        }

        KeyCode::Char('u') if ctrl => {
            state.scroll_body_up(page);
            true
        }

        KeyCode::PageDown => {
            state.scroll_body_down(page, ctx.max_body_scroll);
            true
        }

        KeyCode::PageUp => {
            state.scroll_body_up(page);
            true
        }

        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_body_down(1, ctx.max_body_scroll);
            true
        }

        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_body_up(1);
            true
        }

        KeyCode::Home | KeyCode::Char('g') => {
            state.scroll_body_up(u16::MAX);
            true
        }

        KeyCode::End | KeyCode::Char('G') => {
            state.scroll_body_down(u16::MAX, ctx.max_body_scroll);
            true
        }

        KeyCode::Enter | KeyCode::Char(' ') => {
            state.activate(ctx.button_count);
            true
        }

        // Quick activate
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < ctx.button_count {
                state.focus(index, ctx.button_count);
                state.activate(ctx.button_count);
            }
            true
        }

        _ => false,
    }
}

#[cfg(test)]
#[path = "sheet_key_handler_tests.rs"]
mod tests;
