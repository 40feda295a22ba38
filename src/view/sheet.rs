//! Bottom sheet rendering.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use super::constants::GRABBER_WIDTH;
use super::host::TerminalHost;
use super::measure::{button_content_rows, header_content_rows, wrap_text};
use super::styles::SheetStyles;
use crate::model::SheetConfig;
use crate::state::SheetState;

/// Where the last sheet landed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// Whole sheet, borders included.
    pub sheet: Rect,
    /// Body viewport.
    pub body: Rect,
    /// Wrapped body lines, visible or not.
    pub body_lines: u16,
}

impl SheetLayout {
    /// Largest useful body scroll offset.
    pub fn max_body_scroll(&self) -> u16 {
        self.body_lines.saturating_sub(self.body.height)
    }
}

/// Render the sheet anchored to the bottom of the frame.
///
/// Displays, top to bottom:
/// - Grabber bar (when enabled)
/// - Category icon (tinted) and wrapped title
/// - Scrollable body with ▲/▼ overflow markers
/// - One row per button, role-colored, focused button highlighted
/// - Key hints in the bottom border
///
/// The height comes from the host's active stop. Nothing is drawn while the
/// sheet is closed or before the host has received its first stop set.
pub fn render_sheet(
    frame: &mut Frame,
    sheet: &SheetConfig,
    state: &SheetState,
    host: &mut TerminalHost,
    styles: SheetStyles,
) -> Option<SheetLayout> {
    if !state.is_visible() {
        return None;
    }

    let area = frame.area();
    let height = host.sheet_height(area.height);
    if height == 0 || area.width < 3 {
        return None;
    }

    // Dim whatever the sheet is covering
    frame
        .buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));

    let sheet_area = Rect {
        x: area.x,
        y: area.y + area.height - height,
        width: area.width,
        height,
    };
    frame.render_widget(Clear, sheet_area);

    let border_type = if sheet.radius() > 0 {
        BorderType::Rounded
    } else {
        BorderType::Plain
    };
    let block = Block::bordered()
        .border_type(border_type)
        .border_style(styles.border())
        .title_bottom(hint_line(sheet, styles).centered());
    let inner = block.inner(sheet_area);
    frame.render_widget(block, sheet_area);

    // Divider under the title belongs to the header
    let header_rows = header_content_rows(sheet, inner.width).saturating_add(1);
    let button_rows = button_content_rows(sheet);
    let [header_area, body_area, button_area] = Layout::vertical([
        Constraint::Length(header_rows),
        Constraint::Min(0),
        Constraint::Length(button_rows),
    ])
    .areas(inner);

    render_header(frame, sheet, styles, header_area);
    let body_lines = render_body(frame, sheet, state, host, styles, body_area);
    render_buttons(frame, sheet, state, styles, button_area);

    Some(SheetLayout {
        sheet: sheet_area,
        body: body_area,
        body_lines,
    })
}

fn render_header(frame: &mut Frame, sheet: &SheetConfig, styles: SheetStyles, area: Rect) {
    let mut lines = Vec::new();

    if sheet.grabber_visible() {
        lines.push(Line::styled("━".repeat(usize::from(GRABBER_WIDTH)), styles.muted()).centered());
    }

    let category = sheet.sheet_category();
    if let Some(glyph) = category.glyph() {
        lines.push(Line::styled(glyph, styles.icon(category)).centered());
    }

    for row in wrap_text(sheet.title_text(), area.width) {
        lines.push(Line::styled(row, styles.title()).centered());
    }

    lines.push(divider(area.width, styles));

    frame.render_widget(Paragraph::new(lines), area);
}

/// Returns the number of wrapped body lines.
fn render_body(
    frame: &mut Frame,
    sheet: &SheetConfig,
    state: &SheetState,
    host: &mut TerminalHost,
    styles: SheetStyles,
    area: Rect,
) -> u16 {
    let wrapped = host.body_lines(sheet.body_text(), area.width);
    let total = u16::try_from(wrapped.len()).unwrap_or(u16::MAX);
    if area.height == 0 {
        return total;
    }

    let lines: Vec<Line> = wrapped.iter().map(|row| Line::raw(row.as_str())).collect();
    let scroll = state.body_scroll();
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);

    // Overflow markers in the last column
    let marker_x = area.right().saturating_sub(1);
    if scroll > 0 {
        frame
            .buffer_mut()
            .set_string(marker_x, area.top(), "▲", styles.muted());
    }
    if scroll.saturating_add(area.height) < total {
        frame
            .buffer_mut()
            .set_string(marker_x, area.bottom() - 1, "▼", styles.muted());
    }

    total
}

fn render_buttons(
    frame: &mut Frame,
    sheet: &SheetConfig,
    state: &SheetState,
    styles: SheetStyles,
    area: Rect,
) {
    if area.height == 0 || sheet.buttons().is_empty() {
        return;
    }

    frame.render_widget(
        Paragraph::new(divider(area.width, styles)),
        Rect { height: 1, ..area },
    );

    for (i, button) in sheet.buttons().iter().enumerate() {
        let Ok(offset) = u16::try_from(i + 1) else {
            break;
        };
        if offset >= area.height {
            break;
        }

        let focused = i == state.focused();
        let label = if focused {
            format!("▸ {} ◂", button.title())
        } else {
            button.title().to_string()
        };

        let row = Rect {
            y: area.y + offset,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(Line::raw(label).centered()).style(styles.button(button.role(), focused)),
            row,
        );
    }
}

fn divider(width: u16, styles: SheetStyles) -> Line<'static> {
    Line::styled("─".repeat(usize::from(width)), styles.muted())
}

fn hint_line(sheet: &SheetConfig, styles: SheetStyles) -> Line<'static> {
    let mut hints = Vec::new();
    if !sheet.buttons().is_empty() {
        hints.push("Tab: Next");
        hints.push("Enter: Select");
    }
    if sheet.is_interactive_dismiss_enabled() {
        hints.push("Esc: Close");
    }

    if hints.is_empty() {
        return Line::default();
    }

    Line::styled(format!(" {} ", hints.join("  ")), styles.muted())
}

#[cfg(test)]
#[path = "sheet_tests.rs"]
mod tests;
