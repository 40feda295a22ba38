//! Region measurement for the terminal layout.
//!
//! Heights are in terminal rows. Each region includes the sheet chrome that
//! sits inside it: the header owns the top border and the divider under the
//! title, the button row owns the bottom border.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::{Region, SheetConfig};

/// Measured rows per region for one sheet width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SheetMeasurement {
    /// Top border, grabber, icon, title and divider.
    pub header: u16,
    /// Wrapped body lines.
    pub body: u16,
    /// Divider, one row per button, bottom border.
    pub button_row: u16,
}

impl SheetMeasurement {
    /// Sum of all regions.
    pub fn total(&self) -> u16 {
        self.header
            .saturating_add(self.body)
            .saturating_add(self.button_row)
    }

    /// Rows measured for `region`.
    pub fn rows(&self, region: Region) -> u16 {
        match region {
            Region::Header => self.header,
            Region::Body => self.body,
            Region::ButtonRow => self.button_row,
        }
    }
}

/// Width left for content inside the side borders.
pub fn inner_width(sheet_width: u16) -> u16 {
    sheet_width.saturating_sub(2)
}

/// Rows of header content between the top border and the divider.
pub fn header_content_rows(sheet: &SheetConfig, inner_width: u16) -> u16 {
    let grabber = u16::from(sheet.grabber_visible());
    let icon = u16::from(sheet.sheet_category().glyph().is_some());
    let title = wrapped_rows(sheet.title_text(), inner_width);
    grabber + icon + title
}

/// Rows of button-row content above the bottom border.
pub fn button_content_rows(sheet: &SheetConfig) -> u16 {
    match sheet.buttons().len() {
        0 => 0,
        // Divider plus one row per button
        n => u16::try_from(n).unwrap_or(u16::MAX).saturating_add(1),
    }
}

/// Measure every region of `sheet` laid out `sheet_width` columns wide.
pub fn measure_sheet(sheet: &SheetConfig, sheet_width: u16) -> SheetMeasurement {
    let inner = inner_width(sheet_width);
    SheetMeasurement {
        // Top border and the divider under the title
        header: header_content_rows(sheet, inner).saturating_add(2),
        body: wrapped_rows(sheet.body_text(), inner),
        // Bottom border
        button_row: button_content_rows(sheet).saturating_add(1),
    }
}

fn wrapped_rows(text: &str, width: u16) -> u16 {
    u16::try_from(wrap_text(text, width).len()).unwrap_or(u16::MAX)
}

/// Greedy word wrap by display width.
///
/// Explicit newlines start new lines, blank lines are kept, and words wider
/// than `width` are split at character boundaries. A zero width yields no
/// lines.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width);
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width > width {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width > 0 && current_width + ch_width > width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
                continue;
            }

            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        lines.push(current);
    }

    lines
}
