//! Independently measured layout regions of a sheet.

use std::fmt;

/// One of the three areas that make up a sheet, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Grabber, category icon and title.
    Header,
    /// Scrollable body content.
    Body,
    /// Action buttons.
    ButtonRow,
}

impl Region {
    /// All regions in layout order.
    pub const ALL: [Region; 3] = [Region::Header, Region::Body, Region::ButtonRow];

    /// Lowercase name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Region::Header => "header",
            Region::Body => "body",
            Region::ButtonRow => "button_row",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
