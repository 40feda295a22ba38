//! Sheet categories.
//!
//! A category picks the icon shown above the title and its tint. It never
//! influences sizing except through the height of the header it produces.

use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

/// What kind of message a sheet carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SheetCategory {
    /// General information.
    #[default]
    Info,
    /// Something went wrong.
    Error,
    /// Asks the user to confirm.
    Confirm,
    /// Help text.
    Help,
    /// Something succeeded.
    Success,
    /// Location topic.
    Location,
    /// Calendar topic.
    Calendar,
    /// Phone call topic.
    Call,
    /// Phone alert topic.
    PhoneAlert,
    /// Attachment topic.
    Attachment,
    /// Reminder topic.
    Reminder,
    /// No icon.
    None,
}

impl SheetCategory {
    /// Every category, in declaration order.
    pub const ALL: [SheetCategory; 12] = [
        SheetCategory::Info,
        SheetCategory::Error,
        SheetCategory::Confirm,
        SheetCategory::Help,
        SheetCategory::Success,
        SheetCategory::Location,
        SheetCategory::Calendar,
        SheetCategory::Call,
        SheetCategory::PhoneAlert,
        SheetCategory::Attachment,
        SheetCategory::Reminder,
        SheetCategory::None,
    ];

    /// Icon glyph, or `None` for [`SheetCategory::None`].
    ///
    /// Info shares the confirm icon.
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            SheetCategory::Info | SheetCategory::Confirm => Some("✔"),
            SheetCategory::Error => Some("✖"),
            SheetCategory::Help => Some("?"),
            SheetCategory::Success => Some("✓"),
            SheetCategory::Location => Some("⌖"),
            SheetCategory::Calendar => Some("▦"),
            SheetCategory::Call => Some("☎"),
            SheetCategory::PhoneAlert => Some("☏"),
            SheetCategory::Attachment => Some("⎘"),
            SheetCategory::Reminder => Some("◷"),
            SheetCategory::None => None,
        }
    }

    /// Whether the icon uses the alert tint instead of the neutral one.
    pub fn is_alert(self) -> bool {
        self == SheetCategory::Error
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            SheetCategory::Info => "info",
            SheetCategory::Error => "error",
            SheetCategory::Confirm => "confirm",
            SheetCategory::Help => "help",
            SheetCategory::Success => "success",
            SheetCategory::Location => "location",
            SheetCategory::Calendar => "calendar",
            SheetCategory::Call => "call",
            SheetCategory::PhoneAlert => "phone-alert",
            SheetCategory::Attachment => "attachment",
            SheetCategory::Reminder => "reminder",
            SheetCategory::None => "none",
        }
    }
}

impl fmt::Display for SheetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SheetCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        SheetCategory::ALL
            .into_iter()
            .find(|category| category.name() == normalized)
            .ok_or(ParseError::UnknownCategory(s.to_string()))
    }
}
