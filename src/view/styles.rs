//! Sheet styling configuration.
//!
//! Button colors follow their role, the category icon is tinted by whether
//! the category is an alert.

use crate::model::{ButtonRole, SheetCategory};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors forced on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors forced off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== SheetStyles =====

/// Styles for every part of the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetStyles {
    colors: ColorConfig,
}

impl SheetStyles {
    /// Styles honouring `colors`.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    /// Title text.
    pub fn title(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Grabber, dividers, hints.
    pub fn muted(&self) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }

    /// Sheet border.
    pub fn border(&self) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(Color::Gray)
        } else {
            Style::default()
        }
    }

    /// Category icon tint: red for alerts, gray otherwise.
    pub fn icon(&self, category: SheetCategory) -> Style {
        if !self.colors.colors_enabled() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        let color = if category.is_alert() {
            Color::Red
        } else {
            Color::Gray
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Button background for `role`.
    pub fn button_background(&self, role: ButtonRole) -> Option<Color> {
        if !self.colors.colors_enabled() {
            return None;
        }
        Some(match role {
            ButtonRole::Primary | ButtonRole::Default => Color::LightBlue,
            ButtonRole::Destructive => Color::Red,
            ButtonRole::Cancel => Color::Gray,
        })
    }

    /// Button label color for `role`: white on default buttons, black otherwise.
    pub fn button_foreground(&self, role: ButtonRole) -> Option<Color> {
        if !self.colors.colors_enabled() {
            return None;
        }
        Some(match role {
            ButtonRole::Default => Color::White,
            _ => Color::Black,
        })
    }

    /// Full button style.
    pub fn button(&self, role: ButtonRole, focused: bool) -> Style {
        let mut style = Style::default();
        if let Some(bg) = self.button_background(role) {
            style = style.bg(bg);
        }
        if let Some(fg) = self.button_foreground(role) {
            style = style.fg(fg);
        }
        if focused {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        style
    }
}

impl Default for SheetStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
