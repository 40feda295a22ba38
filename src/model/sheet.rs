//! Everything a sheet is built from.

use std::fmt;

use super::button::SheetButton;
use super::category::SheetCategory;
use super::stop::StopPolicy;

/// Corner radius used when none is given.
pub const DEFAULT_CORNER_RADIUS: u16 = 20;

/// Callback run after the user dismisses a sheet.
pub type DismissAction = Box<dyn FnMut()>;

/// Construction-time description of a bottom sheet.
///
/// Built with chained setters:
///
/// ```
/// use sheetline::model::{ButtonRole, SheetButton, SheetCategory, SheetConfig};
///
/// let sheet = SheetConfig::new("Warning")
///     .category(SheetCategory::Error)
///     .body("Are you sure you want to proceed?")
///     .button(SheetButton::inert("CONFIRM", ButtonRole::Primary))
///     .button(SheetButton::inert("Cancel", ButtonRole::Cancel));
///
/// assert_eq!(sheet.buttons().len(), 2);
/// ```
pub struct SheetConfig {
    title: String,
    category: SheetCategory,
    body: String,
    buttons: Vec<SheetButton>,
    prefers_grabber_visible: bool,
    interactive_dismiss: bool,
    corner_radius: u16,
    stop_policy: StopPolicy,
    on_dismiss: Option<DismissAction>,
}

impl SheetConfig {
    /// Create a sheet with the given title and default settings.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: SheetCategory::default(),
            body: String::new(),
            buttons: Vec::new(),
            prefers_grabber_visible: true,
            interactive_dismiss: true,
            corner_radius: DEFAULT_CORNER_RADIUS,
            stop_policy: StopPolicy::default(),
            on_dismiss: None,
        }
    }

    /// Set the category.
    pub fn category(mut self, category: SheetCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the body text.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Append a button to the button row.
    pub fn button(mut self, button: SheetButton) -> Self {
        self.buttons.push(button);
        self
    }

    /// Show or hide the grabber above the title.
    pub fn prefers_grabber_visible(mut self, visible: bool) -> Self {
        self.prefers_grabber_visible = visible;
        self
    }

    /// Allow or forbid dismissing the sheet without picking a button.
    pub fn interactive_dismiss(mut self, enabled: bool) -> Self {
        self.interactive_dismiss = enabled;
        self
    }

    /// Set the corner radius. Zero draws square corners.
    pub fn corner_radius(mut self, radius: u16) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Choose which stops are reported alongside the selected one.
    pub fn stop_policy(mut self, policy: StopPolicy) -> Self {
        self.stop_policy = policy;
        self
    }

    /// Run `action` after an interactive dismiss.
    pub fn on_dismiss(mut self, action: impl FnMut() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(action));
        self
    }

    /// Replace the body text in place.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Title text.
    pub fn title_text(&self) -> &str {
        &self.title
    }

    /// Category.
    pub fn sheet_category(&self) -> SheetCategory {
        self.category
    }

    /// Body text.
    pub fn body_text(&self) -> &str {
        &self.body
    }

    /// Buttons in display order.
    pub fn buttons(&self) -> &[SheetButton] {
        &self.buttons
    }

    /// Whether the grabber is drawn.
    pub fn grabber_visible(&self) -> bool {
        self.prefers_grabber_visible
    }

    /// Whether the sheet can be dismissed without a button.
    pub fn is_interactive_dismiss_enabled(&self) -> bool {
        self.interactive_dismiss
    }

    /// Corner radius.
    pub fn radius(&self) -> u16 {
        self.corner_radius
    }

    /// Stop policy.
    pub fn policy(&self) -> StopPolicy {
        self.stop_policy
    }

    /// Run the action of the button at `index`.
    ///
    /// Returns the button's label, or `None` if there is no such button.
    pub fn activate(&mut self, index: usize) -> Option<&str> {
        let button = self.buttons.get_mut(index)?;
        button.activate();
        Some(button.title())
    }

    /// Run the dismiss callback, if one is set.
    pub fn fire_dismiss(&mut self) {
        if let Some(action) = self.on_dismiss.as_mut() {
            action();
        }
    }
}

impl fmt::Debug for SheetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetConfig")
            .field("title", &self.title)
            .field("category", &self.category)
            .field("body_len", &self.body.len())
            .field("buttons", &self.buttons)
            .field("prefers_grabber_visible", &self.prefers_grabber_visible)
            .field("interactive_dismiss", &self.interactive_dismiss)
            .field("corner_radius", &self.corner_radius)
            .field("stop_policy", &self.stop_policy)
            .field("has_on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}
