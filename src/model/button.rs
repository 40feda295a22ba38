//! Action buttons shown in a sheet's button row.

use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

/// Emphasis role of a button. Drives its colors only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    /// The recommended action.
    Primary,
    /// An action that destroys data.
    Destructive,
    /// Backs out without acting.
    Cancel,
    /// Any other action.
    #[default]
    Default,
}

impl ButtonRole {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ButtonRole::Primary => "primary",
            ButtonRole::Destructive => "destructive",
            ButtonRole::Cancel => "cancel",
            ButtonRole::Default => "default",
        }
    }
}

impl fmt::Display for ButtonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ButtonRole {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(ButtonRole::Primary),
            "destructive" => Ok(ButtonRole::Destructive),
            "cancel" => Ok(ButtonRole::Cancel),
            "default" => Ok(ButtonRole::Default),
            _ => Err(ParseError::UnknownRole(s.to_string())),
        }
    }
}

/// Callback run when a button is activated.
pub type ButtonAction = Box<dyn FnMut()>;

/// A labelled action in the button row.
pub struct SheetButton {
    title: String,
    role: ButtonRole,
    action: ButtonAction,
}

impl SheetButton {
    /// Create a button.
    pub fn new(title: impl Into<String>, role: ButtonRole, action: impl FnMut() + 'static) -> Self {
        Self {
            title: title.into(),
            role,
            action: Box::new(action),
        }
    }

    /// Create a button whose action does nothing.
    pub fn inert(title: impl Into<String>, role: ButtonRole) -> Self {
        Self::new(title, role, || {})
    }

    /// Button label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Button role.
    pub fn role(&self) -> ButtonRole {
        self.role
    }

    /// Run the button's action.
    pub fn activate(&mut self) {
        (self.action)();
    }
}

impl fmt::Debug for SheetButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetButton")
            .field("title", &self.title)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Command-line description of a button: `LABEL` or `LABEL:role`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    /// Label text.
    pub title: String,
    /// Role, `Default` when omitted.
    pub role: ButtonRole,
}

impl ButtonSpec {
    /// Attach `action` to this label and role.
    pub fn into_button(self, action: impl FnMut() + 'static) -> SheetButton {
        SheetButton::new(self.title, self.role, action)
    }
}

impl FromStr for ButtonSpec {
    type Err = ParseError;

    /// The role is taken from the text after the last `:` only when it names
    /// a role, so labels such as `Time: 10:30` survive intact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (title, role) = match s.rsplit_once(':') {
            Some((title, role)) => match role.parse::<ButtonRole>() {
                Ok(role) => (title, role),
                Err(_) => (s, ButtonRole::Default),
            },
            None => (s, ButtonRole::Default),
        };

        let title = title.trim();
        if title.is_empty() {
            return Err(ParseError::InvalidButtonSpec(s.to_string()));
        }

        Ok(Self {
            title: title.to_string(),
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn activate_runs_action() {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let mut button = SheetButton::new("OK", ButtonRole::Primary, move || {
            seen.set(seen.get() + 1)
        });

        button.activate();
        button.activate();

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Destructive".parse(), Ok(ButtonRole::Destructive));
        assert!("loud".parse::<ButtonRole>().is_err());
    }

    #[test]
    fn spec_without_role_uses_default() {
        let spec: ButtonSpec = "Continue".parse().unwrap();
        assert_eq!(spec.title, "Continue");
        assert_eq!(spec.role, ButtonRole::Default);
    }

    #[test]
    fn spec_with_role_suffix() {
        let spec: ButtonSpec = "Delete:destructive".parse().unwrap();
        assert_eq!(spec.title, "Delete");
        assert_eq!(spec.role, ButtonRole::Destructive);
    }

    #[test]
    fn spec_keeps_colons_that_are_not_roles() {
        let spec: ButtonSpec = "Snooze until 10:30".parse().unwrap();
        assert_eq!(spec.title, "Snooze until 10:30");
        assert_eq!(spec.role, ButtonRole::Default);
    }

    #[test]
    fn spec_rejects_empty_label() {
        assert_eq!(
            ":primary".parse::<ButtonSpec>(),
            Err(ParseError::InvalidButtonSpec(":primary".to_string()))
        );
    }

    #[test]
    fn debug_omits_action() {
        let button = SheetButton::inert("Later", ButtonRole::Cancel);
        let debug = format!("{button:?}");
        assert!(debug.contains("Later"));
        assert!(debug.contains("Cancel"));
    }
}
