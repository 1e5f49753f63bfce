//! Light/dark appearance toggle
//!
//! The host applies the mode by adding [`ThemeMode::root_class`] to the
//! editor's root element; colors themselves live in the host's stylesheet.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Editor appearance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Class to set on the root element, if any
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            ThemeMode::Light => None,
            ThemeMode::Dark => Some("dark"),
        }
    }

    /// Accessible label for the toggle button
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Switch to dark mode",
            ThemeMode::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut mode = ThemeMode::default();
        assert_eq!(mode, ThemeMode::Light);

        mode.toggle();
        assert!(mode.is_dark());
        assert_eq!(mode.root_class(), Some("dark"));

        mode.toggle();
        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(mode.root_class(), None);
    }

    #[test]
    fn test_yaml_names() {
        assert_eq!(serde_yaml::to_string(&ThemeMode::Dark).unwrap().trim(), "dark");
        let mode: ThemeMode = serde_yaml::from_str("light").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
