//! The three mutually exclusive presentation modes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The active presentation mode. Exactly one is in effect at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    Custom,
}

/// Error parsing a persisted mode token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized theme mode '{0}'")]
pub struct ParseThemeModeError(pub String);

impl ThemeMode {
    /// All modes, in declaration order.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Custom];

    /// The token this mode persists as, and the class token the
    /// presentation binding applies.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Custom => "custom",
        }
    }

    /// Returns the next mode in the toggle cycle.
    ///
    /// The cycle is deliberately asymmetric: Dark goes to Light, Light goes
    /// to Custom only when a custom theme already exists (otherwise back to
    /// Dark), and Custom goes to Dark. Custom is therefore never reachable
    /// by toggling alone; only
    /// [`ThemeEngine::set_custom_theme`](crate::ThemeEngine::set_custom_theme)
    /// can enter it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themeset::ThemeMode;
    ///
    /// assert_eq!(ThemeMode::Dark.toggled(false), ThemeMode::Light);
    /// assert_eq!(ThemeMode::Light.toggled(false), ThemeMode::Dark);
    /// assert_eq!(ThemeMode::Light.toggled(true), ThemeMode::Custom);
    /// assert_eq!(ThemeMode::Custom.toggled(true), ThemeMode::Dark);
    /// ```
    pub fn toggled(self, has_custom: bool) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light if has_custom => ThemeMode::Custom,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Custom => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "custom" => Ok(ThemeMode::Custom),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}
