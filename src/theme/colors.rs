//! The four-color custom theme bundle.

use serde::{Deserialize, Serialize};

/// A custom color bundle: three hex colors plus a background expression.
///
/// `primary`, `secondary` and `accent` are CSS-style hex literals;
/// `background` is a full gradient expression handed through to the
/// presentation layer unparsed.
///
/// Values are immutable: every edit produces a new bundle, so a bundle
/// handed out by the engine never changes underneath its holder.
///
/// # Example
///
/// ```rust
/// use themeset::RgbTheme;
///
/// let base = RgbTheme::starting_colors();
/// let edited = base.clone().with_primary("#10b981");
///
/// assert_ne!(base.primary, edited.primary);
/// assert_eq!(base.secondary, edited.secondary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbTheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
}

impl RgbTheme {
    /// Creates a bundle from its four parts.
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        accent: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            accent: accent.into(),
            background: background.into(),
        }
    }

    /// The stock colors a customizer seeds its picker with before the user
    /// has saved anything.
    pub fn starting_colors() -> Self {
        Self::new(
            "#3b82f6",
            "#8b5cf6",
            "#ec4899",
            "linear-gradient(135deg, #667eea 0%, #764ba2 50%, #f093fb 100%)",
        )
    }

    /// Returns a new bundle with the primary color replaced.
    pub fn with_primary(self, primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            ..self
        }
    }

    /// Returns a new bundle with the secondary color replaced.
    pub fn with_secondary(self, secondary: impl Into<String>) -> Self {
        Self {
            secondary: secondary.into(),
            ..self
        }
    }

    /// Returns a new bundle with the accent color replaced.
    pub fn with_accent(self, accent: impl Into<String>) -> Self {
        Self {
            accent: accent.into(),
            ..self
        }
    }

    /// Returns a new bundle with the background expression replaced.
    pub fn with_background(self, background: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            ..self
        }
    }

    /// Builds the three-stop preview gradient a customizer shows while the
    /// bundle is being edited.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themeset::RgbTheme;
    ///
    /// let colors = RgbTheme::new("#111111", "#222222", "#333333", "none");
    /// assert_eq!(
    ///     colors.preview_gradient(),
    ///     "linear-gradient(135deg, #111111 0%, #222222 50%, #333333 100%)"
    /// );
    /// ```
    pub fn preview_gradient(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 50%, {} 100%)",
            self.primary, self.secondary, self.accent
        )
    }
}
