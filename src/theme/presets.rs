//! The built-in preset catalog.
//!
//! Presets are pre-canned custom themes, not a distinct mode: applying one
//! goes through the same path as applying hand-picked colors. The catalog
//! is fixed at startup and read-only.

use once_cell::sync::Lazy;

use super::colors::RgbTheme;
use super::engine::ThemeState;
use super::mode::ThemeMode;

/// A named, fixed color bundle shipped for one-click selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePreset {
    /// Unique display name.
    pub name: &'static str,
    /// The bundle [`ThemeEngine::apply_preset`](crate::ThemeEngine::apply_preset)
    /// installs.
    pub colors: RgbTheme,
    /// Swatch gradient shown in pickers.
    pub gradient: &'static str,
}

impl ThemePreset {
    /// Whether this preset is the one currently in effect.
    ///
    /// This is the picker's check-mark test: an approximate comparison on
    /// the primary color only, not structural equality of the whole bundle.
    pub fn is_active(&self, state: &ThemeState) -> bool {
        state.mode == ThemeMode::Custom
            && state
                .custom_theme
                .as_ref()
                .is_some_and(|colors| colors.primary == self.colors.primary)
    }
}

static PRESETS: Lazy<Vec<ThemePreset>> = Lazy::new(|| {
    vec![
        ThemePreset {
            name: "Ocean",
            colors: RgbTheme::new(
                "#0ea5e9",
                "#06b6d4",
                "#3b82f6",
                "linear-gradient(135deg, #0ea5e9 0%, #06b6d4 50%, #3b82f6 100%)",
            ),
            gradient: "linear-gradient(135deg, #0ea5e9 0%, #06b6d4 50%, #3b82f6 100%)",
        },
        ThemePreset {
            name: "Sunset",
            colors: RgbTheme::new(
                "#f59e0b",
                "#ef4444",
                "#ec4899",
                "linear-gradient(135deg, #f59e0b 0%, #ef4444 50%, #ec4899 100%)",
            ),
            gradient: "linear-gradient(135deg, #f59e0b 0%, #ef4444 50%, #ec4899 100%)",
        },
        ThemePreset {
            name: "Forest",
            colors: RgbTheme::new(
                "#10b981",
                "#14b8a6",
                "#22c55e",
                "linear-gradient(135deg, #10b981 0%, #14b8a6 50%, #22c55e 100%)",
            ),
            gradient: "linear-gradient(135deg, #10b981 0%, #14b8a6 50%, #22c55e 100%)",
        },
        ThemePreset {
            name: "Purple Dream",
            colors: RgbTheme::new(
                "#8b5cf6",
                "#a855f7",
                "#d946ef",
                "linear-gradient(135deg, #8b5cf6 0%, #a855f7 50%, #d946ef 100%)",
            ),
            gradient: "linear-gradient(135deg, #8b5cf6 0%, #a855f7 50%, #d946ef 100%)",
        },
        ThemePreset {
            name: "Midnight",
            colors: RgbTheme::new(
                "#6366f1",
                "#4f46e5",
                "#818cf8",
                "linear-gradient(135deg, #1e1b4b 0%, #312e81 50%, #4f46e5 100%)",
            ),
            gradient: "linear-gradient(135deg, #1e1b4b 0%, #312e81 50%, #4f46e5 100%)",
        },
        ThemePreset {
            name: "Cherry Blossom",
            colors: RgbTheme::new(
                "#ec4899",
                "#f472b6",
                "#db2777",
                "linear-gradient(135deg, #fce7f3 0%, #fbcfe8 50%, #f9a8d4 100%)",
            ),
            gradient: "linear-gradient(135deg, #fce7f3 0%, #fbcfe8 50%, #f9a8d4 100%)",
        },
    ]
});

/// The catalog, in shipping order.
pub fn theme_presets() -> &'static [ThemePreset] {
    &PRESETS
}

/// Looks up a preset by its display name.
pub fn find_preset(name: &str) -> Option<&'static ThemePreset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_six_entries() {
        assert_eq!(theme_presets().len(), 6);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = theme_presets().iter().map(|p| p.name).collect();
        assert_eq!(names.len(), theme_presets().len());
    }

    #[test]
    fn test_find_preset() {
        let ocean = find_preset("Ocean").unwrap();
        assert_eq!(ocean.colors.primary, "#0ea5e9");
        assert!(find_preset("Lagoon").is_none());
    }

    #[test]
    fn test_swatch_matches_background() {
        // Midnight and Cherry Blossom use a darker/paler swatch than their
        // accent colors would produce, so the swatch is stored, not derived.
        for preset in theme_presets() {
            assert_eq!(preset.gradient, preset.colors.background);
        }
    }

    #[test]
    fn test_is_active_compares_primary_only() {
        let ocean = find_preset("Ocean").unwrap();

        let inactive = ThemeState {
            mode: ThemeMode::Dark,
            custom_theme: Some(ocean.colors.clone()),
        };
        assert!(!ocean.is_active(&inactive));

        // Same primary, different accent: still counts as active.
        let close_enough = ThemeState {
            mode: ThemeMode::Custom,
            custom_theme: Some(ocean.colors.clone().with_accent("#000000")),
        };
        assert!(ocean.is_active(&close_enough));

        let active = ThemeState {
            mode: ThemeMode::Custom,
            custom_theme: Some(ocean.colors.clone()),
        };
        assert!(ocean.is_active(&active));
    }
}
