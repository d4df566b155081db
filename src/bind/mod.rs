//! Presentation binding: pushing derived theme state into observable
//! style scope.
//!
//! This module provides:
//!
//! - [`RootScope`]: The class-token + custom-property scope hosts read
//! - [`apply`]: The pure reaction that projects a state onto a scope
//! - [`TermPalette`]: The same cascade derived for terminal hosts
//!
//! The binding has no state of its own; it is a reaction function over
//! [`ThemeState`](crate::ThemeState), run by the engine on every change.

mod scope;
mod term;

pub use scope::RootScope;
pub use term::{palette_for, TermPalette};

use crate::theme::{ThemeMode, ThemeState};

// One inline custom property per RgbTheme field.

/// Property carrying the primary color.
pub const PROP_PRIMARY: &str = "--color-primary";
/// Property carrying the secondary color.
pub const PROP_SECONDARY: &str = "--color-secondary";
/// Property carrying the accent color.
pub const PROP_ACCENT: &str = "--color-accent";
/// Property carrying the background expression.
pub const PROP_BACKGROUND: &str = "--color-background";

/// Projects `state` onto `scope`.
///
/// Removes all three mode class tokens, adds the one matching the current
/// mode, and, when the mode is Custom, pushes the four color properties.
/// Properties pushed for an earlier custom theme are left in place when the
/// mode moves away; the cascade stops consuming them once the class token
/// changes.
///
/// # Example
///
/// ```rust
/// use themeset::{apply, RootScope, ThemeMode, ThemeState};
///
/// let mut scope = RootScope::new();
/// let state = ThemeState { mode: ThemeMode::Dark, custom_theme: None };
/// apply(&state, &mut scope);
///
/// assert!(scope.has_class("dark"));
/// assert!(!scope.has_class("light"));
/// ```
pub fn apply(state: &ThemeState, scope: &mut RootScope) {
    for mode in ThemeMode::ALL {
        scope.remove_class(mode.as_str());
    }
    scope.add_class(state.mode.as_str());

    if state.mode == ThemeMode::Custom {
        if let Some(colors) = &state.custom_theme {
            scope.set_property(PROP_PRIMARY, &colors.primary);
            scope.set_property(PROP_SECONDARY, &colors.secondary);
            scope.set_property(PROP_ACCENT, &colors.accent);
            scope.set_property(PROP_BACKGROUND, &colors.background);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{find_preset, RgbTheme};

    fn state(mode: ThemeMode, custom_theme: Option<RgbTheme>) -> ThemeState {
        ThemeState { mode, custom_theme }
    }

    #[test]
    fn test_exactly_one_mode_class() {
        let mut scope = RootScope::new();

        apply(&state(ThemeMode::Light, None), &mut scope);
        assert!(scope.has_class("light"));
        assert_eq!(scope.classes().count(), 1);

        apply(&state(ThemeMode::Dark, None), &mut scope);
        assert!(scope.has_class("dark"));
        assert!(!scope.has_class("light"));
        assert_eq!(scope.classes().count(), 1);
    }

    #[test]
    fn test_foreign_classes_untouched() {
        let mut scope = RootScope::new();
        scope.add_class("reduced-motion");

        apply(&state(ThemeMode::Dark, None), &mut scope);
        assert!(scope.has_class("reduced-motion"));
        assert!(scope.has_class("dark"));
    }

    #[test]
    fn test_custom_pushes_four_properties() {
        let ocean = find_preset("Ocean").unwrap();
        let mut scope = RootScope::new();

        apply(
            &state(ThemeMode::Custom, Some(ocean.colors.clone())),
            &mut scope,
        );

        assert!(scope.has_class("custom"));
        assert_eq!(scope.property(PROP_PRIMARY), Some("#0ea5e9"));
        assert_eq!(scope.property(PROP_SECONDARY), Some("#06b6d4"));
        assert_eq!(scope.property(PROP_ACCENT), Some("#3b82f6"));
        assert_eq!(
            scope.property(PROP_BACKGROUND),
            Some(ocean.colors.background.as_str())
        );
    }

    #[test]
    fn test_leaving_custom_keeps_properties_but_swaps_class() {
        let sunset = find_preset("Sunset").unwrap();
        let mut scope = RootScope::new();

        apply(
            &state(ThemeMode::Custom, Some(sunset.colors.clone())),
            &mut scope,
        );
        apply(&state(ThemeMode::Dark, Some(sunset.colors.clone())), &mut scope);

        assert!(scope.has_class("dark"));
        assert!(!scope.has_class("custom"));
        // Stale properties stay; the class change stops the cascade from
        // consuming them.
        assert_eq!(scope.property(PROP_PRIMARY), Some("#f59e0b"));
    }

    #[test]
    fn test_non_custom_modes_push_nothing() {
        let mut scope = RootScope::new();
        apply(&state(ThemeMode::Light, None), &mut scope);
        assert_eq!(scope.properties().count(), 0);
    }
}
