//! Terminal derivation of the effective theme.
//!
//! Hosts that render a CSS-like cascade consume the root scope's custom
//! properties; terminal hosts get the same cascade as `console` styles,
//! with hex colors mapped onto the ANSI 256-color palette.

use console::Style;

use crate::theme::{RgbTheme, ThemeMode, ThemeState};
use crate::util::{parse_hex, rgb_to_ansi256};

// Stock palettes for the two non-custom modes. The dark palette lifts each
// role a step lighter so it reads on dark backgrounds.
const LIGHT_PRIMARY: &str = "#3b82f6";
const LIGHT_SECONDARY: &str = "#8b5cf6";
const LIGHT_ACCENT: &str = "#ec4899";
const DARK_PRIMARY: &str = "#60a5fa";
const DARK_SECONDARY: &str = "#a78bfa";
const DARK_ACCENT: &str = "#f472b6";

/// The three color roles of a theme, resolved to terminal styles.
///
/// # Example
///
/// ```rust
/// use themeset::{palette_for, ThemeMode, ThemeState};
///
/// let state = ThemeState { mode: ThemeMode::Dark, custom_theme: None };
/// let palette = palette_for(&state);
/// println!("{}", palette.primary.apply_to("themeset"));
/// ```
#[derive(Debug, Clone)]
pub struct TermPalette {
    pub primary: Style,
    pub secondary: Style,
    pub accent: Style,
}

impl TermPalette {
    fn from_colors(colors: &RgbTheme) -> Self {
        Self {
            primary: style_for(&colors.primary),
            secondary: style_for(&colors.secondary),
            accent: style_for(&colors.accent),
        }
    }

    fn light() -> Self {
        Self {
            primary: style_for(LIGHT_PRIMARY),
            secondary: style_for(LIGHT_SECONDARY),
            accent: style_for(LIGHT_ACCENT),
        }
    }

    fn dark() -> Self {
        Self {
            primary: style_for(DARK_PRIMARY),
            secondary: style_for(DARK_SECONDARY),
            accent: style_for(DARK_ACCENT),
        }
    }
}

/// Resolves the effective terminal palette for a state.
///
/// Light and Dark use the stock palettes; Custom resolves through the
/// saved bundle. A Custom state without a bundle cannot be produced by the
/// engine, but resolves to the dark stock palette rather than panicking.
pub fn palette_for(state: &ThemeState) -> TermPalette {
    match state.mode {
        ThemeMode::Light => TermPalette::light(),
        ThemeMode::Dark => TermPalette::dark(),
        ThemeMode::Custom => state
            .custom_theme
            .as_ref()
            .map(TermPalette::from_colors)
            .unwrap_or_else(TermPalette::dark),
    }
}

// Unparseable colors (gradients, typos) degrade to an unstyled role rather
// than failing the whole palette.
fn style_for(hex: &str) -> Style {
    match parse_hex(hex) {
        Some(rgb) => Style::new().color256(rgb_to_ansi256(rgb)),
        None => Style::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::find_preset;

    fn rendered(style: &Style) -> String {
        style
            .clone()
            .force_styling(true)
            .apply_to("x")
            .to_string()
    }

    #[test]
    fn test_custom_palette_uses_bundle_colors() {
        let forest = find_preset("Forest").unwrap();
        let state = ThemeState {
            mode: ThemeMode::Custom,
            custom_theme: Some(forest.colors.clone()),
        };

        let palette = palette_for(&state);
        let expected = rgb_to_ansi256(parse_hex("#10b981").unwrap());
        assert!(rendered(&palette.primary).contains(&format!("38;5;{}m", expected)));
    }

    #[test]
    fn test_stock_palettes_differ_by_mode() {
        let light = palette_for(&ThemeState {
            mode: ThemeMode::Light,
            custom_theme: None,
        });
        let dark = palette_for(&ThemeState {
            mode: ThemeMode::Dark,
            custom_theme: None,
        });
        assert_ne!(rendered(&light.primary), rendered(&dark.primary));
    }

    #[test]
    fn test_unparseable_color_degrades_to_plain() {
        let state = ThemeState {
            mode: ThemeMode::Custom,
            custom_theme: Some(crate::theme::RgbTheme::new(
                "not-a-color",
                "#8b5cf6",
                "#ec4899",
                "none",
            )),
        };

        let palette = palette_for(&state);
        assert_eq!(rendered(&palette.primary), "x");
        assert_ne!(rendered(&palette.secondary), "x");
    }
}
