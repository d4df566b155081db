//! Persistent color theme preferences with automatic OS dark mode
//! detection.
//!
//! themeset keeps a user's theme choice (light, dark, or a custom
//! four-color bundle) durable across sessions, derives the effective
//! presentation state from the stored preference and the ambient OS
//! scheme, and applies it to a global root-scope style object.
//!
//! The main pieces:
//!
//! - [`ThemeEngine`]: Owns the state and every mutation path
//! - [`ThemeStore`] / [`FileStore`] / [`MemoryStore`]: Preference storage
//! - [`ThemeMode`] / [`RgbTheme`] / [`ThemePreset`]: The data model
//! - [`RootScope`] and [`apply`]: The presentation binding
//! - [`palette_for`]: The same cascade resolved for terminal hosts
//!
//! # Example
//!
//! ```rust
//! use themeset::{find_preset, MemoryStore, ThemeEngine, ThemeMode};
//!
//! let mut engine = ThemeEngine::initialize(MemoryStore::new());
//!
//! engine.apply_preset(find_preset("Ocean").unwrap());
//! assert_eq!(engine.mode(), ThemeMode::Custom);
//! assert!(engine.scope().has_class("custom"));
//!
//! // The cycle can re-enter the saved custom theme, but never invents one.
//! assert_eq!(engine.toggle(), ThemeMode::Dark);
//! assert_eq!(engine.toggle(), ThemeMode::Light);
//! assert_eq!(engine.toggle(), ThemeMode::Custom);
//! ```
//!
//! Durable hosts swap [`MemoryStore`] for
//! [`FileStore::open_default()`](FileStore::open_default); everything else
//! is identical.

mod bind;
mod store;
mod theme;
mod util;

pub use bind::{
    apply, palette_for, RootScope, TermPalette, PROP_ACCENT, PROP_BACKGROUND, PROP_PRIMARY,
    PROP_SECONDARY,
};
pub use store::{FileStore, MemoryStore, StoreError, ThemeStore};
pub use theme::{
    find_preset, set_scheme_detector, theme_presets, ParseThemeModeError, RgbTheme, SystemScheme,
    ThemeEngine, ThemeMode, ThemePreset, ThemeState,
};
pub use util::{parse_hex, rgb_to_ansi256};
