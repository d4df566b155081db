//! Theme state: modes, color bundles, presets, and the derivation engine.
//!
//! This module provides:
//!
//! - [`ThemeMode`]: The light / dark / custom mode enum and its toggle cycle
//! - [`RgbTheme`]: The immutable four-color custom bundle
//! - [`ThemePreset`]: Named bundles shipped for one-click selection
//! - [`ThemeEngine`]: Owns the state and every mutation path
//! - [`SystemScheme`]: The ambient OS scheme consulted at initialization
//!
//! The engine persists through a [`ThemeStore`](crate::ThemeStore) and
//! pushes every change through the presentation binding before the mutating
//! call returns.

mod colors;
mod detect;
mod engine;
mod mode;
mod presets;

pub use colors::RgbTheme;
pub use detect::{set_scheme_detector, SystemScheme};
pub use engine::{ThemeEngine, ThemeState};
pub use mode::{ParseThemeModeError, ThemeMode};
pub use presets::{find_preset, theme_presets, ThemePreset};
