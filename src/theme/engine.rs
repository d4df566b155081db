//! The theme derivation engine.

use log::warn;

use crate::bind::{self, RootScope};
use crate::store::ThemeStore;

use super::colors::RgbTheme;
use super::detect::{detect_system_scheme, SystemScheme};
use super::mode::ThemeMode;
use super::presets::ThemePreset;

/// Store key holding the serialized mode token.
pub(crate) const KEY_MODE: &str = "theme";
/// Store key holding the JSON-encoded custom color bundle.
pub(crate) const KEY_CUSTOM: &str = "customTheme";

/// The engine's observable state.
///
/// Invariant: `mode == Custom` implies `custom_theme` is present. The only
/// mutator that enters Custom installs a bundle in the same step, and
/// initialization demotes a stored Custom mode whose bundle cannot be
/// recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub custom_theme: Option<RgbTheme>,
}

/// Derives the effective theme from stored preference and system scheme,
/// and owns every mutation path.
///
/// The engine is an explicit object constructed by the application's
/// composition root with whatever store fits the host; there is no ambient
/// singleton. Every mutating operation persists its change and re-applies
/// the presentation binding before returning, so a reload immediately after
/// any mutation observes the new state.
///
/// # Example
///
/// ```rust
/// use themeset::{MemoryStore, ThemeEngine, ThemeMode, find_preset};
///
/// let mut engine = ThemeEngine::initialize(MemoryStore::new());
/// engine.apply_preset(find_preset("Ocean").unwrap());
///
/// assert_eq!(engine.mode(), ThemeMode::Custom);
/// assert_eq!(engine.custom_theme().unwrap().primary, "#0ea5e9");
/// ```
#[derive(Debug)]
pub struct ThemeEngine<S: ThemeStore> {
    store: S,
    scope: RootScope,
    state: ThemeState,
}

impl<S: ThemeStore> ThemeEngine<S> {
    /// Builds an engine from whatever the store holds.
    ///
    /// A stored mode token is used verbatim when it parses; otherwise the
    /// system scheme decides between Light and Dark, defaulting to Light
    /// when there is no signal. The custom bundle is decoded independently;
    /// a malformed payload falls back to absent. The first presentation
    /// sync runs before this returns.
    pub fn initialize(store: S) -> Self {
        let custom_theme = store.get(KEY_CUSTOM).and_then(|raw| {
            match serde_json::from_str::<RgbTheme>(&raw) {
                Ok(colors) => Some(colors),
                Err(err) => {
                    warn!("ignoring malformed stored custom theme: {}", err);
                    None
                }
            }
        });

        let mode = match store.get(KEY_MODE) {
            Some(token) => match token.parse::<ThemeMode>() {
                Ok(ThemeMode::Custom) if custom_theme.is_none() => {
                    warn!("stored mode is custom but no custom theme was recovered; using dark");
                    ThemeMode::Dark
                }
                Ok(mode) => mode,
                Err(err) => {
                    warn!("ignoring stored mode: {}", err);
                    mode_from_scheme()
                }
            },
            None => mode_from_scheme(),
        };

        let mut engine = Self {
            store,
            scope: RootScope::new(),
            state: ThemeState { mode, custom_theme },
        };
        engine.sync();
        engine
    }

    /// The active mode.
    pub fn mode(&self) -> ThemeMode {
        self.state.mode
    }

    /// The saved custom bundle, whether or not Custom is the active mode.
    pub fn custom_theme(&self) -> Option<&RgbTheme> {
        self.state.custom_theme.as_ref()
    }

    /// The full observable state.
    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    /// The root scope the presentation binding writes into.
    pub fn scope(&self) -> &RootScope {
        &self.scope
    }

    /// Advances the mode along the toggle cycle and returns the new mode.
    ///
    /// See [`ThemeMode::toggled`] for the cycle. Toggling can re-enter a
    /// previously saved custom theme but never invents one.
    pub fn toggle(&mut self) -> ThemeMode {
        self.state.mode = self.state.mode.toggled(self.state.custom_theme.is_some());
        self.sync();
        self.state.mode
    }

    /// Installs `colors` as the custom theme and makes Custom the active
    /// mode. This is the only path into Custom.
    pub fn set_custom_theme(&mut self, colors: RgbTheme) {
        match serde_json::to_string(&colors) {
            Ok(json) => self.store.set(KEY_CUSTOM, &json),
            Err(err) => warn!("could not encode custom theme: {}", err),
        }
        self.state.custom_theme = Some(colors);
        self.state.mode = ThemeMode::Custom;
        self.sync();
    }

    /// Installs a preset. Presets are pre-canned custom themes, so this
    /// delegates entirely to [`set_custom_theme`](Self::set_custom_theme).
    pub fn apply_preset(&mut self, preset: &ThemePreset) {
        self.set_custom_theme(preset.colors.clone());
    }

    /// Clears the custom theme and forces the mode to Dark.
    ///
    /// Dark unconditionally, not the system scheme: reset lands the user
    /// somewhere predictable.
    pub fn reset(&mut self) {
        self.store.remove(KEY_CUSTOM);
        self.state.custom_theme = None;
        self.state.mode = ThemeMode::Dark;
        self.sync();
    }

    /// Consumes the engine and hands the store back, e.g. to re-initialize
    /// in tests.
    pub fn into_store(self) -> S {
        self.store
    }

    // Persistence of the mode token and the scope update happen together,
    // before the mutating call returns.
    fn sync(&mut self) {
        bind::apply(&self.state, &mut self.scope);
        self.store.set(KEY_MODE, self.state.mode.as_str());
    }
}

fn mode_from_scheme() -> ThemeMode {
    match detect_system_scheme() {
        SystemScheme::Dark => ThemeMode::Dark,
        SystemScheme::Light => ThemeMode::Light,
    }
}
