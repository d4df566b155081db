//! System color-scheme detection.
//!
//! The engine consults the ambient scheme exactly once, when it
//! initializes with no stored mode. Later OS flips do not move a running
//! engine.

use dark_light::{detect as detect_os_scheme, Mode as OsSchemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// The ambient color scheme the OS reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemScheme {
    Light,
    Dark,
}

type SchemeDetector = fn() -> SystemScheme;

static SCHEME_DETECTOR: Lazy<Mutex<SchemeDetector>> = Lazy::new(|| Mutex::new(os_scheme_detector));

/// Overrides the detector used to read the ambient color scheme.
///
/// Useful for testing and for hosts that already know the user's
/// preference from some other channel.
///
/// # Example
///
/// ```rust
/// use themeset::{set_scheme_detector, SystemScheme};
///
/// set_scheme_detector(|| SystemScheme::Dark);
/// ```
pub fn set_scheme_detector(detector: SchemeDetector) {
    let mut guard = SCHEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_system_scheme() -> SystemScheme {
    let detector = SCHEME_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_scheme_detector() -> SystemScheme {
    match detect_os_scheme() {
        OsSchemeMode::Dark => SystemScheme::Dark,
        OsSchemeMode::Light => SystemScheme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detector_override() {
        set_scheme_detector(|| SystemScheme::Dark);
        assert_eq!(detect_system_scheme(), SystemScheme::Dark);

        set_scheme_detector(|| SystemScheme::Light);
        assert_eq!(detect_system_scheme(), SystemScheme::Light);
    }
}
