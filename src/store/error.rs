//! Store errors.

use thiserror::Error;

/// Error opening a [`FileStore`](super::FileStore) at its default location.
///
/// Everything past opening is best-effort and does not error: reads fall
/// back to absent values and writes degrade to in-memory for the session.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform reports no user configuration directory.
    #[error("could not determine a configuration directory for this platform")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_config_dir_display() {
        let msg = StoreError::NoConfigDir.to_string();
        assert!(msg.contains("configuration directory"));
    }
}
