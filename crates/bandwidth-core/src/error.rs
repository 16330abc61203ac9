//! Error types for the bandwidth monitor.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by monitor construction and the render driver.
#[derive(Error, Debug)]
pub enum Error {
    /// A startup resource (the label font) is missing or unreadable.
    #[error("resource unavailable: {}: {reason}", path.display())]
    ResourceUnavailable {
        /// Path that was requested.
        path: PathBuf,
        /// Why it could not be used.
        reason: String,
    },

    /// Simulation parameters rejected before the loop starts.
    #[error("invalid simulation parameters: {0}")]
    InvalidParameters(String),

    /// Terminal or other I/O failure in the render driver.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_unavailable_names_the_path() {
        let err = Error::ResourceUnavailable {
            path: PathBuf::from("/nope/font.ttf"),
            reason: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/font.ttf"));
        assert!(msg.contains("No such file"));
        assert!(matches!(err, Error::ResourceUnavailable { .. }));
    }

    #[test]
    fn io_errors_convert() {
        let err: Error = io::Error::other("boom").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
