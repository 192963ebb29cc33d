use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the frame recorder.
///
/// In-memory samples are never modified by a failing operation.
#[derive(Debug, Error)]
pub enum RecorderError {
    /// The log file could not be created, written, or read.
    #[error("frame log i/o failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A frame log did not match the expected CSV layout.
    #[error("frame log parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl RecorderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse { line, message: message.into() }
    }
}
