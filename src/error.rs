//! Error types for generation runs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// A malformed individual property is never an error; it is dropped where it
/// is found. An existing output file under a non-overwrite policy is not an
/// error either, see [`crate::output::WriteOutcome`].
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A registered input path does not exist.
    #[error("File could not be found: '{}'", .0.display())]
    MissingInputFile(PathBuf),

    /// A required template asset is absent.
    #[error("Template could not be found: '{}'", .0.display())]
    MissingTemplate(PathBuf),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read or parsed.
    #[error("Invalid configuration {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl GeneratorError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used by the library.
pub type Result<T> = std::result::Result<T, GeneratorError>;
