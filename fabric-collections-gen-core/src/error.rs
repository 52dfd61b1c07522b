//! Error types for collections config generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type CollectionsGenResult<T> = Result<T, CollectionsGenError>;

/// Errors that can occur while generating the collections configuration.
#[derive(Debug, Error)]
pub enum CollectionsGenError {
    /// A prompt answer could not be parsed as an integer.
    #[error("invalid integer {value:?} for \"{prompt}\"")]
    InvalidInput {
        prompt: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Reading or writing the prompt streams failed.
    #[error("prompt I/O failed")]
    Prompt(#[source] std::io::Error),

    /// Writing the output file failed.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection sequence could not be serialized to JSON.
    #[error("failed to serialize collections configuration")]
    Serialize(#[from] serde_json::Error),
}
