//! Resource loading errors.
//!
//! A `LoadError` never escapes the loader as a hard failure: it is logged
//! and the affected key is left out of the loaded set.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource file does not exist.
    #[error("vocabulary resource not found: {path}")]
    NotFound { path: PathBuf },

    /// The resource exists but could not be read.
    #[error("failed to read vocabulary resource {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The resource is not valid YAML, or lacks the `enumeration` root.
    #[error("failed to parse vocabulary resource {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A term flagged as a regular expression does not compile.
    #[error("invalid pattern {pattern:?} in {path}: {source}")]
    Pattern {
        path: PathBuf,
        pattern: String,
        source: regex::Error,
    },
}
