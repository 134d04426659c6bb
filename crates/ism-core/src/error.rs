//! # Error Taxonomy
//!
//! `IsmError` is the single error type surfaced by vocabulary lookups and
//! security attribute construction. Every variant carries the exact
//! user-facing message, so `Display` output can be shown to an operator
//! without further formatting.
//!
//! Resource loading failures are not part of this enum. They are logged by
//! the loader and degrade to "key absent", which later surfaces here as
//! `UnknownVocabulary`.

use thiserror::Error;

use crate::key::VocabularyKey;
use crate::version::DdmsVersion;

/// Errors raised while validating ISM security markings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsmError {
    /// A required field is missing or the group is otherwise malformed.
    #[error("{0}")]
    Structural(String),

    /// A value is not in the controlled vocabulary for its key.
    #[error("{message}")]
    Vocabulary {
        key: VocabularyKey,
        value: String,
        message: String,
    },

    /// A field is used outside its legal version window, or a group is
    /// attached to a carrier of another version.
    #[error("{0}")]
    VersionCompatibility(String),

    /// A value is lexically invalid (date or boolean syntax).
    #[error("{0}")]
    Format(String),

    /// No definition was loaded for the key under the given version.
    #[error("No controlled vocabulary could be found for this key: {key}")]
    UnknownVocabulary {
        key: VocabularyKey,
        version: DdmsVersion,
    },

    /// The version string does not name a supported DDMS version.
    #[error("unsupported DDMS version: {0:?}")]
    UnsupportedVersion(String),
}

impl IsmError {
    /// Short machine-readable category name, used in reports.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Structural(_) => "structural",
            Self::Vocabulary { .. } => "vocabulary",
            Self::VersionCompatibility(_) => "version_compatibility",
            Self::Format(_) => "format",
            Self::UnknownVocabulary { .. } => "unknown_vocabulary",
            Self::UnsupportedVersion(_) => "unsupported_version",
        }
    }
}
