//! # ism-vocab — Controlled Vocabularies
//!
//! Loads controlled vocabulary enumerations (CVEs) for each DDMS version,
//! caches them per version, and checks values against them.
//!
//! ## Layers
//!
//! - [`VocabularySource`]: raw resource text. [`FileSystemSource`] reads
//!   from disk; tests substitute their own.
//! - [`VocabularyLoader`]: parses resources into [`VocabularyDefinition`]s,
//!   skipping (and logging) any that fail.
//! - [`VocabularyStore`]: per-version cache that reloads when the resolved
//!   location changes.
//! - [`EnumerationValidator`]: membership checks and the standard
//!   invalid-value message.

pub mod definition;
pub mod enumeration;
pub mod error;
pub mod loader;
pub mod source;
pub mod store;

pub use definition::VocabularyDefinition;
pub use enumeration::{invalid_message, EnumerationValidator, TokenSet};
pub use error::LoadError;
pub use loader::{DefinitionSet, VocabularyLoader};
pub use source::{FileSystemSource, VocabularySource};
pub use store::VocabularyStore;
