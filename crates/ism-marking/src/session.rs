//! # Validation Sessions
//!
//! A `ValidationSession` is the context every security attribute group is
//! validated in: one enumeration validator (and so one vocabulary cache)
//! plus the policy for vocabulary mismatches. Create one per worker or
//! logical session and pass it by reference; sessions are never global.

use std::sync::Arc;

use ism_core::{DdmsVersion, IsmConfig, IsmError, VocabularyKey};
use ism_vocab::{EnumerationValidator, VocabularyLoader, VocabularySource, VocabularyStore};

#[derive(Debug)]
pub struct ValidationSession {
    enumerations: EnumerationValidator,
    validation_as_errors: bool,
}

impl ValidationSession {
    pub fn new(enumerations: EnumerationValidator, validation_as_errors: bool) -> Self {
        Self {
            enumerations,
            validation_as_errors,
        }
    }

    /// Filesystem-backed session configured by `config`.
    pub fn from_config(config: &IsmConfig) -> Self {
        Self::with_source(config, Arc::new(ism_vocab::FileSystemSource))
    }

    /// Session reading resources through `source`.
    pub fn with_source(config: &IsmConfig, source: Arc<dyn VocabularySource>) -> Self {
        let store = VocabularyStore::new(VocabularyLoader::new(source), config.locations());
        tracing::debug!(
            cve_root = %config.cve_root.display(),
            validation_as_errors = config.validation_as_errors,
            "created validation session"
        );
        Self::new(EnumerationValidator::new(store), config.validation_as_errors)
    }

    pub fn enumerations(&self) -> &EnumerationValidator {
        &self.enumerations
    }

    /// Whether vocabulary mismatches are errors (`true`) or warnings.
    pub fn validation_as_errors(&self) -> bool {
        self.validation_as_errors
    }

    pub fn set_validation_as_errors(&mut self, value: bool) {
        self.validation_as_errors = value;
    }

    /// Checks one value against a vocabulary, always as an error.
    pub fn validate(
        &self,
        version: DdmsVersion,
        key: VocabularyKey,
        value: &str,
    ) -> Result<(), IsmError> {
        self.enumerations.validate(version, key, value)
    }
}

impl Default for ValidationSession {
    fn default() -> Self {
        Self::from_config(&IsmConfig::default())
    }
}
