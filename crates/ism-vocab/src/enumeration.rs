//! # Enumeration Validator
//!
//! Answers "is this value in the controlled vocabulary for this key under
//! this version?" against a [`VocabularyStore`]. A value matches when it
//! equals a literal token or, failing that, fully matches any pattern.

use std::collections::BTreeSet;
use std::ops::Deref;
use std::sync::Arc;

use ism_core::{DdmsVersion, IsmError, VocabularyKey};

use crate::definition::VocabularyDefinition;
use crate::store::VocabularyStore;

/// Read-only view of a definition's literal tokens.
#[derive(Debug, Clone)]
pub struct TokenSet(Arc<VocabularyDefinition>);

impl Deref for TokenSet {
    type Target = BTreeSet<String>;

    fn deref(&self) -> &Self::Target {
        self.0.tokens()
    }
}

/// Message for a value outside the vocabulary of `key`.
pub fn invalid_message(key: VocabularyKey, value: &str) -> String {
    format!("{value} is not a valid enumeration token for this attribute, as specified in {key}.")
}

/// Vocabulary membership checks over one store.
#[derive(Debug, Default)]
pub struct EnumerationValidator {
    store: VocabularyStore,
}

impl EnumerationValidator {
    pub fn new(store: VocabularyStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &VocabularyStore {
        &self.store
    }

    /// True if `value` is a token of, or matches a pattern of, `key`.
    pub fn contains(
        &self,
        version: DdmsVersion,
        key: VocabularyKey,
        value: &str,
    ) -> Result<bool, IsmError> {
        Ok(self.store.get(version, key)?.matches(value))
    }

    /// Fails with `IsmError::Vocabulary` if `value` is not in `key`.
    pub fn validate(
        &self,
        version: DdmsVersion,
        key: VocabularyKey,
        value: &str,
    ) -> Result<(), IsmError> {
        if self.contains(version, key, value)? {
            Ok(())
        } else {
            Err(IsmError::Vocabulary {
                key,
                value: value.to_string(),
                message: invalid_message(key, value),
            })
        }
    }

    pub fn enumeration_tokens(
        &self,
        version: DdmsVersion,
        key: VocabularyKey,
    ) -> Result<TokenSet, IsmError> {
        Ok(TokenSet(self.store.get(version, key)?))
    }

    pub fn enumeration_patterns(
        &self,
        version: DdmsVersion,
        key: VocabularyKey,
    ) -> Result<Vec<String>, IsmError> {
        Ok(self
            .store
            .get(version, key)?
            .patterns()
            .map(str::to_string)
            .collect())
    }
}
