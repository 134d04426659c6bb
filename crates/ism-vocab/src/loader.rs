//! # Vocabulary Loader
//!
//! Reads CVE resources for one DDMS version from a location, through a
//! [`VocabularySource`]. Which keys exist for a version and which file each
//! key lives in come from [`VersionPolicy`].
//!
//! A resource that is missing or malformed is logged at `warn` and left
//! out; the remaining keys for the version still load.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use ism_core::{DdmsVersion, VersionPolicy, VocabularyKey};

use crate::definition::VocabularyDefinition;
use crate::error::LoadError;
use crate::source::{FileSystemSource, VocabularySource};

/// Every definition successfully loaded for one version.
pub type DefinitionSet = HashMap<VocabularyKey, Arc<VocabularyDefinition>>;

/// Loads vocabulary definitions through a source.
#[derive(Clone)]
pub struct VocabularyLoader {
    source: Arc<dyn VocabularySource>,
}

impl std::fmt::Debug for VocabularyLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VocabularyLoader").finish_non_exhaustive()
    }
}

impl Default for VocabularyLoader {
    fn default() -> Self {
        Self::new(Arc::new(FileSystemSource))
    }
}

impl VocabularyLoader {
    pub fn new(source: Arc<dyn VocabularySource>) -> Self {
        Self { source }
    }

    /// Loads one key's definition for `version` from `location`.
    ///
    /// Returns `Ok(None)` when the key has no resource under `version`.
    pub fn load(
        &self,
        location: &Path,
        version: DdmsVersion,
        key: VocabularyKey,
    ) -> Result<Option<VocabularyDefinition>, LoadError> {
        let resource = VersionPolicy::resource(key);
        if !resource.window.contains(version) {
            return Ok(None);
        }
        let text = self.source.read(location, resource.file_name)?;
        let definition = VocabularyDefinition::from_yaml(&location.join(resource.file_name), &text)?;
        tracing::debug!(
            version = %version,
            key = %key,
            tokens = definition.tokens().len(),
            patterns = definition.patterns().count(),
            "loaded controlled vocabulary"
        );
        Ok(Some(definition))
    }

    /// Loads every key that exists under `version`, skipping failures.
    pub fn load_all(&self, location: &Path, version: DdmsVersion) -> DefinitionSet {
        let mut loaded = DefinitionSet::new();
        for resource in VersionPolicy::resources_for(version) {
            match self.load(location, version, resource.key) {
                Ok(Some(definition)) => {
                    loaded.insert(resource.key, Arc::new(definition));
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(
                        version = %version,
                        key = %resource.key,
                        location = %location.display(),
                        error = %err,
                        "skipping controlled vocabulary"
                    );
                }
            }
        }
        tracing::info!(
            version = %version,
            location = %location.display(),
            keys = loaded.len(),
            "loaded controlled vocabularies"
        );
        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, file: &str, body: &str) {
        std::fs::write(dir.join(file), body).unwrap();
    }

    #[test]
    fn load_skips_keys_outside_resource_window() {
        let dir = tempfile::tempdir().unwrap();
        let loader = VocabularyLoader::default();
        let result = loader
            .load(dir.path(), DdmsVersion::V3_0, VocabularyKey::NoticeType)
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn load_all_keeps_good_siblings() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "CVEnumISMClassificationAll.yaml",
            "enumeration:\n  terms:\n    - value: U\n    - value: C\n",
        );
        write(dir.path(), "CVEnumISMOwnerProducer.yaml", "enumeration:\n  terms: 17\n");

        let loaded = VocabularyLoader::default().load_all(dir.path(), DdmsVersion::V3_1);
        assert_eq!(loaded.len(), 1);
        assert!(loaded[&VocabularyKey::Classification].matches("C"));
        assert!(!loaded.contains_key(&VocabularyKey::OwnerProducer));
    }

    #[test]
    fn shared_resource_loads_for_both_keys() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "CVEnumISMRelTo.yaml",
            "enumeration:\n  terms:\n    - value: USA\n",
        );
        let loaded = VocabularyLoader::default().load_all(dir.path(), DdmsVersion::V3_1);
        assert!(loaded[&VocabularyKey::ReleasableTo].matches("USA"));
        assert!(loaded[&VocabularyKey::DisplayOnlyTo].matches("USA"));

        let loaded = VocabularyLoader::default().load_all(dir.path(), DdmsVersion::V3_0);
        assert!(loaded.contains_key(&VocabularyKey::ReleasableTo));
        assert!(!loaded.contains_key(&VocabularyKey::DisplayOnlyTo));
    }
}
