//! # Vocabulary Store
//!
//! Version-scoped cache of loaded definitions. Each version's entry
//! remembers the location it was loaded from. When the resolved location
//! for a version changes, the whole key set for that version is reloaded
//! in one pass. Otherwise every (location, key) pair is read at most once.
//!
//! The store belongs to one validation session. It is `Send + Sync`, and
//! uses a `parking_lot::Mutex` so lookups work through `&self`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use ism_core::{DdmsVersion, IsmError, ResourceLocations, VocabularyKey};

use crate::definition::VocabularyDefinition;
use crate::loader::{DefinitionSet, VocabularyLoader};

#[derive(Debug)]
struct LoadedVersion {
    location: PathBuf,
    definitions: DefinitionSet,
}

#[derive(Debug)]
struct StoreState {
    locations: ResourceLocations,
    versions: HashMap<DdmsVersion, LoadedVersion>,
}

/// Cache of vocabulary definitions, keyed by version.
#[derive(Debug)]
pub struct VocabularyStore {
    loader: VocabularyLoader,
    state: Mutex<StoreState>,
}

impl VocabularyStore {
    pub fn new(loader: VocabularyLoader, locations: ResourceLocations) -> Self {
        Self {
            loader,
            state: Mutex::new(StoreState {
                locations,
                versions: HashMap::new(),
            }),
        }
    }

    /// A filesystem-backed store reading `<root>/<version>/`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::new(VocabularyLoader::default(), ResourceLocations::new(root))
    }

    /// Definition for `key` under `version`, loading the version if its
    /// cached entry is missing or stale.
    pub fn get(
        &self,
        version: DdmsVersion,
        key: VocabularyKey,
    ) -> Result<Arc<VocabularyDefinition>, IsmError> {
        let mut state = self.state.lock();
        let location = state.locations.resolve(version);

        let stale = state
            .versions
            .get(&version)
            .map_or(true, |loaded| loaded.location != location);
        if stale {
            if state.versions.contains_key(&version) {
                tracing::info!(
                    version = %version,
                    location = %location.display(),
                    "vocabulary location changed, reloading"
                );
            }
            let definitions = self.loader.load_all(&location, version);
            state.versions.insert(
                version,
                LoadedVersion {
                    location,
                    definitions,
                },
            );
        }

        state
            .versions
            .get(&version)
            .and_then(|loaded| loaded.definitions.get(&key))
            .cloned()
            .ok_or(IsmError::UnknownVocabulary { key, version })
    }

    /// Sets or clears the location used for every version.
    pub fn set_custom_location(&self, location: Option<PathBuf>) {
        self.state.lock().locations.custom = location;
    }

    /// Sets or clears the location used for one version.
    pub fn set_version_location(&self, version: DdmsVersion, location: Option<PathBuf>) {
        let mut state = self.state.lock();
        match location {
            Some(path) => {
                state.locations.per_version.insert(version, path);
            }
            None => {
                state.locations.per_version.remove(&version);
            }
        }
    }

    /// The directory `version` currently resolves to.
    pub fn resolved_location(&self, version: DdmsVersion) -> PathBuf {
        self.state.lock().locations.resolve(version)
    }

    /// The location `version` was last loaded from, if it has been loaded.
    pub fn loaded_location(&self, version: DdmsVersion) -> Option<PathBuf> {
        self.state
            .lock()
            .versions
            .get(&version)
            .map(|loaded| loaded.location.clone())
    }

    /// Drops every cached definition. The next lookup reloads, which picks
    /// up files edited in place.
    pub fn clear(&self) {
        self.state.lock().versions.clear();
    }
}

impl Default for VocabularyStore {
    fn default() -> Self {
        Self::new(VocabularyLoader::default(), ResourceLocations::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let v31 = dir.path().join("3.1");
        std::fs::create_dir_all(&v31).unwrap();
        std::fs::write(
            v31.join("CVEnumISMClassificationAll.yaml"),
            "enumeration:\n  terms:\n    - value: U\n    - value: C\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn loads_lazily_from_root() {
        let dir = fixture();
        let store = VocabularyStore::with_root(dir.path());
        assert_eq!(store.loaded_location(DdmsVersion::V3_1), None);

        let def = store
            .get(DdmsVersion::V3_1, VocabularyKey::Classification)
            .unwrap();
        assert!(def.matches("C"));
        assert_eq!(
            store.loaded_location(DdmsVersion::V3_1),
            Some(dir.path().join("3.1"))
        );
    }

    #[test]
    fn absent_key_is_unknown_vocabulary() {
        let dir = fixture();
        let store = VocabularyStore::with_root(dir.path());
        let err = store
            .get(DdmsVersion::V3_1, VocabularyKey::SciControls)
            .unwrap_err();
        assert_eq!(
            err,
            IsmError::UnknownVocabulary {
                key: VocabularyKey::SciControls,
                version: DdmsVersion::V3_1
            }
        );
    }

    #[test]
    fn custom_location_overrides_root() {
        let dir = fixture();
        let custom = tempfile::tempdir().unwrap();
        std::fs::write(
            custom.path().join("CVEnumISMClassificationAll.yaml"),
            "enumeration:\n  terms:\n    - value: TS\n",
        )
        .unwrap();

        let store = VocabularyStore::with_root(dir.path());
        assert!(store
            .get(DdmsVersion::V3_1, VocabularyKey::Classification)
            .unwrap()
            .matches("C"));

        store.set_custom_location(Some(custom.path().to_path_buf()));
        assert_eq!(store.resolved_location(DdmsVersion::V3_1), custom.path());
        let def = store
            .get(DdmsVersion::V3_1, VocabularyKey::Classification)
            .unwrap();
        assert!(def.matches("TS"));
        assert!(!def.matches("C"));

        store.set_custom_location(None);
        assert!(store
            .get(DdmsVersion::V3_1, VocabularyKey::Classification)
            .unwrap()
            .matches("C"));
    }
}
