//! Where vocabulary resource text comes from.

use std::path::Path;

use crate::error::LoadError;

/// Reads the raw text of a named resource under a location.
pub trait VocabularySource: Send + Sync {
    fn read(&self, location: &Path, resource: &str) -> Result<String, LoadError>;
}

/// Reads `location/resource` from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemSource;

impl VocabularySource for FileSystemSource {
    fn read(&self, location: &Path, resource: &str) -> Result<String, LoadError> {
        let path = location.join(resource);
        std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound { path }
            } else {
                LoadError::Io { path, source }
            }
        })
    }
}
