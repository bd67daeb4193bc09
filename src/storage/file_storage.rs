use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Instance;
use super::error::StorageError;

/// File-backed record store. The whole mapping lives in memory, keyed by
/// `<Class>.<id>`, and is rewritten to the backing file on every save.
/// Keys are kept sorted so repeated saves of an unchanged store produce
/// identical files.
pub struct FileStorage {
    path: PathBuf,
    objects: BTreeMap<String, Instance>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage {
            path: path.into(),
            objects: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The entire live mapping, no filtering.
    pub fn all(&self) -> &BTreeMap<String, Instance> {
        &self.objects
    }

    pub fn get(&self, key: &str) -> Option<&Instance> {
        self.objects.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Instance> {
        self.objects.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    /// Registers an instance under its computed key. A later insert under
    /// the same key overwrites the previous instance.
    pub fn insert(&mut self, instance: Instance) {
        self.objects.insert(instance.key(), instance);
    }

    pub fn remove(&mut self, key: &str) -> Option<Instance> {
        self.objects.remove(key)
    }

    /// Serializes the full mapping to the backing file, overwriting it.
    pub fn save(&self) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(&self.objects)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Replaces the in-memory mapping with the backing file's contents.
    /// A missing file is not an error and leaves the mapping untouched.
    pub fn reload(&mut self) -> Result<(), StorageError> {
        if !self.path.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(&self.path)?;
        self.objects = serde_json::from_str(&content)?;
        Ok(())
    }
}
