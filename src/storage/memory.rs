// In-memory storage backend
//
// Keeps everything in a map, for tests and headless runs where nothing
// should touch the filesystem. Two components holding the same backend see
// each other's saves, same as with a shared file.

use super::{Storage, StorageScope};
use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Map-backed storage with no persistence across processes.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<(StorageScope, String), Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries across both scopes.
    pub fn len(&self) -> usize {
        self.values.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().unwrap().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str, scope: StorageScope) -> Result<Option<Value>> {
        let values = self.values.lock().unwrap();
        Ok(values.get(&(scope, key.to_string())).cloned())
    }

    fn save(&self, key: &str, scope: StorageScope, value: &Value) -> Result<()> {
        let mut values = self.values.lock().unwrap();
        values.insert((scope, key.to_string()), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_starts_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert!(storage
            .load("editor.foo", StorageScope::Global)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let storage = MemoryStorage::new();
        storage
            .save("editor.foo", StorageScope::Global, &json!({"zoom": 2}))
            .unwrap();

        let loaded = storage.load("editor.foo", StorageScope::Global).unwrap();
        assert_eq!(loaded, Some(json!({"zoom": 2})));
    }

    #[test]
    fn test_scopes_are_independent() {
        let storage = MemoryStorage::new();
        storage
            .save("editor.foo", StorageScope::Global, &json!({"a": 1}))
            .unwrap();
        storage
            .save("editor.foo", StorageScope::Workspace, &json!({"b": 2}))
            .unwrap();

        assert_eq!(
            storage.load("editor.foo", StorageScope::Global).unwrap(),
            Some(json!({"a": 1}))
        );
        assert_eq!(
            storage.load("editor.foo", StorageScope::Workspace).unwrap(),
            Some(json!({"b": 2}))
        );
    }

    #[test]
    fn test_save_overwrites_previous() {
        let storage = MemoryStorage::new();
        storage
            .save("panel.logs", StorageScope::Global, &json!({"wrap": false}))
            .unwrap();
        storage
            .save("panel.logs", StorageScope::Global, &json!({"wrap": true}))
            .unwrap();

        assert_eq!(
            storage.load("panel.logs", StorageScope::Global).unwrap(),
            Some(json!({"wrap": true}))
        );
        assert_eq!(storage.len(), 1);
    }
}
