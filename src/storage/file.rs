// File-backed storage - one JSON document per scope
//
// Global scope lives under the user configuration directory
// (~/.config/<app>/global.json), workspace scope under the workspace root
// (<workspace>/.<app>/workspace.json). Each document maps component id to
// its stored state:
//
//   { "editor.foo": { "zoom": 2 }, "panel.logs": { "wrap": true } }
//
// Saves are read-modify-write on the whole document. That is fine for the
// single-threaded shells this crate targets; concurrent writers from other
// processes are out of scope.

use super::{Storage, StorageScope};
use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// JSON-file-backed storage for both scopes.
pub struct FileStorage {
    global_path: PathBuf,
    workspace_path: PathBuf,
}

impl FileStorage {
    /// Storage rooted at the standard locations for `app_name`, with the
    /// workspace scope kept under `workspace_root`.
    ///
    /// The global directory honors `PANEKIT_STATE_DIR` when set (env >
    /// default), otherwise falls back to Unix-style `~/.config/<app_name>`
    /// on all platforms.
    pub fn new(app_name: &str, workspace_root: &Path) -> Result<Self> {
        let global_dir = match std::env::var("PANEKIT_STATE_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::home_dir()
                .context("could not determine home directory")?
                .join(".config")
                .join(app_name),
        };

        Ok(Self::with_paths(
            global_dir.join("global.json"),
            workspace_root
                .join(format!(".{}", app_name))
                .join("workspace.json"),
        ))
    }

    /// Storage with explicit file locations (tests, unusual layouts).
    pub fn with_paths(global_path: PathBuf, workspace_path: PathBuf) -> Self {
        Self {
            global_path,
            workspace_path,
        }
    }

    fn path_for(&self, scope: StorageScope) -> &Path {
        match scope {
            StorageScope::Global => &self.global_path,
            StorageScope::Workspace => &self.workspace_path,
        }
    }

    /// Read a scope document; a missing file is an empty document.
    fn read_document(path: &Path) -> Result<Map<String, Value>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read state file {:?}", path))
            }
        };

        let value: Value = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse state file {:?}", path))?;
        match value {
            Value::Object(map) => Ok(map),
            _ => bail!("state file {:?} is not a JSON object", path),
        }
    }

    fn write_document(path: &Path, document: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create state directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(&Value::Object(document.clone()))
            .context("failed to serialize state document")?;
        std::fs::write(path, json).with_context(|| format!("failed to write state file {:?}", path))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str, scope: StorageScope) -> Result<Option<Value>> {
        let mut document = Self::read_document(self.path_for(scope))?;
        Ok(document.remove(key))
    }

    fn save(&self, key: &str, scope: StorageScope, value: &Value) -> Result<()> {
        let path = self.path_for(scope);
        let mut document = Self::read_document(path)?;
        document.insert(key.to_string(), value.clone());
        Self::write_document(path, &document)?;
        tracing::debug!("saved state for '{}' ({} scope)", key, scope.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn storage_in(dir: &Path) -> FileStorage {
        FileStorage::with_paths(dir.join("global.json"), dir.join("ws").join("workspace.json"))
    }

    #[test]
    fn test_missing_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(dir.path());
        assert!(storage
            .load("editor.foo", StorageScope::Global)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_roundtrip_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let storage = storage_in(dir.path());
        storage
            .save("editor.foo", StorageScope::Workspace, &json!({"line": 42}))
            .unwrap();

        // A second instance pointed at the same files sees the save
        let other = storage_in(dir.path());
        assert_eq!(
            other.load("editor.foo", StorageScope::Workspace).unwrap(),
            Some(json!({"line": 42}))
        );
    }

    #[test]
    fn test_saves_for_different_keys_coexist() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(dir.path());

        storage
            .save("editor.foo", StorageScope::Global, &json!({"zoom": 2}))
            .unwrap();
        storage
            .save("panel.logs", StorageScope::Global, &json!({"wrap": true}))
            .unwrap();

        assert_eq!(
            storage.load("editor.foo", StorageScope::Global).unwrap(),
            Some(json!({"zoom": 2}))
        );
        assert_eq!(
            storage.load("panel.logs", StorageScope::Global).unwrap(),
            Some(json!({"wrap": true}))
        );
    }

    #[test]
    fn test_corrupt_document_surfaces_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("global.json"), "not json").unwrap();

        let storage = storage_in(dir.path());
        let err = storage
            .load("editor.foo", StorageScope::Global)
            .unwrap_err();
        assert!(err.to_string().contains("failed to parse state file"));
    }

    #[test]
    fn test_non_object_document_surfaces_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("global.json"), "[1, 2, 3]").unwrap();

        let storage = storage_in(dir.path());
        assert!(storage.load("editor.foo", StorageScope::Global).is_err());
    }
}
