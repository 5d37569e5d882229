// Memento - lazily loaded, scoped persisted state for a component id
//
// A memento is the structured snapshot a component keeps between runs. It is
// keyed by component id, so every instance of the same component kind reads
// and writes the same stored value. Each scope is loaded on first access and
// handed out as a live JSON object; save() writes every loaded scope back
// wholesale. Scopes never touched are never written.

use crate::storage::{Storage, StorageScope};
use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Persisted, structured snapshot of component state, scoped and keyed by
/// component id.
pub struct Memento {
    id: String,
    global: Option<LoadedScope>,
    workspace: Option<LoadedScope>,
}

/// A scope once loaded: the live object plus the backend it came from,
/// remembered so save() needs no further wiring.
struct LoadedScope {
    storage: Arc<dyn Storage>,
    data: Map<String, Value>,
}

impl Memento {
    /// A handle bound to `id`. Nothing is loaded yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            global: None,
            workspace: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The live state object for `scope`, loaded from `storage` on first
    /// access. Later calls return the same object; mutations stay visible
    /// across calls until `save()` persists them.
    pub fn get(
        &mut self,
        storage: &Arc<dyn Storage>,
        scope: StorageScope,
    ) -> Result<&mut Map<String, Value>> {
        let slot = match scope {
            StorageScope::Global => &mut self.global,
            StorageScope::Workspace => &mut self.workspace,
        };

        let loaded = match slot {
            Some(loaded) => loaded,
            None => {
                let data = match storage.load(&self.id, scope).with_context(|| {
                    format!("failed to load {} state for '{}'", scope.as_str(), self.id)
                })? {
                    Some(Value::Object(map)) => map,
                    Some(_) => bail!(
                        "stored {} state for '{}' is not an object",
                        scope.as_str(),
                        self.id
                    ),
                    None => Map::new(),
                };
                tracing::debug!("loaded {} state for '{}'", scope.as_str(), self.id);
                slot.insert(LoadedScope {
                    storage: Arc::clone(storage),
                    data,
                })
            }
        };

        Ok(&mut loaded.data)
    }

    /// Whether `scope` has been loaded by this handle.
    pub fn is_loaded(&self, scope: StorageScope) -> bool {
        match scope {
            StorageScope::Global => self.global.is_some(),
            StorageScope::Workspace => self.workspace.is_some(),
        }
    }

    /// Write every scope loaded so far back to its backend. Scopes never
    /// loaded are skipped. Safe to call any number of times.
    pub fn save(&self) -> Result<()> {
        for (scope, slot) in [
            (StorageScope::Global, &self.global),
            (StorageScope::Workspace, &self.workspace),
        ] {
            if let Some(loaded) = slot {
                loaded
                    .storage
                    .save(&self.id, scope, &Value::Object(loaded.data.clone()))
                    .with_context(|| {
                        format!("failed to save {} state for '{}'", scope.as_str(), self.id)
                    })?;
            }
        }
        Ok(())
    }
}
