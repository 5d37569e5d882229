// Scoped storage - persistence backend for component state
//
// Persisted state is partitioned into two scopes: Global (shared across
// every workspace) and Workspace (specific to the open project). A backend
// stores one structured value per component id per scope. Components never
// talk to a backend directly - they go through their memento, which owns
// the lazy-load/save-all bookkeeping.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use anyhow::Result;
use serde_json::Value;

/// Partition of persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageScope {
    /// Shared across all usage contexts.
    Global,
    /// Specific to the current project/session.
    Workspace,
}

impl StorageScope {
    /// Both scopes, in save order.
    pub fn all() -> &'static [StorageScope] {
        &[StorageScope::Global, StorageScope::Workspace]
    }

    /// Lowercase name for keys, file names, and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageScope::Global => "global",
            StorageScope::Workspace => "workspace",
        }
    }
}

/// Storage capability consumed by components.
///
/// Implementations are synchronous; call sites on the UI thread treat a
/// load/save as an ordinary fallible call. Failures propagate unchanged -
/// no retries at this layer.
pub trait Storage {
    /// Load the value stored under `key` in `scope`, if any.
    fn load(&self, key: &str, scope: StorageScope) -> Result<Option<Value>>;

    /// Save `value` under `key` in `scope`, replacing any previous value.
    fn save(&self, key: &str, scope: StorageScope, value: &Value) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_names() {
        assert_eq!(StorageScope::Global.as_str(), "global");
        assert_eq!(StorageScope::Workspace.as_str(), "workspace");
        assert_eq!(StorageScope::all().len(), 2);
    }
}
