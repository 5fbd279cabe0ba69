use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::debug;

/// Persistence collaborator with load-all/save-all semantics, keyed by an
/// opaque collection name. Invoked at startup and after every mutation; there
/// are no partial or delta writes.
pub trait StoreBackend: Send + Sync {
    fn load(&self, collection: &str) -> Result<Option<Value>>;
    fn save(&self, collection: &str, value: &Value) -> Result<()>;
}

/// One JSON document per collection under a data directory.
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating data directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }
}

impl StoreBackend for JsonFileBackend {
    fn load(&self, collection: &str) -> Result<Option<Value>> {
        let path = self.path_for(collection);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let value = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(value))
    }

    fn save(&self, collection: &str, value: &Value) -> Result<()> {
        let path = self.path_for(collection);
        debug!("Persisting collection {} to {}", collection, path.display());
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(&path, raw).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// In-memory backend, used when no data directory is configured and by tests.
#[derive(Default)]
pub struct MemoryBackend {
    collections: Mutex<HashMap<String, Value>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryBackend {
    fn load(&self, collection: &str) -> Result<Option<Value>> {
        let collections = self
            .collections
            .lock()
            .map_err(|_| anyhow!("memory backend lock poisoned"))?;
        Ok(collections.get(collection).cloned())
    }

    fn save(&self, collection: &str, value: &Value) -> Result<()> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| anyhow!("memory backend lock poisoned"))?;
        collections.insert(collection.to_string(), value.clone());
        Ok(())
    }
}
