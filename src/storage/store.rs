//! String key-value stores backing persisted user state.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

use crate::error::LexiconResult;

/// Named string values, stored as serialized text
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> LexiconResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> LexiconResult<()>;
    fn remove(&self, key: &str) -> LexiconResult<()>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<K> {
    fn get(&self, key: &str) -> LexiconResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> LexiconResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> LexiconResult<()> {
        (**self).remove(key)
    }
}

/// Process-local store, used by tests and one-shot runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LexiconResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> LexiconResult<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> LexiconResult<()> {
        self.values.lock().remove(key);
        Ok(())
    }
}

/// JSON object on disk, one entry per key
///
/// The whole map is rewritten on every change through a temp file in the
/// same directory followed by a rename, so readers never see a partial file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open `path`, starting empty if it does not exist yet
    ///
    /// A file that is not a JSON string map is logged and ignored; it gets
    /// replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> LexiconResult<Self> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                log::warn!("Ignoring unreadable state file {}: {e}", path.display());
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    fn flush(&self, values: &BTreeMap<String, String>) -> LexiconResult<()> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)?;

        let content = serde_json::to_vec_pretty(values)?;
        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(&content)?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;

        log::trace!("Wrote {} keys to {}", values.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LexiconResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> LexiconResult<()> {
        let mut values = self.values.lock();
        values.insert(key.to_string(), value.to_string());
        self.flush(&values)
    }

    fn remove(&self, key: &str) -> LexiconResult<()> {
        let mut values = self.values.lock();
        if values.remove(key).is_some() {
            self.flush(&values)?;
        }
        Ok(())
    }
}

/// Read a JSON-encoded list stored under `key`
///
/// Missing or corrupt values read as an empty list.
pub(crate) fn read_list<K: KeyValueStore + ?Sized>(store: &K, key: &str) -> LexiconResult<Vec<String>> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Discarding corrupt '{key}' value: {e}");
        Vec::new()
    }))
}

pub(crate) fn write_list<K: KeyValueStore + ?Sized>(
    store: &K,
    key: &str,
    list: &[String],
) -> LexiconResult<()> {
    store.set(key, &serde_json::to_string(list)?)
}
