//! Property store backends.
//!
//! A property store maps string keys to string values. Records are encoded
//! by the caller; backends never look inside values.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{Result, StoreError};

/// String-keyed, string-valued store the issue records live in.
pub trait PropertyStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_property(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set_property(&mut self, key: &str, value: &str) -> Result<()>;

    /// All keys currently stored, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn keys(&self) -> Result<Vec<String>>;
}

impl<P: PropertyStore + ?Sized> PropertyStore for &mut P {
    fn get_property(&self, key: &str) -> Result<Option<String>> {
        (**self).get_property(key)
    }

    fn set_property(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_property(key, value)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// `HashMap`-backed property store.
#[derive(Debug, Clone, Default)]
pub struct MemoryProperties {
    values: HashMap<String, String>,
}

impl MemoryProperties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PropertyStore for MemoryProperties {
    fn get_property(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set_property(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.values.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

// ============================================================================
// File-backed
// ============================================================================

/// Property store persisted as a single JSON object file.
///
/// Nothing is cached: reads load the file, writes replace it atomically
/// (write-to-temp + rename). A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileProperties {
    path: PathBuf,
}

impl FileProperties {
    /// Use the properties file at `path`. The file need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create an empty properties file, including parent directories.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory or file cannot be written.
    pub fn init(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        if let Some(parent) = store.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        store.save(&BTreeMap::new())?;
        Ok(store)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&contents).map_err(|e| {
            StoreError::Backend(format!(
                "cannot parse properties file {}: {e}",
                self.path.display()
            ))
        })
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| StoreError::Backend(format!("cannot serialize properties: {e}")))?;

        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path)?;
        writeln!(file, "{json}")?;
        file.flush()?;
        drop(file);

        fs::rename(&tmp_path, &self.path)?;
        trace!(path = %self.path.display(), entries = values.len(), "Wrote properties file");
        Ok(())
    }
}

impl PropertyStore for FileProperties {
    fn get_property(&self, key: &str) -> Result<Option<String>> {
        let mut values = self.load()?;
        Ok(values.remove(key))
    }

    fn set_property(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_keys().collect())
    }
}
