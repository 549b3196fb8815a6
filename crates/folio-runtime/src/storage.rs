#![forbid(unsafe_code)]

//! Key/value persistence behind the stores.
//!
//! Stores hold an `Rc<dyn StorageBackend>` and treat every error as
//! non-fatal: they log and keep their in-memory state. Backends therefore
//! report failures faithfully instead of hiding them.
//!
//! # Backends
//!
//! | Backend | Use |
//! |---------|-----|
//! | [`MemoryStorage`] | tests, previews, hosts without persistence |
//! | [`FileStorage`] | native hosts; one JSON object file |
//! | [`UnavailableStorage`] | storage disabled; every call fails |
//!
//! The browser `localStorage` backend lives in `folio-web`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;
use tracing::debug;

/// Errors reported by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("stored data is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key/value store.
///
/// Methods take `&self`; backends use interior mutability so one handle can
/// be shared by both stores.
pub trait StorageBackend {
    /// Short label for log fields.
    fn name(&self) -> &str;

    /// `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

// ─── Memory ─────────────────────────────────────────────────────────────

/// In-memory backend. Clones share the same map, so a clone handed to a
/// second store behaves like the same browser profile after a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated storage.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Rc::new(RefCell::new(map)),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Direct read without going through the trait.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// ─── Unavailable ────────────────────────────────────────────────────────

/// Backend that refuses every operation, like browser storage in a
/// locked-down private window.
#[derive(Debug, Clone)]
pub struct UnavailableStorage {
    reason: String,
}

impl UnavailableStorage {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> StorageResult<T> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }
}

impl StorageBackend for UnavailableStorage {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        self.fail()
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        self.fail()
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        self.fail()
    }
}

// ─── File ───────────────────────────────────────────────────────────────

/// JSON-object file backend.
///
/// The whole file is one flat object of string values:
///
/// ```json
/// {
///   "portfolio-accent-colors": "{\"name\":\"Mint\",...}",
///   "theme": "dark"
/// }
/// ```
///
/// Entries are cached after [`FileStorage::open`]; every mutation rewrites
/// the file with a temp-file-then-rename so a crash never leaves a torn
/// file behind. The parent directory must already exist.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open (or lazily create) the store at `path`.
    ///
    /// - **Missing file** opens empty; nothing is written until the first
    ///   mutation.
    /// - **Corrupted file** returns [`StorageError::Serialization`].
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), entries = entries.len(), "opened file storage");
        Ok(Self {
            path,
            entries: RefCell::new(entries),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(&*self.entries.borrow())?;
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, json)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl StorageBackend for FileStorage {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let previous = self
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        if previous.as_deref() == Some(value) {
            return Ok(());
        }
        self.flush()
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        if self.entries.borrow_mut().remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }
}
