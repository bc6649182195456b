//! # Storage Adapters
//!
//! The persistence seam: a key-value blob interface sized exactly to what
//! the widget needs from the browser's `localStorage`, plus the two
//! implementations the store ships with.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storage Seam                                        │
//! │                                                                         │
//! │   CartStore ──save("cartItems", blob)──►  StorageAdapter (trait)        │
//! │             ◄─load("cartItems")────────                                 │
//! │                                              │                          │
//! │                              ┌───────────────┼───────────────┐          │
//! │                              ▼               ▼               ▼          │
//! │                       MemoryStorage    FileStorage     (embedder's     │
//! │                       (tests,          (one JSON file   own adapter:   │
//! │                        ephemeral)       per key in an    localStorage  │
//! │                                         app-data dir)    bridge, ...)  │
//! │                                                                         │
//! │  Semantics: save overwrites; load of a never-saved key is Ok(None),     │
//! │  not an error. Values are opaque strings to the adapter.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Adapter Trait
// =============================================================================

/// A place to keep string blobs between page loads.
///
/// Implementations must provide overwrite semantics on `save` and report a
/// never-saved key as `Ok(None)` - absence is an ordinary answer, not a
/// failure.
pub trait StorageAdapter {
    /// Persists `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Retrieves the value previously saved under `key`, if any.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;
}

/// Boxed adapters forward to their contents, so `CartStore<Box<dyn ...>>`
/// works for embedders that pick the backend at runtime.
impl<S: StorageAdapter + ?Sized> StorageAdapter for Box<S> {
    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).save(key, value)
    }

    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).load(key)
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-memory storage: a HashMap with the adapter semantics.
///
/// Used by tests and by embedders that want a session-only cart (nothing
/// survives the process).
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }
}

// =============================================================================
// File Storage
// =============================================================================

/// File-backed storage: one JSON file per key under a data directory.
///
/// The native stand-in for `localStorage`: same blobs, same keys, but in
/// the platform's app-data location so the cart survives process restarts.
///
/// ## File Layout
/// ```text
/// <data dir>/
/// ├── cartItems.json   ← serialized snapshot
/// └── cartTotal.json   ← cached display total
/// ```
///
/// Keys come from [`StoreConfig`](crate::StoreConfig), not from user input,
/// so they map to file names directly.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates file storage rooted at `dir`, creating the directory if
    /// needed.
    pub fn new(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(?dir, "file storage ready");
        Ok(FileStorage { dir })
    }

    /// Creates file storage in the platform's app-data directory.
    ///
    /// - Linux: `~/.local/share/vitrine`
    /// - macOS: `~/Library/Application Support/br.Vitrine.vitrine`
    /// - Windows: `%APPDATA%\Vitrine\vitrine\data`
    pub fn open_default() -> StoreResult<Self> {
        let dirs = ProjectDirs::from("br", "Vitrine", "vitrine").ok_or_else(|| {
            StoreError::DataDir {
                message: "no home directory available".to_string(),
            }
        })?;
        Self::new(dirs.data_dir())
    }

    /// The directory blobs live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageAdapter for FileStorage {
    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.blob_path(key);
        fs::write(&path, value)?;
        debug!(?path, bytes = value.len(), "blob saved");
        Ok(())
    }

    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
