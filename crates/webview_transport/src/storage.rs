//! Durable key/value text storage backing UI state outside native mode.
//!
//! The browser adapter wraps `window.localStorage`, which is synchronous, so this contract is
//! synchronous too. Values are raw JSON text; the transport owns serialization.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::{bridge, TransportError};

/// Synchronous text store keyed by string.
pub trait StateStorage {
    /// Loads the raw text stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn load_raw(&self, key: &str) -> Result<Option<String>, TransportError>;

    /// Stores `raw` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or rejects the write.
    fn save_raw(&self, key: &str, raw: &str) -> Result<(), TransportError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser storage backed by `window.localStorage`.
///
/// Off `wasm32` there is no local storage: loads return `None` and saves fail.
pub struct LocalStateStorage;

impl StateStorage for LocalStateStorage {
    fn load_raw(&self, key: &str) -> Result<Option<String>, TransportError> {
        bridge::local_storage_get(key)
    }

    fn save_raw(&self, key: &str, raw: &str) -> Result<(), TransportError> {
        bridge::local_storage_set(key, raw)
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory storage. Clones share the same map.
pub struct MemoryStateStorage {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStateStorage {
    /// Removes every stored value, as when the host clears storage externally.
    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }
}

impl StateStorage for MemoryStateStorage {
    fn load_raw(&self, key: &str) -> Result<Option<String>, TransportError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_raw(&self, key: &str, raw: &str) -> Result<(), TransportError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }
}

type StateMap = BTreeMap<String, String>;

#[derive(Debug, Clone)]
/// Storage persisted as a single JSON map file, for standalone hosts outside a browser.
pub struct FileStateStorage {
    file: PathBuf,
}

impl FileStateStorage {
    /// File name of the state map inside the storage root.
    pub const FILE_NAME: &'static str = "webview_state.json";

    /// Creates storage rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self, TransportError> {
        let root = root.as_ref();
        fs::create_dir_all(root).map_err(|err| {
            TransportError::Storage(format!(
                "failed to create state dir {}: {err}",
                root.display()
            ))
        })?;
        Ok(Self {
            file: root.join(Self::FILE_NAME),
        })
    }

    fn load_map(&self) -> Result<StateMap, TransportError> {
        if !self.file.exists() {
            return Ok(StateMap::new());
        }
        let raw = fs::read_to_string(&self.file).map_err(|err| {
            TransportError::Storage(format!("failed to read {}: {err}", self.file.display()))
        })?;
        if raw.trim().is_empty() {
            return Ok(StateMap::new());
        }
        serde_json::from_str(&raw).map_err(|err| {
            TransportError::Storage(format!(
                "failed to parse state map {}: {err}",
                self.file.display()
            ))
        })
    }

    fn save_map(&self, map: &StateMap) -> Result<(), TransportError> {
        let serialized = serde_json::to_string(map)
            .map_err(|err| TransportError::Serialize(format!("state map: {err}")))?;
        fs::write(&self.file, serialized).map_err(|err| {
            TransportError::Storage(format!("failed to write {}: {err}", self.file.display()))
        })
    }
}

impl StateStorage for FileStateStorage {
    fn load_raw(&self, key: &str) -> Result<Option<String>, TransportError> {
        Ok(self.load_map()?.get(key).cloned())
    }

    fn save_raw(&self, key: &str, raw: &str) -> Result<(), TransportError> {
        let mut map = self.load_map()?;
        map.insert(key.to_string(), raw.to_string());
        self.save_map(&map)
    }
}

/// Returns the state storage matching the compile target: `localStorage` on `wasm32`, in-memory
/// elsewhere.
pub fn platform_state_storage() -> Rc<dyn StateStorage> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStateStorage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryStateStorage::default())
    }
}

/// Returns durable state storage for the compile target: `localStorage` on `wasm32`, a
/// [`FileStateStorage`] under `root` elsewhere.
///
/// # Errors
///
/// Returns [`TransportError::Storage`] when the directory under `root` cannot be created.
pub fn platform_state_storage_in(
    root: impl AsRef<Path>,
) -> Result<Rc<dyn StateStorage>, TransportError> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = root;
        Ok(Rc::new(LocalStateStorage))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(Rc::new(FileStateStorage::from_root(root)?))
    }
}
