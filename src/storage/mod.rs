//! Persistence gateway for pocketbook
//!
//! The whole application state is persisted as one JSON blob. Core
//! transformation and aggregation functions never touch storage directly;
//! they accept and return `AppData` values, and callers go through the
//! `DataStore` trait. Overlapping saves are last-writer-wins: there is no
//! optimistic concurrency check on the blob.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::cell::RefCell;
use std::path::PathBuf;

use crate::config::paths::PocketbookPaths;
use crate::error::PocketbookResult;
use crate::models::AppData;

/// Load/save contract for the single AppData blob
pub trait DataStore {
    /// Load the stored AppData. If nothing was previously stored, persists
    /// and returns a freshly-initialized empty AppData.
    fn load(&self) -> PocketbookResult<AppData>;

    /// Overwrite the stored blob with `data`
    fn save(&self, data: &AppData) -> PocketbookResult<()>;
}

/// JSON file-backed store holding the blob at `<base_dir>/data.json`
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the resolved pocketbook paths
    pub fn new(paths: &PocketbookPaths) -> PocketbookResult<Self> {
        paths.ensure_directories()?;
        Ok(Self {
            path: paths.data_file(),
        })
    }

    /// Create a store for an explicit file path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The backing file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl DataStore for JsonFileStore {
    fn load(&self) -> PocketbookResult<AppData> {
        match read_json::<AppData, _>(&self.path)? {
            Some(data) => Ok(data),
            None => {
                let initial = AppData::empty();
                write_json_atomic(&self.path, &initial)?;
                Ok(initial)
            }
        }
    }

    fn save(&self, data: &AppData) -> PocketbookResult<()> {
        write_json_atomic(&self.path, data)
    }
}

/// In-memory store used as a test double for the persistence gateway
#[derive(Default)]
pub struct MemoryStore {
    blob: RefCell<Option<AppData>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with data
    pub fn with_data(data: AppData) -> Self {
        Self {
            blob: RefCell::new(Some(data)),
        }
    }
}

impl DataStore for MemoryStore {
    fn load(&self) -> PocketbookResult<AppData> {
        let mut blob = self.blob.borrow_mut();
        match blob.as_ref() {
            Some(data) => Ok(data.clone()),
            None => {
                let initial = AppData::empty();
                *blob = Some(initial.clone());
                Ok(initial)
            }
        }
    }

    fn save(&self, data: &AppData) -> PocketbookResult<()> {
        *self.blob.borrow_mut() = Some(data.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryKind};
    use tempfile::TempDir;

    #[test]
    fn test_file_store_initializes_empty_blob() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::with_path(temp_dir.path().join("data.json"));

        let data = store.load().unwrap();
        assert_eq!(data, AppData::empty());

        // First load persists the empty blob
        assert!(store.path().exists());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::with_path(temp_dir.path().join("data.json"));

        let mut data = AppData::empty();
        data.ensure_default_wallet();
        data.add_category(Category::new("Rent", CategoryKind::Expense))
            .unwrap();
        store.save(&data).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_last_writer_wins() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::with_path(temp_dir.path().join("data.json"));

        let mut first = AppData::empty();
        first.ensure_default_wallet();
        let mut second = AppData::empty();
        second
            .add_category(Category::new("Late", CategoryKind::Income))
            .unwrap();

        store.save(&first).unwrap();
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap(), second);
    }

    #[test]
    fn test_memory_store_behaves_like_gateway() {
        let store = MemoryStore::new();

        let data = store.load().unwrap();
        assert_eq!(data, AppData::empty());

        let mut updated = data;
        updated.ensure_default_wallet();
        store.save(&updated).unwrap();

        assert_eq!(store.load().unwrap(), updated);
    }
}
