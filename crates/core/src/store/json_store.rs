// JSON-file store
// One JSON blob per storage key, named after the local-storage keys the
// browser original used. A missing dashboard blob is seeded with defaults and
// written back, matching first-load behavior.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::{AdminData, DashboardData};
use crate::store::seed::{default_admin_data, default_dashboard_data};
use crate::store::{MenuStore, StoreError};

const DASHBOARD_FILE: &str = "menucraft_dashboard_data.json";
const ADMIN_FILE: &str = "menucraft_admin_data.json";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dashboard_path(&self) -> PathBuf {
        self.dir.join(DASHBOARD_FILE)
    }

    pub fn admin_path(&self) -> PathBuf {
        self.dir.join(ADMIN_FILE)
    }

    fn read<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|error| StoreError::Corrupt {
            message: format!("{}: {error}", path.display()),
        })
    }

    fn write<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(value).map_err(|error| StoreError::Corrupt {
            message: error.to_string(),
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl MenuStore for JsonFileStore {
    fn load_dashboard(&self) -> Result<DashboardData, StoreError> {
        let path = self.dashboard_path();
        if path.exists() {
            return Self::read(&path);
        }

        debug!(path = %path.display(), "no stored dashboard data, seeding defaults");
        let data = default_dashboard_data();
        self.save_dashboard(&data)?;
        Ok(data)
    }

    fn save_dashboard(&self, data: &DashboardData) -> Result<(), StoreError> {
        self.write(&self.dashboard_path(), data)
    }

    fn load_admin(&self) -> Result<AdminData, StoreError> {
        let path = self.admin_path();
        if path.exists() {
            return Self::read(&path);
        }

        let data = default_admin_data();
        self.save_admin(&data)?;
        Ok(data)
    }

    fn save_admin(&self, data: &AdminData) -> Result<(), StoreError> {
        self.write(&self.admin_path(), data)
    }

    fn clear(&self) -> Result<(), StoreError> {
        for path in [self.dashboard_path(), self.admin_path()] {
            if path.exists() {
                std::fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_dashboard_is_seeded_and_persisted() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let first = store.load_dashboard().unwrap();
        assert!(store.dashboard_path().exists());

        // second load reads back exactly what was seeded
        let second = store.load_dashboard().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn saved_edits_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let mut data = store.load_dashboard().unwrap();
        data.restaurant.name = "Anjappar".to_string();
        store.save_dashboard(&data).unwrap();

        let reloaded = store.load_dashboard().unwrap();
        assert_eq!(reloaded.restaurant.name, "Anjappar");
    }

    #[test]
    fn corrupt_blob_surfaces_a_typed_error() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(store.dashboard_path(), "{not json").unwrap();

        match store.load_dashboard() {
            Err(StoreError::Corrupt { message }) => {
                assert!(message.contains(DASHBOARD_FILE));
            }
            other => panic!("expected corrupt error, got {other:?}"),
        }
    }

    #[test]
    fn clear_removes_both_blobs() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.load_dashboard().unwrap();
        store.load_admin().unwrap();

        store.clear().unwrap();

        assert!(!store.dashboard_path().exists());
        assert!(!store.admin_path().exists());
    }
}
