use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use gaman_core::storage::KeyValueStore;
use gaman_core::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::StorageError;

const CURRENT_VERSION: u32 = 1;

/// A string key-value store persisted as one JSON file.
///
/// Every write rewrites the whole file. A missing or empty file reads as an
/// empty store. Reads report a corrupt file as an error; a write moves it
/// aside to `<name>.corrupt` and starts over, so saving always overwrites.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    lock: Mutex<()>,
}

#[derive(Serialize, Deserialize, Default)]
struct StoreFile {
    version: u32,
    items: HashMap<String, String>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn with_items<F>(&self, op: F) -> std::result::Result<(), StorageError>
    where
        F: FnOnce(&mut HashMap<String, String>),
    {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut items = match self.load_locked() {
            Ok(items) => items,
            Err(e @ (StorageError::Corrupt(_) | StorageError::UnsupportedVersion(_))) => {
                self.quarantine_locked(&e)?;
                HashMap::new()
            }
            Err(e) => return Err(e),
        };
        op(&mut items);
        self.persist_locked(items)
    }

    fn read_items(&self) -> std::result::Result<HashMap<String, String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        self.load_locked()
    }

    fn load_locked(&self) -> std::result::Result<HashMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let raw = fs::read(&self.path).map_err(StorageError::Read)?;
        if raw.is_empty() {
            return Ok(HashMap::new());
        }

        let file: StoreFile = serde_json::from_slice(&raw)?;
        if file.version != CURRENT_VERSION {
            return Err(StorageError::UnsupportedVersion(file.version));
        }
        Ok(file.items)
    }

    fn quarantine_locked(&self, cause: &StorageError) -> std::result::Result<(), StorageError> {
        let mut aside = self.path.clone().into_os_string();
        aside.push(".corrupt");
        let aside = PathBuf::from(aside);
        warn!(
            "Unreadable store {} ({}), moving it to {}",
            self.path.display(),
            cause,
            aside.display()
        );
        fs::rename(&self.path, &aside).map_err(StorageError::Write)
    }

    fn persist_locked(
        &self,
        items: HashMap<String, String>,
    ) -> std::result::Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StorageError::Write)?;
            }
        }

        let file = StoreFile {
            version: CURRENT_VERSION,
            items,
        };
        let json = serde_json::to_string_pretty(&file).map_err(|e| {
            StorageError::Write(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
        fs::write(&self.path, json).map_err(StorageError::Write)?;
        debug!("Wrote {} keys to {}", file.items.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut items = self.read_items()?;
        Ok(items.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.with_items(|items| {
            items.insert(key.to_string(), value.to_string());
        })?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.with_items(|items| {
            items.remove(key);
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaman_core::errors::Error;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn round_trip() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("store.json");
        let store = FileKeyValueStore::new(file.clone());

        assert!(store.get_item("alpha").unwrap().is_none());
        store.set_item("alpha", "value").unwrap();
        assert_eq!(store.get_item("alpha").unwrap().as_deref(), Some("value"));
        assert!(file.exists());

        store.remove_item("alpha").unwrap();
        assert!(store.get_item("alpha").unwrap().is_none());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested").join("deeper").join("store.json");
        let store = FileKeyValueStore::new(file.clone());

        store.set_item("k", "v").unwrap();
        assert!(file.exists());
    }

    #[test]
    fn empty_file_reads_as_empty_store() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("store.json");
        fs::write(&file, "").unwrap();

        let store = FileKeyValueStore::new(file);
        assert!(store.get_item("k").unwrap().is_none());
    }

    #[test]
    fn corrupt_file_is_read_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("store.json");
        fs::write(&file, "{oops").unwrap();

        let store = FileKeyValueStore::new(file);
        assert!(matches!(store.get_item("k"), Err(Error::StorageRead(_))));
    }

    #[test]
    fn unknown_version_is_read_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("store.json");
        fs::write(&file, r#"{"version":9,"items":{}}"#).unwrap();

        let store = FileKeyValueStore::new(file);
        assert!(matches!(store.get_item("k"), Err(Error::StorageRead(_))));
    }

    #[test]
    fn write_over_corrupt_file_starts_fresh() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("store.json");
        fs::write(&file, r#"{"version":9,"items":{"old":"x"}}"#).unwrap();

        let store = FileKeyValueStore::new(file.clone());
        store.set_item("k", "v").unwrap();

        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
        assert!(store.get_item("old").unwrap().is_none());
        let aside = fs::read_to_string(dir.path().join("store.json.corrupt")).unwrap();
        assert!(aside.contains("\"version\":9"));
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("store.json");
        FileKeyValueStore::new(file.clone())
            .set_item("gaman-goals-v1", "[]")
            .unwrap();

        let reopened = FileKeyValueStore::new(file);
        assert_eq!(
            reopened.get_item("gaman-goals-v1").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn backs_goal_repository() {
        use gaman_core::goals::{Goal, GoalRepositoryTrait};
        use gaman_core::storage::LocalGoalRepository;

        let dir = tempdir().unwrap();
        let store = Arc::new(FileKeyValueStore::new(dir.path().join("store.json")));
        let repo = LocalGoalRepository::new(store.clone());
        let goals = vec![Goal {
            id: "abc".into(),
            name: "Camera".into(),
            target: 50000,
            saved: 0,
            image: None,
            history: Vec::new(),
            completed: false,
        }];
        repo.save_goals(&goals).unwrap();

        let reopened = LocalGoalRepository::new(Arc::new(FileKeyValueStore::new(
            store.path().to_path_buf(),
        )));
        assert_eq!(reopened.load_goals(), goals);
    }

    #[test]
    fn corrupt_file_degrades_to_no_goals() {
        use gaman_core::goals::GoalRepositoryTrait;
        use gaman_core::storage::LocalGoalRepository;

        let dir = tempdir().unwrap();
        let file = dir.path().join("store.json");
        fs::write(&file, "garbage").unwrap();

        let repo = LocalGoalRepository::new(Arc::new(FileKeyValueStore::new(file)));
        assert!(repo.load_goals().is_empty());
    }

    #[test]
    fn goals_created_after_corruption_are_saved() {
        use gaman_core::events::MockDomainEventSink;
        use gaman_core::goals::{GoalService, NewGoal};
        use gaman_core::storage::LocalGoalRepository;

        let dir = tempdir().unwrap();
        let file = dir.path().join("store.json");
        fs::write(&file, "garbage").unwrap();

        let open = |path: &Path| {
            GoalService::load(
                Arc::new(LocalGoalRepository::new(Arc::new(FileKeyValueStore::new(
                    path.to_path_buf(),
                )))),
                Arc::new(MockDomainEventSink::new()),
            )
        };

        let mut service = open(&file);
        assert!(service.list_goals().is_empty());
        let goal = service.create_goal(NewGoal::new("Camera", 100)).unwrap();

        let reopened = open(&file);
        assert_eq!(reopened.list_goals(), [goal].as_slice());
        assert!(dir.path().join("store.json.corrupt").exists());
    }
}
