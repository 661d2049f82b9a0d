use std::sync::Arc;

use log::{debug, error};

use crate::constants::GOALS_STORAGE_KEY;
use crate::errors::{Error, Result};
use crate::goals::{Goal, GoalRepositoryTrait};

use super::KeyValueStore;

/// Persists the whole goal collection as one JSON array under a single
/// versioned key.
pub struct LocalGoalRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl LocalGoalRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, GOALS_STORAGE_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        LocalGoalRepository {
            store,
            key: key.into(),
        }
    }

    fn read_goals(&self) -> Result<Vec<Goal>> {
        match self.store.get_item(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }
}

impl GoalRepositoryTrait for LocalGoalRepository {
    fn load_goals(&self) -> Vec<Goal> {
        match self.read_goals() {
            Ok(goals) => {
                debug!("Loaded {} goals from '{}'", goals.len(), self.key);
                goals
            }
            Err(e) => {
                error!(
                    "Could not read stored goals under '{}', starting empty: {}",
                    self.key, e
                );
                Vec::new()
            }
        }
    }

    fn save_goals(&self, goals: &[Goal]) -> Result<()> {
        let raw =
            serde_json::to_string(goals).map_err(|e| Error::StorageWrite(e.to_string()))?;
        self.store.set_item(&self.key, &raw)
    }
}
