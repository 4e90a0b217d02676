use serde_json;
use tracing::warn;

use crate::domain::task::Task;
use crate::repository::store::{StoreError, StoreHandle};

const TASKS_KEY: &str = "tasks";

/// Persists the structured task sequence as a JSON array under a fixed
/// store key.
#[derive(Clone)]
pub struct TaskRepository {
    store: StoreHandle,
}

impl TaskRepository {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Load the full sequence. Absent or malformed data resets to empty;
    /// no error propagates out of the load path.
    pub fn load(&self) -> Vec<Task> {
        match self.store.get(TASKS_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(%err, "stored tasks are malformed, starting with an empty list");
                    Vec::new()
                }
            },
        }
    }

    /// Write the full sequence, replacing whatever was stored.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(tasks)?;
        self.store.set(TASKS_KEY, raw)
    }
}
