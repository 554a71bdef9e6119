use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
    time::SystemTime,
};

use lakeopt_model::{TaskId, TaskOutcome, TaskRecord};
use tracing::warn;

/// In-memory task storage.
///
/// The single shared mutable resource of the service: the API inserts on
/// create and reads on every poll, each task's background unit writes its
/// terminal outcome exactly once. Cloning the handle shares the map.
///
/// Records are never evicted; they live for the process lifetime, so a
/// long-running process accumulates one record per submitted task.
#[derive(Clone, Default)]
pub struct TaskStore {
    inner: Arc<RwLock<HashMap<TaskId, TaskRecord>>>,
}

impl TaskStore {
    /// Create empty task storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new task in the RUNNING state.
    ///
    /// Identifiers are drawn from a 128-bit random space; a duplicate means
    /// the id generator is broken, not that two callers raced.
    pub fn create(&self, id: TaskId) {
        let mut tasks = self.inner.write().unwrap();

        let prev = tasks.insert(id.clone(), TaskRecord::running(id.clone()));
        assert!(prev.is_none(), "duplicate task id {id}");
    }

    /// Snapshot of a task record, `None` if the id was never created.
    pub fn get(&self, id: &TaskId) -> Option<TaskRecord> {
        let tasks = self.inner.read().unwrap();
        tasks.get(id).cloned()
    }

    /// Write a task's terminal outcome.
    ///
    /// Terminal states are immutable: a second write for the same id is
    /// dropped. The runner is the only writer per id, so hitting either
    /// guard means a bug there rather than a caller race.
    pub fn complete(&self, id: &TaskId, outcome: TaskOutcome) {
        let mut tasks = self.inner.write().unwrap();

        match tasks.get_mut(id) {
            None => warn!(task_id = %id, "completion for unknown task dropped"),
            Some(record) if record.outcome.is_some() => {
                warn!(task_id = %id, "task already terminal, completion dropped");
            }
            Some(record) => {
                record.outcome = Some(outcome);
                record.updated_at = SystemTime::now();
            }
        }
    }
}
