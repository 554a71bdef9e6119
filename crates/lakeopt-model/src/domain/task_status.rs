use serde::{Deserialize, Serialize};

/// Current lifecycle state of a task.
///
/// A task starts in `Running` and moves exactly once to `Done` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Background work is still in flight.
    Running,
    /// Optimization finished; a result is stored.
    Done,
    /// Optimization failed; an error descriptor is stored.
    Failed,
}

impl TaskStatus {
    /// Returns `true` if the task is in a terminal state (won't transition further).
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Done | TaskStatus::Failed)
    }
}
