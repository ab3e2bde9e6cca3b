//! Error types for the task store.

use thiserror::Error;

/// Reasons `TaskStore::add` refuses to create a task.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("no task ids left")]
    IdsExhausted,
}
