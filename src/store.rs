//! In-memory task store.
//!
//! # Invariants
//! - IDs are assigned as `max(existing) + 1` (or `1` when empty) and are never
//!   handed out twice, even after the highest task is deleted.
//! - Titles are never empty or whitespace-only.
//! - Tasks keep insertion order.

use crate::error::ValidationError;
use crate::task::{Task, TaskId};
use chrono::{Duration, Local};
use log::{debug, warn};

#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    last_id: TaskId,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            last_id: 0,
        }
    }

    /// Creates a store holding the demonstration tasks.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        store.initialize();
        store
    }

    /// Appends the fixed seed tasks:
    /// `Buy milk` (Shopping), `Call mom` (Personal) and a completed
    /// `Finish report` (Work), created one, two and three days ago.
    pub fn initialize(&mut self) {
        let now = Local::now();
        let seeds = [
            ("Buy milk", "Shopping", 1, false),
            ("Call mom", "Personal", 2, false),
            ("Finish report", "Work", 3, true),
        ];
        for (title, category, days_ago, completed) in seeds {
            let Some(id) = self.next_id() else {
                warn!("event=store_seed_stopped module=store reason=ids_exhausted");
                break;
            };
            let mut task = Task::new(
                id,
                title.to_string(),
                category.to_string(),
                Vec::new(),
                now - Duration::days(days_ago),
            );
            if completed {
                task.mark_completed();
            }
            self.last_id = id;
            self.tasks.push(task);
        }
        debug!("event=store_seeded module=store count={}", self.tasks.len());
    }

    /// All tasks in insertion order.
    pub fn list_all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Creates a task and returns a snapshot of it.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyTitle`] when `title` is empty or only
    /// whitespace, and [`ValidationError::IdsExhausted`] once `TaskId::MAX`
    /// has been handed out. The store is left untouched in both cases.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        category: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<Task, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let id = self.next_id().ok_or(ValidationError::IdsExhausted)?;
        let task = Task::new(id, title, category.into(), tags, Local::now());
        self.last_id = id;
        self.tasks.push(task.clone());
        debug!(
            "event=task_added module=store id={} category={:?} tags={}",
            id,
            task.category(),
            task.tags().len()
        );
        Ok(task)
    }

    /// Marks a task as completed. Returns `false` when no task has `id`.
    pub fn complete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id() == id) {
            Some(task) => {
                task.mark_completed();
                debug!("event=task_completed module=store id={}", id);
                true
            }
            None => false,
        }
    }

    /// Removes a task. Returns `false` when no task has `id`.
    pub fn delete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|t| t.id() == id) {
            Some(index) => {
                self.tasks.remove(index);
                debug!("event=task_deleted module=store id={}", id);
                true
            }
            None => false,
        }
    }

    /// Tasks whose category equals `category` exactly. A blank `category`
    /// selects every task.
    pub fn tasks_by_category(&self, category: &str) -> Vec<&Task> {
        if category.trim().is_empty() {
            return self.tasks.iter().collect();
        }
        self.tasks
            .iter()
            .filter(|t| t.category() == category)
            .collect()
    }

    /// Distinct non-empty categories in first-occurrence order.
    pub fn unique_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for task in &self.tasks {
            let category = task.category();
            if !category.is_empty() && !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
        categories
    }

    /// `None` when the ID space is used up.
    fn next_id(&self) -> Option<TaskId> {
        let max_existing = self.tasks.iter().map(Task::id).max().unwrap_or(0);
        max_existing.max(self.last_id).checked_add(1)
    }
}
