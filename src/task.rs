use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Identifier handed out by [`crate::store::TaskStore`]. Never reused.
pub type TaskId = u32;

/// A single to-do item.
///
/// Fields are read-only outside the crate; the only mutation is
/// [`crate::store::TaskStore::complete`].
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Task {
    id: TaskId,
    title: String,
    is_completed: bool,
    created_date: DateTime<Local>,
    category: String, // empty means uncategorized
    tags: Vec<String>,
}

impl Task {
    pub(crate) fn new(
        id: TaskId,
        title: String,
        category: String,
        tags: Vec<String>,
        created_date: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            title,
            is_completed: false,
            created_date,
            category,
            tags,
        }
    }

    pub(crate) fn mark_completed(&mut self) {
        self.is_completed = true;
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn created_date(&self) -> DateTime<Local> {
        self.created_date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Part of the one-line task summary, used by renderers to style each piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// `"1. [X] "`
    Prefix,
    Title,
    /// `" (2024-05-01)"`
    Date,
    /// `" - Work"`, only for categorized tasks.
    Category,
    /// `" [urgent, important]"`, only when tags are present.
    Tags,
}

impl Task {
    /// The summary split into segments. Concatenated, they give the
    /// `Display` form.
    pub fn segments(&self) -> Vec<(Segment, String)> {
        let status = if self.is_completed { "[X]" } else { "[ ]" };
        let mut segments = vec![
            (Segment::Prefix, format!("{}. {} ", self.id, status)),
            (Segment::Title, self.title.clone()),
            (
                Segment::Date,
                format!(" ({})", self.created_date.format("%Y-%m-%d")),
            ),
        ];
        if !self.category.is_empty() {
            segments.push((Segment::Category, format!(" - {}", self.category)));
        }
        if !self.tags.is_empty() {
            segments.push((Segment::Tags, format!(" [{}]", self.tags.join(", "))));
        }
        segments
    }
}

impl fmt::Display for Task {
    /// `1. [X] Finish report (2024-05-01) - Work [urgent, important]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, text) in self.segments() {
            f.write_str(&text)?;
        }
        Ok(())
    }
}
