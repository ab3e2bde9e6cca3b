//! Labels offered by the add-task screen. The store itself accepts any text.

pub const CATEGORIES: [&str; 5] = ["Work", "Personal", "Shopping", "Health", "Finance"];

pub const TAGS: [&str; 5] = ["urgent", "important", "can-wait", "delegated", "in-progress"];
