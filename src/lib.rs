//! In-memory to-do list with a terminal front end.
//!
//! [`TaskStore`] holds the tasks and enforces their invariants; [`App`] and
//! [`ui`] form the console layer on top of it.

pub mod app;
pub mod categories;
pub mod cli;
pub mod error;
pub mod logging;
pub mod store;
pub mod task;
pub mod ui;

pub use app::App;
pub use error::ValidationError;
pub use logging::{default_log_level, init_logging, LoggingError};
pub use store::TaskStore;
pub use task::{Task, TaskId};
