use clap::Parser;
use std::path::PathBuf;

use crate::logging;

#[derive(Parser, Debug)]
#[command(name = "todos")]
#[command(version)]
#[command(about = "Interactive console to-do list manager")]
pub struct Cli {
    /// Start with an empty list instead of the sample tasks
    #[arg(long)]
    pub empty: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = logging::default_log_level().to_string())]
    pub log_level: String,

    /// Absolute directory for log files
    #[arg(long, default_value_os_t = logging::default_log_dir())]
    pub log_dir: PathBuf,
}
