use clap::Parser;
use crossterm::{
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use todos::{cli::Cli, init_logging, ui, App, TaskStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, &cli.log_dir)?;

    let store = if cli.empty {
        TaskStore::new()
    } else {
        TaskStore::with_sample_data()
    };
    info!(
        "event=store_ready module=main tasks={} seeded={}",
        store.len(),
        !cli.empty
    );
    let mut app = App::new(store);

    // Terminal setup
    ui::install_restore_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run_app(&mut terminal, &mut app);

    // Restore terminal
    ui::restore_terminal(terminal.backend_mut())?;

    if let Err(err) = result {
        error!("event=app_error module=main error={}", err);
        eprintln!("{:?}", err);
    }
    Ok(())
}
