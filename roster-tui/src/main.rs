//! roster-tui - terminal front end for Roster
//!
//! Drives the screen state machine from keyboard input and executes its
//! storage effects against the local database.

use clap::Parser;
use libroster::config::{resolve_data_path, Config};
use libroster::logging::{config_from_env, LogFormat};
use roster_tui::{
    app::{event::EventHandler, AppState, UiConfig},
    error::{Result, TuiError},
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster-tui")]
#[command(version, about = "Manage students, classes and class assignments")]
struct Args {
    /// Database file (overrides the config file)
    #[arg(long, value_name = "PATH", env = "ROSTER_DB")]
    db: Option<String>,

    /// Config file (default: ~/.config/roster/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file (default: <data dir>/roster/roster-tui.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log format: text, json or pretty
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    /// Debug level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    }
    .with_database_path(args.db.clone());

    init_logging(&args)?;

    let mut services = ServiceHandle::open(&config.database.path)?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let state = AppState::with_config(UiConfig::from(&config.ui));
    let result = run_app(&mut terminal, &mut services, state);

    restore_terminal(&mut terminal)?;
    services.shutdown();

    if let Err(ref e) = result {
        tracing::error!("roster-tui exited with error: {}", e);
    }
    result
}

fn init_logging(args: &Args) -> Result<()> {
    let mut logging = config_from_env(args.verbose);
    if let Some(format) = args.log_format {
        logging.format = format;
    }

    let log_path = match &args.log_file {
        Some(path) => path.clone(),
        None => resolve_data_path()?.join("roster-tui.log"),
    };

    logging.init_with_file(&log_path).map_err(|e| {
        TuiError::Application(format!("cannot open log file {}: {}", log_path.display(), e))
    })
}

fn run_app(terminal: &mut Tui, services: &mut ServiceHandle, mut state: AppState) -> Result<()> {
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    tracing::info!("roster-tui started");

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let event = event_handler.next()?;
        state = services.dispatch(state, event.into());

        if services.should_quit() {
            break;
        }
    }

    Ok(())
}
