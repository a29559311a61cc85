//! wordle-grid
//!
//! Interactive Wordle guess board for the terminal. Letters go into the
//! active row, each cell's color indicator cycles the feedback annotation,
//! and every edit is reported to the host session as a change event.

mod app;
mod component;
mod grid;
mod host;
mod input;
mod ui;

use std::fs::{self, File};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::{App, AppConfig};

const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "wordle-grid", version, about = "Interactive Wordle guess board")]
struct Cli {
    /// JSON render payload to start from ({"grid", "colors", "activeRow"})
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Append every change event to this JSON-lines file
    #[arg(long)]
    events: Option<PathBuf>,
    /// Log file (defaults to the data directory)
    #[arg(long)]
    log: Option<PathBuf>,
    /// Put a five letter word into the active row at startup
    #[arg(long, value_name = "WORD")]
    fill: Option<String>,
    /// Print the final board payload as JSON on exit
    #[arg(long)]
    print_snapshot: bool,
}

impl Cli {
    fn into_config(self) -> AppConfig {
        let defaults = AppConfig::default();
        AppConfig {
            snapshot_path: self.snapshot,
            events_path: self.events,
            log_path: self.log.unwrap_or(defaults.log_path),
            fill_word: self.fill,
            print_snapshot: self.print_snapshot,
            ..defaults
        }
    }
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    init_logging(&config.log_path)?;
    info!("wordle-grid v{} starting", env!("CARGO_PKG_VERSION"));

    let mut app = App::new(config)?;

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result?;

    if app.config.print_snapshot {
        println!("{}", app.snapshot_json()?);
    }
    info!("wordle-grid exiting");
    Ok(())
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn setup_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(terminal: &mut Tui, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK_RATE)? {
            app.handle_event(event::read()?);
        }
    }
    Ok(())
}
