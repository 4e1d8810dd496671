mod app;
mod config;
mod domain;
mod input;
mod logging;
mod persistence;
mod theme;
mod ticker;
mod timer;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::Config;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{FileStore, KeyValueStore, DARK_MODE_KEY, TASKS_KEY};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use theme::{AmbientPreference, FixedAmbient, TerminalAmbient};
use timer::SystemClock;
use tracing::info;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A small terminal task board with undo and a light/dark theme", long_about = None)]
struct Cli {
    /// Directory holding tasks, theme preference, config and log
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file to use instead of <data-dir>/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the task list and exit
    List,
    /// Delete all stored tasks and the theme preference
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref());
    let mut store = FileStore::open(&data_dir)?;
    logging::init_tracing(store.dir(), cli.verbose)?;
    info!(data_dir = %data_dir.display(), "starting taskboard");

    let config = Config::load(cli.config.as_deref(), &data_dir)?;

    match cli.command {
        Some(Commands::List) => {
            let app = load_app(store, &config);
            print_tasks(&app);
            Ok(())
        }
        Some(Commands::Reset { force }) => reset(&mut store, force),
        None => run_tui(load_app(store, &config), &config),
    }
}

fn load_app(store: FileStore, config: &Config) -> AppState {
    let ambient: Box<dyn AmbientPreference> = match config.theme.dark_mode {
        Some(dark) => Box::new(FixedAmbient(dark)),
        None => Box::new(TerminalAmbient),
    };

    AppState::load(
        Box::new(store),
        Box::new(SystemClock),
        ambient.as_ref(),
        config.timers.clone(),
    )
}

fn print_tasks(app: &AppState) {
    if app.tasks.is_empty() {
        println!("{}", ui::list_pane::EMPTY_MESSAGE);
        return;
    }

    let now = app.now();
    for task in &app.tasks {
        let check = if task.completed { "x" } else { " " };
        println!("[{}] {}  ({})", check, task.text, ui::list_pane::age_label(task, now));
    }
}

fn reset(store: &mut FileStore, force: bool) -> Result<()> {
    if !force {
        print!("Delete all tasks and the theme preference? This cannot be undone. [y/N] ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if input.trim().to_lowercase() != "y" {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.remove(TASKS_KEY).context("Failed to remove tasks")?;
    store.remove(DARK_MODE_KEY).context("Failed to remove theme preference")?;
    info!("stored data reset");
    println!("Task board reset.");
    Ok(())
}

fn run_tui(mut app: AppState, config: &Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    config: &Config,
) -> Result<()> {
    let tick_rate = ticker::tick_duration(config.timers.tick_ms);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wait for input, but no longer than one tick so timers stay responsive
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.tick();
    }
}
