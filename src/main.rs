mod app;
mod domain;
mod input;
mod persistence;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_agenda_dir, init_local_agenda, load_tasks, tasks_file};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Poll interval for the event loop
const TICK_MS: u64 = 250;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "A calm, terminal-based personal agenda with day and week views", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .agenda directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .agenda directory
            let agenda_dir = init_local_agenda()?;
            println!("Initialized agenda directory: {}", agenda_dir.display());
            println!();
            println!("Agenda will now use this local directory for task storage.");
            println!("Run 'agenda' to start planning.");
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

fn run_tui() -> Result<()> {
    // Ensure agenda directory exists
    let agenda_dir = ensure_agenda_dir()?;
    eprintln!("Using agenda directory: {}", agenda_dir.display());

    // Load the persisted slot once; a corrupt slot becomes an empty agenda
    let tasks_path = tasks_file()?;
    let tasks = load_tasks(&tasks_path);

    // Create app state
    let mut app = AppState::new(tasks, tasks_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if let Err(e) = app.persist() {
        eprintln!("Error saving tasks: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = Duration::from_millis(TICK_MS);

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout so notices can expire
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Write-through after whatever the event mutated
        app.autosave();

        // Let the notice fade
        app.expire_notice();
    }
}
