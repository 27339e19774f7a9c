mod commands;
mod console;
mod menu;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scheduler_core::{EventFile, EventStore, EventUpdate, SchedulerConfig};
use tracing_subscriber::EnvFilter;

use crate::console::Console;
use crate::menu::Menu;

#[derive(Parser)]
#[command(name = "scheduler")]
#[command(about = "Keep a personal list of dated events in a plain text file")]
struct Cli {
    /// Events file to use instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long)]
    no_welcome: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Run one command and exit instead of opening the menu
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events in date and time order
    List,
    /// Add an event
    Add {
        title: String,

        /// Date as YYYY-MM-DD
        #[arg(short, long)]
        date: String,

        /// Time as HH:MM
        #[arg(short = 't', long)]
        time: String,
    },
    /// Edit the first event with this title
    Edit {
        title: String,

        /// New title
        #[arg(long = "title", value_name = "TITLE")]
        new_title: Option<String>,

        /// New date (ignored unless YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// New time (ignored unless HH:MM)
        #[arg(short = 't', long)]
        time: Option<String>,
    },
    /// Delete every event with this title
    Delete { title: String },
    /// Show events whose title contains the query
    Search { query: String },
    /// Show how many events are scheduled
    Count,
    /// Show config and events file locations
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = SchedulerConfig::config_path()?;
    let mut config = SchedulerConfig::load_from(&config_path)?;
    if let Some(file) = cli.file {
        config.events_file = file;
    }
    if cli.no_welcome {
        config.welcome = false;
    }
    if cli.no_color {
        config.color = false;
    }

    let file = config.event_file();
    let mut console = Console::stdio(config.color);

    if let Some(Commands::Config) = cli.command {
        return commands::config::run(&mut console, &config_path, &config);
    }

    let mut store = load_store(&file)?;

    match cli.command {
        None => Menu::new(&mut store, &file)
            .welcome(config.welcome)
            .run(&mut console),
        Some(Commands::List) => commands::view::run(&mut console, &store),
        Some(Commands::Search { query }) => commands::search::run(&mut console, &store, &query),
        Some(Commands::Count) => commands::count::run(&mut console, &store),
        Some(Commands::Add { title, date, time }) => {
            commands::add::run(&mut console, &mut store, title, date, time)?;
            save_store(&file, &store)
        }
        Some(Commands::Edit {
            title,
            new_title,
            date,
            time,
        }) => {
            let update = EventUpdate {
                title: new_title,
                date,
                time,
            };
            commands::edit::run(&mut console, &mut store, &title, &update)?;
            save_store(&file, &store)
        }
        Some(Commands::Delete { title }) => {
            commands::delete::run(&mut console, &mut store, &title)?;
            save_store(&file, &store)
        }
        Some(Commands::Config) => Ok(()),
    }
}

/// Terminal filter: -vv > -v > RUST_LOG > default "warn". Logs go to stderr
/// so menu output on stdout stays clean.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_store(file: &EventFile) -> Result<EventStore> {
    let events = file
        .load()
        .with_context(|| format!("Failed to load events from {}", file.path().display()))?;
    Ok(EventStore::from_events(events))
}

fn save_store(file: &EventFile, store: &EventStore) -> Result<()> {
    file.save(store)
        .with_context(|| format!("Failed to save events to {}", file.path().display()))
}
