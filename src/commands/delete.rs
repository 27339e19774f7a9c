use std::io::{BufRead, Write};

use anyhow::Result;
use scheduler_core::{EventStore, SchedulerError};

use crate::console::Console;
use crate::render::pluralize;

/// Remove every event with the entered title.
pub fn prompt<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &mut EventStore) -> Result<()> {
    let title = console.ask_line("Enter the title of the event to delete: ")?;

    let removed = store.remove_by_title(&title);
    if removed == 0 {
        console.failure("Event not found.")?;
        return Ok(());
    }

    tracing::info!(title = %title, removed, "deleted events");
    console.success("Event deleted successfully!")?;
    Ok(())
}

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &mut EventStore, title: &str) -> Result<()> {
    let removed = store.remove_by_title(title);
    if removed == 0 {
        return Err(SchedulerError::EventNotFound(title.to_string()).into());
    }

    tracing::info!(title, removed, "deleted events");
    console.success(&format!("Deleted {removed} {} titled \"{title}\"", pluralize("event", removed)))?;
    Ok(())
}
