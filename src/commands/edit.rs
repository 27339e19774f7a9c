use std::io::{BufRead, Write};

use anyhow::Result;
use scheduler_core::{EventStore, EventUpdate, SchedulerError};

use crate::console::Console;
use crate::render::Render;

/// Edit the first event with the entered title.
///
/// Each field is read as a whole line. An empty line keeps the old value, and
/// so does a date or time that is not well-shaped; there is no re-prompt here.
pub fn prompt<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &mut EventStore) -> Result<()> {
    let title = console.ask_line("Enter the title of the event to edit: ")?;

    let Some(event) = store.find_by_title(&title) else {
        console.failure("Event not found.")?;
        return Ok(());
    };
    console.println(format!("Editing Event: {}", event.title))?;

    let new_title = console.ask_line("Enter new title (or press Enter to keep unchanged): ")?;
    let new_date = console.ask_line("Enter new date (YYYY-MM-DD, or press Enter to keep unchanged): ")?;
    let new_time = console.ask_line("Enter new time (HH:MM, or press Enter to keep unchanged): ")?;

    let update = EventUpdate::from_input(&new_title, &new_date, &new_time);
    if let Some(updated) = store.update(&title, &update) {
        tracing::info!(title = %title, event = %updated, "updated event");
    }

    console.success("Event updated successfully!")?;
    Ok(())
}

pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut EventStore,
    title: &str,
    update: &EventUpdate,
) -> Result<()> {
    let color = console.color();
    let line = match store.update(title, update) {
        Some(updated) => format!("Updated: {}", updated.render(color)),
        None => return Err(SchedulerError::EventNotFound(title.to_string()).into()),
    };

    tracing::info!(title, "updated event");
    console.success(&line)?;
    Ok(())
}
