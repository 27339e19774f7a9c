use std::io::{BufRead, Write};

use anyhow::Result;
use scheduler_core::validate::{validate_date, validate_time};
use scheduler_core::{Event, EventStore, SchedulerError};

use crate::console::Console;
use crate::render::Render;

/// Ask for a new event, re-prompting until the date and time are well-shaped.
pub fn prompt<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &mut EventStore) -> Result<()> {
    let title = console.ask_line("Enter event title: ")?;
    let date = console.ask_until("Enter event date (YYYY-MM-DD): ", validate_date)?;
    let time = console.ask_until("Enter event time (HH:MM): ", validate_time)?;

    let event = Event::new(title, date, time);
    tracing::info!(event = %event, "added event");
    store.add(event);

    console.success("Event added successfully!")?;
    Ok(())
}

pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut EventStore,
    title: String,
    date: String,
    time: String,
) -> Result<()> {
    if !validate_date(&date) {
        return Err(SchedulerError::InvalidDate(date).into());
    }
    if !validate_time(&time) {
        return Err(SchedulerError::InvalidTime(time).into());
    }

    let event = Event::new(title, date, time);
    let line = format!("Added: {}", event.render(console.color()));
    tracing::info!(event = %event, "added event");
    store.add(event);

    console.success(&line)?;
    Ok(())
}
