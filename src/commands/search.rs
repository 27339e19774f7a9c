use std::io::{BufRead, Write};

use anyhow::Result;
use scheduler_core::EventStore;

use crate::console::Console;
use crate::render::Render;

pub fn prompt<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &EventStore) -> Result<()> {
    let query = console.ask_line("Enter the title of the event to search: ")?;
    run(console, store, &query)
}

/// Print events whose title contains `query`.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &EventStore, query: &str) -> Result<()> {
    let matches = store.search(query);
    tracing::debug!(query, count = matches.len(), "searched events");

    if matches.is_empty() {
        console.failure(&format!("No events matching \"{query}\" were found."))?;
        return Ok(());
    }

    let color = console.color();
    for event in matches {
        console.println(event.render(color))?;
    }
    Ok(())
}
