use std::io::{BufRead, Write};

use anyhow::Result;
use scheduler_core::EventStore;

use crate::console::Console;
use crate::render::Render;

/// Print every event in schedule order.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &EventStore) -> Result<()> {
    if store.is_empty() {
        console.println("No events scheduled.")?;
        return Ok(());
    }

    let color = console.color();
    console.blank()?;
    console.heading("Scheduled Events:")?;
    for event in store {
        console.println(event.render(color))?;
    }

    Ok(())
}
