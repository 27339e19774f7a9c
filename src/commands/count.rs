use std::io::{BufRead, Write};

use anyhow::Result;
use scheduler_core::EventStore;

use crate::console::Console;

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &EventStore) -> Result<()> {
    console.println(format!("Total events scheduled: {}", store.len()))?;
    Ok(())
}
