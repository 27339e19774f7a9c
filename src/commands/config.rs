use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use scheduler_core::SchedulerConfig;

use crate::console::Console;

/// Print where configuration and events live, then the effective settings.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config_path: &Path,
    config: &SchedulerConfig,
) -> Result<()> {
    console.heading("Paths")?;
    console.println(format!("  Config:  {}", config_path.display()))?;
    console.println(format!("  Events:  {}", config.events_path().display()))?;
    console.blank()?;
    console.heading("Settings")?;
    for line in config.to_toml()?.lines() {
        console.println(format!("  {line}"))?;
    }

    Ok(())
}
