//! The interactive menu loop.
//!
//! Idle shows the menu, a choice runs one handler to completion, then the loop
//! returns to Idle. Add, Edit and Delete are each followed by a full save.

use std::io::{BufRead, Write};

use anyhow::Result;
use scheduler_core::{EventFile, EventStore};

use crate::commands;
use crate::console::{is_input_closed, Console};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Edit,
    Delete,
    Search,
    Count,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::Search,
        MenuChoice::Count,
        MenuChoice::Exit,
    ];

    /// Parse a menu number. Anything but 1 to 7 is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Event",
            MenuChoice::View => "View Events",
            MenuChoice::Edit => "Edit Event",
            MenuChoice::Delete => "Delete Event",
            MenuChoice::Search => "Search Event",
            MenuChoice::Count => "View Total Events",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Whether the store must be saved after this choice runs.
    pub fn mutates(self) -> bool {
        matches!(self, MenuChoice::Add | MenuChoice::Edit | MenuChoice::Delete)
    }
}

pub struct Menu<'a> {
    store: &'a mut EventStore,
    file: &'a EventFile,
    welcome: bool,
}

impl<'a> Menu<'a> {
    pub fn new(store: &'a mut EventStore, file: &'a EventFile) -> Self {
        Menu {
            store,
            file,
            welcome: true,
        }
    }

    pub fn welcome(mut self, welcome: bool) -> Self {
        self.welcome = welcome;
        self
    }

    /// Run until the user exits or input closes.
    pub fn run<R: BufRead, W: Write>(self, console: &mut Console<R, W>) -> Result<()> {
        match self.run_until_exit(console) {
            Err(e) if is_input_closed(&e) => {
                tracing::debug!("input closed, leaving menu");
                console.blank()?;
            }
            other => other?,
        }

        console.println("Thank you for using the Event Scheduler! Goodbye!")?;
        Ok(())
    }

    fn run_until_exit<R: BufRead, W: Write>(mut self, console: &mut Console<R, W>) -> Result<()> {
        if self.welcome {
            print_welcome(console)?;
            console.read_line()?;
        }

        loop {
            print_menu(console)?;
            let input = console.ask_token("Enter your choice: ")?;

            let Some(choice) = MenuChoice::parse(&input) else {
                tracing::debug!(input = %input, "invalid menu choice");
                console.failure("Invalid choice. Please try again.")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                return Ok(());
            }

            self.dispatch(choice, console)?;

            if choice.mutates() {
                self.save(console)?;
            }
        }
    }

    fn dispatch<R: BufRead, W: Write>(&mut self, choice: MenuChoice, console: &mut Console<R, W>) -> Result<()> {
        match choice {
            MenuChoice::Add => commands::add::prompt(console, self.store),
            MenuChoice::View => commands::view::run(console, self.store),
            MenuChoice::Edit => commands::edit::prompt(console, self.store),
            MenuChoice::Delete => commands::delete::prompt(console, self.store),
            MenuChoice::Search => commands::search::prompt(console, self.store),
            MenuChoice::Count => commands::count::run(console, self.store),
            MenuChoice::Exit => Ok(()),
        }
    }

    /// A failed save is reported and the session continues with the
    /// in-memory events intact.
    fn save<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        if let Err(e) = self.file.save(self.store.iter()) {
            tracing::error!(error = %e, "failed to save events");
            console.failure(&format!("Could not save events: {e}"))?;
        }
        Ok(())
    }
}

fn print_welcome<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.println("======================================")?;
    console.heading("    Welcome to the Event Scheduler!   ")?;
    console.println("======================================")?;
    console.println("Press Enter to continue...")?;
    Ok(())
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.blank()?;
    console.heading("Event Scheduler Menu")?;
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        console.println(format!("{}. {}", i + 1, choice.label()))?;
    }
    Ok(())
}
