//! Terminal rendering for scheduler types.
//!
//! Colour is opt-in per call so the same code paths produce plain text for
//! tests and piped output.

use owo_colors::OwoColorize;
use scheduler_core::Event;

/// Extension trait for console rendering.
pub trait Render {
    fn render(&self, color: bool) -> String;
}

impl Render for Event {
    fn render(&self, color: bool) -> String {
        if !color {
            return self.to_string();
        }
        let when = format!("{} {}", self.date, self.time);
        format!("{} - {}", when.dimmed(), self.title.bold())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Heading,
}

/// Colorize text according to its tone
pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Success => text.green().to_string(),
        Tone::Failure => text.red().to_string(),
        Tone::Heading => text.bold().to_string(),
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
