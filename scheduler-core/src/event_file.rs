//! Flat-file persistence for events.
//!
//! Each event takes exactly three lines: title, date, time. There is no
//! header, delimiter or escaping, so a title containing a newline cannot be
//! stored faithfully.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{SchedulerError, SchedulerResult};
use crate::event::Event;

/// Default backing file name, resolved against the working directory.
pub const DEFAULT_EVENTS_FILE: &str = "events.txt";

const LINES_PER_EVENT: usize = 3;

/// The backing file. Holds only its path; every call reads or rewrites the
/// whole file.
#[derive(Debug, Clone)]
pub struct EventFile {
    path: PathBuf,
}

impl EventFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EventFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all events, sorted by `(date, time)`.
    ///
    /// A missing file is an empty schedule. If the line count is not a
    /// multiple of three, the last record is still returned with its missing
    /// fields left empty. Bytes that are not UTF-8 (for example Latin-1
    /// titles) are replaced with U+FFFD instead of failing the load.
    pub fn load(&self) -> SchedulerResult<Vec<Event>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no events file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(SchedulerError::io(&self.path, e)),
        };

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "events file is not valid UTF-8; invalid bytes replaced"
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let mut events = parse_events(&content);
        if content.lines().count() % LINES_PER_EVENT != 0 {
            tracing::warn!(
                path = %self.path.display(),
                "events file ends mid-record; last event is incomplete"
            );
        }

        events.sort_by(Event::cmp_schedule);
        tracing::debug!(path = %self.path.display(), count = events.len(), "loaded events");
        Ok(events)
    }

    /// Overwrite the file with `events` in the given order.
    pub fn save<'a, I>(&self, events: I) -> SchedulerResult<()>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let mut count = 0;
        let mut content = String::new();
        for event in events {
            content.push_str(&serialize_event(event));
            count += 1;
        }

        std::fs::write(&self.path, content).map_err(|e| SchedulerError::io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), count, "saved events");
        Ok(())
    }
}

impl Default for EventFile {
    fn default() -> Self {
        EventFile::new(DEFAULT_EVENTS_FILE)
    }
}

// =============================================================================
// Internal: line format
// =============================================================================

fn serialize_event(event: &Event) -> String {
    format!("{}\n{}\n{}\n", event.title, event.date, event.time)
}

fn parse_events(content: &str) -> Vec<Event> {
    let mut events = Vec::new();
    let mut lines = content.lines();

    while let Some(title) = lines.next() {
        let date = lines.next().unwrap_or_default();
        let time = lines.next().unwrap_or_default();
        events.push(Event::new(title, date, time));
    }

    events
}

// =============================================================================
// Tests
// =============================================================================
