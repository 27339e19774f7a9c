//! Core types for the event scheduler.
//!
//! - `event` and `validate` for the event record and its field shapes
//! - `store` for the in-memory, always-sorted event collection
//! - `event_file` for the three-lines-per-event backing file
//! - `scheduler_config` for locating the backing file and presentation options

pub mod error;
pub mod event;
pub mod event_file;
pub mod scheduler_config;
pub mod store;
pub mod validate;

pub use error::{SchedulerError, SchedulerResult};
pub use event::{Event, EventUpdate};
pub use event_file::EventFile;
pub use scheduler_config::SchedulerConfig;
pub use store::EventStore;
