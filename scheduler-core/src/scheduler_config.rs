//! Scheduler configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SchedulerResult};
use crate::event_file::{EventFile, DEFAULT_EVENTS_FILE};

static ENV_PREFIX: &str = "SCHEDULER";

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

fn default_true() -> bool {
    true
}

fn env_overrides() -> Environment {
    Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

/// Configuration at ~/.config/event-scheduler/config.toml, overridable with
/// `SCHEDULER_*` environment variables.
///
/// Nothing here is required. Without a config file the scheduler keeps its
/// events in `events.txt` in the working directory.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SchedulerConfig {
    #[serde(default = "default_events_file")]
    pub events_file: PathBuf,

    /// Show the banner before the first menu.
    #[serde(default = "default_true")]
    pub welcome: bool,

    /// Colour success and error messages.
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            events_file: default_events_file(),
            welcome: true,
            color: true,
        }
    }
}

impl SchedulerConfig {
    pub fn config_path() -> SchedulerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SchedulerError::Config("Could not determine config directory".into()))?
            .join("event-scheduler");

        Ok(config_dir.join("config.toml"))
    }

    /// Load `path` (a missing file yields defaults), then apply `SCHEDULER_*`
    /// environment overrides.
    pub fn load_from(path: &Path) -> SchedulerResult<Self> {
        Self::load_with_env(path, env_overrides())
    }

    fn load_with_env(path: &Path, env: Environment) -> SchedulerResult<Self> {
        let config: SchedulerConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| SchedulerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SchedulerError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), events_file = %config.events_file.display(), "loaded config");
        Ok(config)
    }

    /// The events file path with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn event_file(&self) -> EventFile {
        EventFile::new(self.events_path())
    }

    pub fn to_toml(&self) -> SchedulerResult<String> {
        toml::to_string_pretty(self).map_err(|e| SchedulerError::Config(e.to_string()))
    }
}
