//! Configuration loading
//!
//! A [`Configuration`] is built once per invocation from [`RunArgs`]: the
//! project file inside the project directory, the user settings file, and the
//! profile selected from it. Tasks share it read-only for their lifetime.

mod args;
mod error;
mod project_file;
mod provider;
mod settings;


use std::path::PathBuf;
use std::time::Duration;

pub use args::RunArgs;
pub use error::ConfigError;
pub use project_file::ProjectFile;
pub use provider::{ConfigProvider, FileConfigProvider, CONFIG_ENV_VAR};
pub use settings::{Profile, Settings, TelemetrySettings};

/// Timeout applied to command monitors when neither the monitor nor the
/// profile sets one
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(60);

/// Resolved configuration for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub project_dir: PathBuf,
    pub project: ProjectFile,
    pub profile_name: Option<String>,
    pub profile: Profile,
    pub telemetry: TelemetrySettings,
}

impl Configuration {
    /// Build a configuration for `project` rooted at `project_dir` with the
    /// default profile and telemetry settings
    pub fn new(project_dir: impl Into<PathBuf>, project: ProjectFile) -> Self {
        Self {
            project_dir: project_dir.into(),
            project,
            profile_name: None,
            profile: Profile::default(),
            telemetry: TelemetrySettings::default(),
        }
    }

    /// Load the configuration described by `args` from disk
    pub fn from_args(args: &RunArgs) -> Result<Self, ConfigError> {
        FileConfigProvider.from_args(args)
    }

    /// Monitor definition paths resolved against the project directory
    pub fn monitor_paths(&self) -> Vec<PathBuf> {
        self.project
            .monitor_paths
            .iter()
            .map(|p| self.project_dir.join(p))
            .collect()
    }

    /// Command timeout from the active profile, falling back to the default
    pub fn command_timeout(&self) -> Duration {
        self.profile
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_COMMAND_TIMEOUT)
    }

    /// Where usage events are appended
    pub fn events_path(&self) -> PathBuf {
        match &self.telemetry.events_path {
            Some(path) => path.clone(),
            None => self.project_dir.join(".vigil").join("events.jsonl"),
        }
    }
}
