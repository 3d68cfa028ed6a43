use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use super::{Monitor, MonitorOutcome};
use crate::config::Configuration;

/// Passes when a file was modified within `max_age`
#[derive(Debug, Clone)]
pub struct FreshnessMonitor {
    id: String,
    description: Option<String>,
    path: PathBuf,
    max_age: Duration,
}

impl FreshnessMonitor {
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>, max_age: Duration) -> Self {
        Self {
            id: id.into(),
            description: None,
            path: path.into(),
            max_age,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

impl Monitor for FreshnessMonitor {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn kind(&self) -> &'static str {
        "freshness"
    }

    fn run(&self, config: &Configuration) -> Result<MonitorOutcome> {
        let path = config.project_dir.join(&self.path);

        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(MonitorOutcome::failed(
                    &self.id,
                    format!("{} does not exist", self.path.display()),
                ));
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to stat {}", path.display()));
            }
        };

        let modified = metadata
            .modified()
            .with_context(|| format!("Modification time unavailable for {}", path.display()))?;

        // A timestamp in the future counts as fresh
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);

        if age <= self.max_age {
            Ok(MonitorOutcome::passed(
                &self.id,
                format!("{} updated {}s ago", self.path.display(), age.as_secs()),
            ))
        } else {
            Ok(MonitorOutcome::failed(
                &self.id,
                format!(
                    "{} is stale: updated {}s ago (max {}s)",
                    self.path.display(),
                    age.as_secs(),
                    self.max_age.as_secs()
                ),
            ))
        }
    }
}
