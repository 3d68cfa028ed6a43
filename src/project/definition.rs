//! YAML monitor definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::monitors::{CommandMonitor, FreshnessMonitor, Monitor};

/// One monitor definition file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonitorFile {
    #[serde(default)]
    pub monitors: Option<Vec<MonitorDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorDefinition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: MonitorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MonitorKind {
    Command {
        command: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeout_secs: Option<u64>,
    },
    Freshness {
        path: PathBuf,
        max_age_secs: u64,
    },
}

impl MonitorDefinition {
    pub fn into_monitor(self) -> Arc<dyn Monitor> {
        match self.kind {
            MonitorKind::Command {
                command,
                timeout_secs,
            } => Arc::new(
                CommandMonitor::new(self.id, command)
                    .with_description(self.description)
                    .with_timeout(timeout_secs.map(Duration::from_secs)),
            ),
            MonitorKind::Freshness { path, max_age_secs } => Arc::new(
                FreshnessMonitor::new(self.id, path, Duration::from_secs(max_age_secs))
                    .with_description(self.description),
            ),
        }
    }
}
