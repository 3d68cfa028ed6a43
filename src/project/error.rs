use std::path::PathBuf;
use thiserror::Error;

/// Failures while building a [`Project`](super::Project) from configuration
#[derive(Debug, Error)]
pub enum ProjectLoadError {
    #[error("Monitor path not found: {}", .0.display())]
    MonitorPathNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse monitor definitions in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid monitor ID '{id}' in {}: {reason}", path.display())]
    InvalidMonitorId {
        path: PathBuf,
        id: String,
        reason: String,
    },

    #[error("Duplicate monitor ID '{0}'")]
    DuplicateMonitor(String),
}
