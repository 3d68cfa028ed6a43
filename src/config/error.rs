use std::path::PathBuf;
use thiserror::Error;

/// Failures while building a [`Configuration`](super::Configuration)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Project file not found: {}", .0.display())]
    ProjectFileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse project file {}: {source}", path.display())]
    ParseProject {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse settings file {}: {source}", path.display())]
    ParseSettings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported project version: {0}. Only version 1 is supported.")]
    UnsupportedVersion(u32),

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unknown profile: '{0}'")]
    UnknownProfile(String),
}
