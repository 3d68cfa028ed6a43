use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project file format version understood by this build
pub const PROJECT_FILE_VERSION: u32 = 1;

/// Contents of `vigil_project.yml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default = "default_monitor_paths")]
    pub monitor_paths: Vec<PathBuf>,
}

impl ProjectFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: PROJECT_FILE_VERSION,
            profile: None,
            monitor_paths: default_monitor_paths(),
        }
    }
}

fn default_version() -> u32 {
    PROJECT_FILE_VERSION
}

fn default_monitor_paths() -> Vec<PathBuf> {
    vec![PathBuf::from("monitors")]
}
