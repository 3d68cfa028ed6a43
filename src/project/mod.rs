//! Project model: the ordered set of monitors a configuration declares

mod definition;
mod error;


use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::config::Configuration;
use crate::monitors::Monitor;
use crate::validation::validate_id;

pub use definition::{MonitorDefinition, MonitorFile, MonitorKind};
pub use error::ProjectLoadError;

/// A loaded project
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    /// Monitors in definition order
    pub monitors: Vec<Arc<dyn Monitor>>,
}

impl Project {
    pub fn new(name: impl Into<String>, monitors: Vec<Arc<dyn Monitor>>) -> Self {
        Self {
            name: name.into(),
            monitors,
        }
    }
}

/// Builds a [`Project`] from a [`Configuration`]
pub trait ProjectLoader {
    fn from_configuration(&self, config: &Configuration) -> Result<Project, ProjectLoadError>;
}

/// Loads monitors from the YAML files under the project's monitor paths
///
/// Each monitor path is either a single file or a directory whose `*.yml`
/// and `*.yaml` files are read in file-name order (not recursively).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionLoader;

impl ProjectLoader for DefinitionLoader {
    fn from_configuration(&self, config: &Configuration) -> Result<Project, ProjectLoadError> {
        let mut seen = HashSet::new();
        let mut monitors = Vec::new();

        for path in config.monitor_paths() {
            for file in definition_files(&path)? {
                for definition in read_definitions(&file)? {
                    if let Err(e) = validate_id(&definition.id) {
                        return Err(ProjectLoadError::InvalidMonitorId {
                            path: file,
                            id: definition.id,
                            reason: e.to_string(),
                        });
                    }
                    if !seen.insert(definition.id.clone()) {
                        return Err(ProjectLoadError::DuplicateMonitor(definition.id));
                    }
                    monitors.push(definition.into_monitor());
                }
            }
        }

        debug!(
            project = %config.project.name,
            monitors = monitors.len(),
            "Loaded project"
        );

        Ok(Project::new(config.project.name.clone(), monitors))
    }
}

fn definition_files(path: &Path) -> Result<Vec<PathBuf>, ProjectLoadError> {
    if !path.exists() {
        return Err(ProjectLoadError::MonitorPathNotFound(path.to_path_buf()));
    }

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let read_err = |source| ProjectLoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(read_err)? {
        let entry_path = entry.map_err(read_err)?.path();
        let is_yaml = matches!(
            entry_path.extension().and_then(|s| s.to_str()),
            Some("yml") | Some("yaml")
        );
        if is_yaml && entry_path.is_file() {
            files.push(entry_path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

fn read_definitions(path: &Path) -> Result<Vec<MonitorDefinition>, ProjectLoadError> {
    let content = fs::read_to_string(path).map_err(|source| ProjectLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let file: MonitorFile =
        serde_yaml::from_str(&content).map_err(|source| ProjectLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(file.monitors.unwrap_or_default())
}
