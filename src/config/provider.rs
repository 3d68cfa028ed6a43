use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{ConfigError, Configuration, Profile, ProjectFile, RunArgs, Settings};
use super::project_file::PROJECT_FILE_VERSION;
use crate::validation::validate_id;
use crate::PROJECT_FILE_NAME;

/// Environment variable overriding the default settings file location
pub const CONFIG_ENV_VAR: &str = "VIGIL_CONFIG";

/// Source of [`Configuration`] values
///
/// Tasks are built through a provider so callers (and tests) can swap where
/// configuration comes from without touching task construction.
pub trait ConfigProvider {
    fn from_args(&self, args: &RunArgs) -> Result<Configuration, ConfigError>;
}

/// Reads the project file and user settings from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileConfigProvider;

impl ConfigProvider for FileConfigProvider {
    fn from_args(&self, args: &RunArgs) -> Result<Configuration, ConfigError> {
        let project = load_project_file(&args.project_dir)?;
        let settings = load_settings(args)?;
        let (profile_name, profile) = resolve_profile(args, &project, &settings)?;

        debug!(
            project = %project.name,
            profile = profile_name.as_deref().unwrap_or("<default>"),
            "Loaded configuration"
        );

        Ok(Configuration {
            project_dir: args.project_dir.clone(),
            project,
            profile_name,
            profile,
            telemetry: settings.telemetry,
        })
    }
}

/// Read and validate `vigil_project.yml` from `project_dir`
pub fn load_project_file(project_dir: &Path) -> Result<ProjectFile, ConfigError> {
    let path = project_dir.join(PROJECT_FILE_NAME);
    if !path.exists() {
        return Err(ConfigError::ProjectFileNotFound(path));
    }

    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    let project: ProjectFile = serde_yaml::from_str(&content)
        .map_err(|source| ConfigError::ParseProject { path, source })?;

    if project.version != PROJECT_FILE_VERSION {
        return Err(ConfigError::UnsupportedVersion(project.version));
    }

    if let Err(e) = validate_id(&project.name) {
        return Err(ConfigError::InvalidProjectName {
            name: project.name,
            reason: e.to_string(),
        });
    }

    Ok(project)
}

/// Load user settings
///
/// An explicitly named file (flag or environment variable) must exist. The
/// default file under the home directory is optional.
fn load_settings(args: &RunArgs) -> Result<Settings, ConfigError> {
    let (path, required) = match settings_path(args) {
        Some(found) => found,
        None => {
            debug!("No home directory, using default settings");
            return Ok(Settings::default());
        }
    };

    if !required && !path.exists() {
        debug!(path = %path.display(), "Settings file absent, using defaults");
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::ParseSettings { path, source })
}

fn settings_path(args: &RunArgs) -> Option<(PathBuf, bool)> {
    if let Some(path) = &args.config_path {
        return Some((path.clone(), true));
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some((PathBuf::from(path), true));
    }

    dirs::home_dir().map(|home| (home.join(".vigil").join("config.toml"), false))
}

/// Pick the active profile: flag, then project file, then settings default
fn resolve_profile(
    args: &RunArgs,
    project: &ProjectFile,
    settings: &Settings,
) -> Result<(Option<String>, Profile), ConfigError> {
    let name = args
        .profile
        .clone()
        .or_else(|| project.profile.clone())
        .or_else(|| settings.default_profile.clone());

    match name {
        None => Ok((None, Profile::default())),
        Some(name) => match settings.profiles.get(&name) {
            Some(profile) => Ok((Some(name), profile.clone())),
            None => Err(ConfigError::UnknownProfile(name)),
        },
    }
}
