use clap::Args;
use std::path::PathBuf;

use crate::validation::clap_id_validator;

/// Arguments shared by every command that loads a project
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct RunArgs {
    /// Project directory containing vigil_project.yml
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// User settings file (defaults to $VIGIL_CONFIG, then ~/.vigil/config.toml)
    #[arg(long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Profile to use from the settings file
    #[arg(long, value_parser = clap_id_validator)]
    pub profile: Option<String>,
}

impl RunArgs {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            config_path: None,
            profile: None,
        }
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

impl Default for RunArgs {
    fn default() -> Self {
        Self::new(".")
    }
}
