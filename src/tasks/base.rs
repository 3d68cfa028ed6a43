use std::sync::Arc;

use tracing::warn;

use super::TaskError;
use crate::config::{ConfigError, ConfigProvider, Configuration, RunArgs};

/// Arguments and configuration shared by a task and its children
#[derive(Debug, Clone)]
pub struct TaskContext {
    pub args: RunArgs,
    pub config: Arc<Configuration>,
}

impl TaskContext {
    pub fn new(args: RunArgs, config: Configuration) -> Self {
        Self {
            args,
            config: Arc::new(config),
        }
    }

    /// Build the configuration for `args` through `provider`
    ///
    /// Every configuration failure surfaces as [`TaskError::Construction`].
    pub fn from_args(provider: &dyn ConfigProvider, args: RunArgs) -> Result<Self, TaskError> {
        match provider.from_args(&args) {
            Ok(config) => Ok(Self::new(args, config)),
            Err(e) => Err(construction_error(&args, e)),
        }
    }
}

fn construction_error(args: &RunArgs, err: ConfigError) -> TaskError {
    let kind = match &err {
        ConfigError::ProjectFileNotFound(_) => "project_file_not_found",
        ConfigError::Read { .. } => "read",
        ConfigError::ParseProject { .. } => "parse_project",
        ConfigError::ParseSettings { .. } => "parse_settings",
        ConfigError::UnsupportedVersion(_) => "unsupported_version",
        ConfigError::InvalidProjectName { .. } => "invalid_project_name",
        ConfigError::UnknownProfile(_) => "unknown_profile",
    };

    warn!(
        kind,
        project_dir = %args.project_dir.display(),
        error = %err,
        "Failed to build configuration"
    );

    TaskError::Construction
}

/// A runnable unit of work
pub trait Task {
    type Output;

    fn context(&self) -> &TaskContext;

    fn args(&self) -> &RunArgs {
        &self.context().args
    }

    fn config(&self) -> &Configuration {
        &self.context().config
    }

    /// Execute the task. Tasks that do not override this fail with
    /// [`TaskError::NotImplemented`].
    fn run(&mut self) -> Result<Self::Output, TaskError> {
        Err(TaskError::NotImplemented("run"))
    }
}

/// Run a freshly constructed task and return its output
pub fn run_task<T: Task>(mut task: T) -> Result<T::Output, TaskError> {
    task.run()
}
