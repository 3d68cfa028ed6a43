use thiserror::Error;

use crate::project::ProjectLoadError;

#[derive(Debug, Error)]
pub enum TaskError {
    /// Configuration could not be built from the arguments. The cause is
    /// logged where the mapping happens, not carried here.
    #[error("There was an issue creating the task from args.")]
    Construction,

    #[error(transparent)]
    ProjectLoad(#[from] ProjectLoadError),

    #[error("Project was not loaded before running monitors.")]
    ProjectNotLoaded,

    #[error("Implementation for task does not exist: {0}")]
    NotImplemented(&'static str),

    #[error("Task has already been processed")]
    AlreadyProcessed,

    /// A monitor failed to run; the monitor's error is passed through as is
    #[error(transparent)]
    Monitor(anyhow::Error),
}
