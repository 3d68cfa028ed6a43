use std::sync::Arc;

use super::{Task, TaskContext, TaskError};
use crate::monitors::{Monitor, MonitorOutcome};

/// Leaf task running one monitor against the shared configuration
#[derive(Debug, Clone)]
pub struct MonitorTask {
    ctx: TaskContext,
    monitor: Arc<dyn Monitor>,
}

impl MonitorTask {
    pub fn new(ctx: TaskContext, monitor: Arc<dyn Monitor>) -> Self {
        Self { ctx, monitor }
    }

    pub fn monitor(&self) -> &Arc<dyn Monitor> {
        &self.monitor
    }

    /// Build and run a monitor task, discarding the outcome. Errors still
    /// propagate; call [`Task::run`] on an instance to keep the outcome.
    pub fn run_task(ctx: TaskContext, monitor: Arc<dyn Monitor>) -> Result<(), TaskError> {
        Self::new(ctx, monitor).run().map(|_| ())
    }
}

impl Task for MonitorTask {
    type Output = MonitorOutcome;

    fn context(&self) -> &TaskContext {
        &self.ctx
    }

    fn run(&mut self) -> Result<MonitorOutcome, TaskError> {
        self.monitor
            .run(&self.ctx.config)
            .map_err(TaskError::Monitor)
    }
}
