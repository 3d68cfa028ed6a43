use std::sync::Arc;

use tracing::{info, warn};

use super::{MonitorTask, ProjectHooks, ProjectTask, Task, TaskContext, TaskError};
use crate::events::EventSink;
use crate::monitors::MonitorOutcome;
use crate::project::Project;

/// Event action recorded once the monitor queue is built
pub const RUN_FINISH_ACTION: &str = "run_finish";

/// What to do when a monitor errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Run every monitor and record each error in the report
    #[default]
    Isolate,
    /// Stop at the first monitor error and return it
    FailFast,
}

/// Result of one monitor within a [`MonitorsReport`]
#[derive(Debug)]
pub struct MonitorRun {
    pub monitor_id: String,
    pub result: Result<MonitorOutcome, TaskError>,
}

impl MonitorRun {
    pub fn is_passed(&self) -> bool {
        matches!(&self.result, Ok(outcome) if outcome.passed)
    }
}

/// Per-monitor results in queue order
#[derive(Debug, Default)]
pub struct MonitorsReport {
    pub runs: Vec<MonitorRun>,
}

impl MonitorsReport {
    pub fn passed(&self) -> impl Iterator<Item = &MonitorOutcome> {
        self.runs
            .iter()
            .filter_map(|r| r.result.as_ref().ok())
            .filter(|o| o.passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &MonitorOutcome> {
        self.runs
            .iter()
            .filter_map(|r| r.result.as_ref().ok())
            .filter(|o| !o.passed)
    }

    pub fn errored(&self) -> impl Iterator<Item = (&str, &TaskError)> {
        self.runs
            .iter()
            .filter_map(|r| r.result.as_ref().err().map(|e| (r.monitor_id.as_str(), e)))
    }

    /// True when every monitor ran and passed (vacuously true when empty)
    pub fn is_success(&self) -> bool {
        self.runs.iter().all(MonitorRun::is_passed)
    }
}

/// Hooks that expand a project into one [`MonitorTask`] per monitor
pub struct MonitorsHooks {
    sink: Arc<dyn EventSink>,
    policy: FailurePolicy,
}

impl MonitorsHooks {
    pub fn new(sink: Arc<dyn EventSink>, policy: FailurePolicy) -> Self {
        Self { sink, policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }
}

impl ProjectHooks for MonitorsHooks {
    type Child = MonitorTask;
    type Output = MonitorsReport;

    /// Queue one task per monitor, in project order, then record
    /// `run_finish` with the monitor count.
    ///
    /// The event is recorded here, when the queue is built, so it precedes
    /// every monitor run despite its name.
    fn create_tasks(
        &self,
        ctx: &TaskContext,
        project: Option<&Project>,
    ) -> Result<Vec<MonitorTask>, TaskError> {
        let project = project.ok_or(TaskError::ProjectNotLoaded)?;

        let tasks: Vec<MonitorTask> = project
            .monitors
            .iter()
            .map(|monitor| MonitorTask::new(ctx.clone(), Arc::clone(monitor)))
            .collect();

        self.sink.track_event(
            &ctx.config,
            RUN_FINISH_ACTION,
            &project.monitors.len().to_string(),
        );

        Ok(tasks)
    }

    fn process_tasks(&self, tasks: &mut [MonitorTask]) -> Result<MonitorsReport, TaskError> {
        let mut report = MonitorsReport::default();

        for task in tasks.iter_mut() {
            let monitor_id = task.monitor().id().to_string();

            let result = task.run();
            match &result {
                Ok(outcome) => info!(
                    monitor = %monitor_id,
                    passed = outcome.passed,
                    message = %outcome.message,
                    "Monitor finished"
                ),
                Err(e) => warn!(monitor = %monitor_id, error = %e, "Monitor errored"),
            }

            match (result, self.policy) {
                (Err(e), FailurePolicy::FailFast) => return Err(e),
                (result, _) => report.runs.push(MonitorRun { monitor_id, result }),
            }
        }

        Ok(report)
    }
}

/// Runs every monitor of a project
pub type MonitorsTask = ProjectTask<MonitorsHooks>;
