use tracing::debug;

use super::{Task, TaskContext, TaskError};
use crate::config::{ConfigProvider, RunArgs};
use crate::project::{Project, ProjectLoader};

/// Lifecycle of a [`ProjectTask`]; `Processed` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectTaskState {
    Uninitialized,
    Loaded,
    Processed,
}

/// The steps a concrete project task supplies
pub trait ProjectHooks {
    type Child: Task;
    type Output;

    /// Build the child task queue. `project` is `None` when called before a
    /// project was loaded.
    fn create_tasks(
        &self,
        _ctx: &TaskContext,
        _project: Option<&Project>,
    ) -> Result<Vec<Self::Child>, TaskError> {
        Err(TaskError::NotImplemented("create_tasks"))
    }

    /// Run the queued children and produce the task's output
    fn process_tasks(&self, _tasks: &mut [Self::Child]) -> Result<Self::Output, TaskError> {
        Err(TaskError::NotImplemented("process_tasks"))
    }
}

/// A task that loads a project, queues child tasks, then processes them
pub struct ProjectTask<H: ProjectHooks> {
    ctx: TaskContext,
    loader: Box<dyn ProjectLoader>,
    hooks: H,
    project: Option<Project>,
    task_queue: Vec<H::Child>,
    state: ProjectTaskState,
}

impl<H: ProjectHooks> ProjectTask<H> {
    pub fn new(ctx: TaskContext, loader: impl ProjectLoader + 'static, hooks: H) -> Self {
        Self {
            ctx,
            loader: Box::new(loader),
            hooks,
            project: None,
            task_queue: Vec::new(),
            state: ProjectTaskState::Uninitialized,
        }
    }

    pub fn from_args(
        provider: &dyn ConfigProvider,
        args: RunArgs,
        loader: impl ProjectLoader + 'static,
        hooks: H,
    ) -> Result<Self, TaskError> {
        let ctx = TaskContext::from_args(provider, args)?;
        Ok(Self::new(ctx, loader, hooks))
    }

    /// Load the project and rebuild the task queue from it
    pub fn load_project(&mut self) -> Result<(), TaskError> {
        let project = self.loader.from_configuration(&self.ctx.config)?;
        let project: &Project = self.project.insert(project);

        self.task_queue = self.hooks.create_tasks(&self.ctx, Some(project))?;
        self.state = ProjectTaskState::Loaded;

        debug!(
            project = %project.name,
            tasks = self.task_queue.len(),
            "Project loaded"
        );

        Ok(())
    }

    fn initialize(&mut self) -> Result<(), TaskError> {
        self.load_project()
    }

    fn process_tasks(&mut self) -> Result<H::Output, TaskError> {
        self.hooks.process_tasks(&mut self.task_queue)
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn task_queue(&self) -> &[H::Child] {
        &self.task_queue
    }

    pub fn state(&self) -> ProjectTaskState {
        self.state
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }
}

impl<H: ProjectHooks> Task for ProjectTask<H> {
    type Output = H::Output;

    fn context(&self) -> &TaskContext {
        &self.ctx
    }

    fn run(&mut self) -> Result<H::Output, TaskError> {
        if self.state == ProjectTaskState::Processed {
            return Err(TaskError::AlreadyProcessed);
        }

        self.initialize()?;
        let output = self.process_tasks();
        self.state = ProjectTaskState::Processed;

        output
    }
}
