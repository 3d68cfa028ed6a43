//! Task composition
//!
//! A [`Task`] is a unit of work built from [`RunArgs`](crate::config::RunArgs)
//! and a shared [`Configuration`](crate::config::Configuration). A
//! [`ProjectTask`] loads a project, expands it into a queue of child tasks
//! through its [`ProjectHooks`], and processes the queue. [`MonitorsTask`] is
//! the concrete composition: one [`MonitorTask`] per monitor in the project.
//!
//! Execution is sequential on the calling thread.

mod base;
mod error;
mod monitor;
mod monitors;
mod project;


pub use base::{run_task, Task, TaskContext};
pub use error::TaskError;
pub use monitor::MonitorTask;
pub use monitors::{
    FailurePolicy, MonitorRun, MonitorsHooks, MonitorsReport, MonitorsTask, RUN_FINISH_ACTION,
};
pub use project::{ProjectHooks, ProjectTask, ProjectTaskState};
