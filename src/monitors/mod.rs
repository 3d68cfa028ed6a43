//! Monitors: the probes a project runs
//!
//! A monitor is checked against the active [`Configuration`]. A monitor that
//! ran and found a problem returns an outcome with `passed == false`; an error
//! means the probe itself could not be carried out.

mod command;
mod freshness;


use anyhow::Result;
use std::fmt;

use crate::config::Configuration;

pub use command::CommandMonitor;
pub use freshness::FreshnessMonitor;

/// Result of a monitor that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorOutcome {
    pub monitor_id: String,
    pub passed: bool,
    pub message: String,
}

impl MonitorOutcome {
    pub fn passed(monitor_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            monitor_id: monitor_id.into(),
            passed: true,
            message: message.into(),
        }
    }

    pub fn failed(monitor_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            monitor_id: monitor_id.into(),
            passed: false,
            message: message.into(),
        }
    }
}

/// A single check declared by a project
pub trait Monitor: fmt::Debug + Send + Sync {
    /// Unique ID within the project
    fn id(&self) -> &str;

    fn description(&self) -> Option<&str> {
        None
    }

    /// Short name of the monitor kind, shown by `vigil list`
    fn kind(&self) -> &'static str;

    fn run(&self, config: &Configuration) -> Result<MonitorOutcome>;
}
