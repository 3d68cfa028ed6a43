use anyhow::{bail, Result};
use colored::Colorize;
use std::sync::Arc;

use crate::config::{FileConfigProvider, RunArgs};
use crate::events::{EventSink, JsonlEventSink};
use crate::project::DefinitionLoader;
use crate::tasks::{run_task, FailurePolicy, MonitorsHooks, MonitorsReport, MonitorsTask};

/// Run every monitor of a project
/// Usage: vigil run [--project-dir <dir>] [--config <file>] [--profile <name>] [--fail-fast]
pub fn execute(args: RunArgs, fail_fast: bool) -> Result<()> {
    let policy = if fail_fast {
        FailurePolicy::FailFast
    } else {
        FailurePolicy::Isolate
    };

    println!("Running monitors...");
    let report = run_monitors(args, policy, Arc::new(JsonlEventSink))?;

    print_report(&report);

    if report.is_success() {
        Ok(())
    } else {
        bail!("Some monitors did not pass")
    }
}

/// Build a monitors task from `args` and run it to completion
pub fn run_monitors(
    args: RunArgs,
    policy: FailurePolicy,
    sink: Arc<dyn EventSink>,
) -> Result<MonitorsReport> {
    let task = MonitorsTask::from_args(
        &FileConfigProvider,
        args,
        DefinitionLoader,
        MonitorsHooks::new(sink, policy),
    )?;

    Ok(run_task(task)?)
}

fn print_report(report: &MonitorsReport) {
    println!("\n=== Monitors Complete ===\n");

    let passed: Vec<_> = report.passed().collect();
    if !passed.is_empty() {
        println!("{}", "✓ Passed:".green());
        for outcome in passed {
            println!("  - {} {}", outcome.monitor_id, outcome.message.dimmed());
        }
    }

    let failed: Vec<_> = report.failed().collect();
    if !failed.is_empty() {
        println!("\n{}", "✗ Failed:".red());
        for outcome in failed {
            println!("  - {} {}", outcome.monitor_id, outcome.message);
        }
    }

    let errored: Vec<_> = report.errored().collect();
    if !errored.is_empty() {
        println!("\n{}", "⚠ Errored:".yellow());
        for (monitor_id, error) in errored {
            println!("  - {monitor_id}: {error:#}");
        }
    }

    println!("\nTotal monitors run: {}", report.runs.len());

    if report.is_success() {
        println!("\n{}", "✓ All monitors passed!".green().bold());
    }
}
