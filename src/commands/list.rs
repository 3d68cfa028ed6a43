use anyhow::Result;
use colored::Colorize;

use crate::config::{FileConfigProvider, RunArgs};
use crate::project::{DefinitionLoader, ProjectLoader};
use crate::tasks::TaskContext;

/// List the monitors of a project in run order
/// Usage: vigil list [--project-dir <dir>] [--config <file>] [--profile <name>]
pub fn execute(args: RunArgs) -> Result<()> {
    let ctx = TaskContext::from_args(&FileConfigProvider, args)?;
    let project = DefinitionLoader.from_configuration(&ctx.config)?;

    if project.monitors.is_empty() {
        println!("{}", "No monitors defined.".yellow());
        return Ok(());
    }

    println!("\n{} {}", "Monitors for".bold().underline(), project.name.cyan());
    println!();
    println!(
        "{:<32} {:<10} {}",
        "ID".bold(),
        "Kind".bold(),
        "Description".bold()
    );
    println!("{}", "-".repeat(72).dimmed());

    for monitor in &project.monitors {
        println!(
            "{:<32} {:<10} {}",
            monitor.id().cyan(),
            monitor.kind(),
            monitor.description().unwrap_or("-")
        );
    }

    println!();
    Ok(())
}
