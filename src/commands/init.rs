use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProjectFile;
use crate::validation::sanitize_id;
use crate::PROJECT_FILE_NAME;

/// Name used when none is given and the directory name is unusable
const FALLBACK_PROJECT_NAME: &str = "vigil-project";

const EXAMPLE_MONITORS: &str = r#"# Monitors are run in file-name order, then in the order listed here.
monitors:
  - id: example-command
    description: Passes when the command exits with status 0
    kind: command
    command: "true"
    timeout_secs: 10

  # - id: nightly-export
  #   kind: freshness
  #   path: exports/latest.csv
  #   max_age_secs: 86400
"#;

/// Scaffold a project in `project_dir`
/// Usage: vigil init [--project-dir <dir>] [--name <name>]
pub fn execute(project_dir: PathBuf, name: Option<String>) -> Result<()> {
    let project_file = init_project(&project_dir, name)?;

    println!("{}", "Project initialized!".green().bold());
    println!("  {} {}", "Project file:".bold(), project_file.display());
    println!(
        "  {} {}",
        "Monitors:".bold(),
        project_dir.join("monitors").display().to_string().dimmed()
    );
    println!("\nRun 'vigil run' to execute the monitors.");

    Ok(())
}

/// Write the project file and an example monitor definition
///
/// Fails when a project file already exists. Returns the project file path.
pub fn init_project(project_dir: &Path, name: Option<String>) -> Result<PathBuf> {
    let project_file = project_dir.join(PROJECT_FILE_NAME);
    if project_file.exists() {
        bail!(
            "{} already exists. Remove it first to re-initialize.",
            project_file.display()
        );
    }

    fs::create_dir_all(project_dir)
        .with_context(|| format!("Failed to create {}", project_dir.display()))?;

    let name = match name {
        Some(name) => name,
        None => default_project_name(project_dir),
    };
    let project = ProjectFile::new(name);

    let yaml = serde_yaml::to_string(&project).context("Failed to serialize project file")?;
    fs::write(&project_file, yaml)
        .with_context(|| format!("Failed to write {}", project_file.display()))?;

    let monitors_dir = project_dir.join("monitors");
    fs::create_dir_all(&monitors_dir).context("Failed to create monitors directory")?;

    let example = monitors_dir.join("example.yml");
    if !example.exists() {
        fs::write(&example, EXAMPLE_MONITORS)
            .with_context(|| format!("Failed to write {}", example.display()))?;
    }

    Ok(project_file)
}

fn default_project_name(project_dir: &Path) -> String {
    let dir = project_dir
        .canonicalize()
        .unwrap_or_else(|_| project_dir.to_path_buf());

    dir.file_name()
        .and_then(|n| n.to_str())
        .and_then(sanitize_id)
        .unwrap_or_else(|| FALLBACK_PROJECT_NAME.to_string())
}
