//! `vigil init` followed by loading the scaffolded project

use std::sync::Arc;

use tempfile::TempDir;

use vigil::commands::init::init_project;
use vigil::commands::run::run_monitors;
use vigil::config::{Configuration, RunArgs};
use vigil::events::NoopEventSink;
use vigil::project::{DefinitionLoader, ProjectLoader};
use vigil::tasks::FailurePolicy;

fn args_for(temp: &TempDir) -> RunArgs {
    let settings = temp.path().join("settings.toml");
    std::fs::write(&settings, "").unwrap();
    RunArgs::new(temp.path().join("project")).with_config_path(settings)
}

#[test]
fn test_scaffolded_project_loads() {
    let temp = TempDir::new().unwrap();
    let args = args_for(&temp);
    init_project(&args.project_dir, Some("warehouse".to_string())).unwrap();

    let config = Configuration::from_args(&args).unwrap();
    let project = DefinitionLoader.from_configuration(&config).unwrap();

    assert_eq!(project.name, "warehouse");
    let ids: Vec<&str> = project.monitors.iter().map(|m| m.id()).collect();
    assert_eq!(ids, vec!["example-command"]);
}

#[cfg(unix)]
#[test]
fn test_scaffolded_project_runs_clean() {
    let temp = TempDir::new().unwrap();
    let args = args_for(&temp);
    init_project(&args.project_dir, None).unwrap();

    let report = run_monitors(args, FailurePolicy::Isolate, Arc::new(NoopEventSink)).unwrap();

    assert_eq!(report.runs.len(), 1);
    assert!(report.is_success());
}
