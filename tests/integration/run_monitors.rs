//! End-to-end runs of `vigil run` against projects on disk

use std::fs;
use std::sync::Arc;

use vigil::commands::run::run_monitors;
use vigil::events::{read_events, JsonlEventSink, NoopEventSink};
use vigil::tasks::{FailurePolicy, TaskError};

use super::helpers::TestProject;

#[cfg(unix)]
const MIXED_MONITORS: &str = r#"
monitors:
  - id: first
    kind: command
    command: "echo ok"
  - id: broken
    kind: command
    command: "echo 'service down' >&2; exit 2"
  - id: export
    kind: freshness
    path: export.csv
    max_age_secs: 3600
"#;

#[cfg(unix)]
#[test]
fn test_run_collects_every_result() {
    let project = TestProject::new("shop");
    project.monitors("checks.yml", MIXED_MONITORS);
    fs::write(project.path().join("export.csv"), "id\n").unwrap();

    let report = run_monitors(
        project.args(),
        FailurePolicy::Isolate,
        Arc::new(JsonlEventSink),
    )
    .unwrap();

    let ids: Vec<&str> = report.runs.iter().map(|r| r.monitor_id.as_str()).collect();
    assert_eq!(ids, vec!["first", "broken", "export"]);

    let failed: Vec<_> = report.failed().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].monitor_id, "broken");
    assert_eq!(failed[0].message, "exit code 2: service down");
    assert_eq!(report.passed().count(), 2);
    assert!(!report.is_success());

    let events = read_events(&project.events_path()).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, "run_finish");
    assert_eq!(events[0].label, "3");
    assert_eq!(events[0].project, "shop");
}

#[cfg(unix)]
#[test]
fn test_profile_env_and_timeout_reach_commands() {
    let project = TestProject::new("shop");
    project
        .settings(
            r#"
default_profile = "ci"

[profiles.ci]
timeout_secs = 1
env = { VIGIL_TEST_TARGET = "ready" }
"#,
        )
        .monitors(
            "env.yml",
            r#"
monitors:
  - id: env-visible
    kind: command
    command: "test \"$VIGIL_TEST_TARGET\" = ready"
  - id: too-slow
    kind: command
    command: "sleep 5"
"#,
        );

    let report = run_monitors(project.args(), FailurePolicy::Isolate, Arc::new(NoopEventSink))
        .unwrap();

    assert!(report.runs[0].is_passed());
    let slow = report.runs[1].result.as_ref().unwrap();
    assert!(!slow.passed);
    assert!(slow.message.starts_with("timed out after 1s"));
}

#[test]
fn test_empty_project_records_zero() {
    let project = TestProject::new("empty");

    let report = run_monitors(
        project.args(),
        FailurePolicy::Isolate,
        Arc::new(JsonlEventSink),
    )
    .unwrap();

    assert!(report.runs.is_empty());
    assert!(report.is_success());

    let events = read_events(&project.events_path()).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].label, "0");
}

#[test]
fn test_telemetry_opt_out() {
    let project = TestProject::new("private");
    project.settings("[telemetry]\nsend_anonymous_stats = false\n");

    run_monitors(
        project.args(),
        FailurePolicy::Isolate,
        Arc::new(JsonlEventSink),
    )
    .unwrap();

    assert!(!project.events_path().exists());
}

#[test]
fn test_missing_project_is_construction_error() {
    let project = TestProject::new("shop");
    fs::remove_file(project.path().join(vigil::PROJECT_FILE_NAME)).unwrap();

    let err = run_monitors(project.args(), FailurePolicy::Isolate, Arc::new(NoopEventSink))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<TaskError>(),
        Some(TaskError::Construction)
    ));
}

#[test]
fn test_bad_definition_is_project_load_error() {
    let project = TestProject::new("shop");
    project.monitors("bad.yml", "monitors:\n  - id: x\n    kind: nope\n");

    let err = run_monitors(project.args(), FailurePolicy::Isolate, Arc::new(JsonlEventSink))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<TaskError>(),
        Some(TaskError::ProjectLoad(_))
    ));
    // Nothing was queued, so nothing was recorded
    assert!(!project.events_path().exists());
}

#[test]
fn test_failed_outcome_does_not_stop_fail_fast() {
    let project = TestProject::new("shop");
    project.monitors(
        "files.yml",
        r#"
monitors:
  - id: missing-export
    kind: freshness
    path: nowhere.csv
    max_age_secs: 60
  - id: present-export
    kind: freshness
    path: vigil_project.yml
    max_age_secs: 3600
"#,
    );

    // A failed outcome is not an error, so fail-fast still runs every monitor
    let report = run_monitors(project.args(), FailurePolicy::FailFast, Arc::new(NoopEventSink))
        .unwrap();

    assert_eq!(report.runs.len(), 2);
    assert_eq!(report.failed().count(), 1);
    assert_eq!(report.passed().count(), 1);
}

#[test]
fn test_fail_fast_stops_on_monitor_error() {
    let project = TestProject::new("shop");
    // Statting a path below a regular file fails with ENOTDIR, not NotFound
    project.monitors(
        "files.yml",
        r#"
monitors:
  - id: through-file
    kind: freshness
    path: vigil_project.yml/child
    max_age_secs: 60
  - id: never-run
    kind: freshness
    path: vigil_project.yml
    max_age_secs: 3600
"#,
    );

    let result = run_monitors(project.args(), FailurePolicy::FailFast, Arc::new(NoopEventSink));

    #[cfg(unix)]
    {
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TaskError>(),
            Some(TaskError::Monitor(_))
        ));
    }
    #[cfg(not(unix))]
    let _ = result;
}
