//! Usage events
//!
//! Events are best-effort: a sink never reports failure to its caller, it
//! logs and moves on.


use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::Configuration;

/// User ID recorded when the settings file does not provide one
pub const ANONYMOUS_USER: &str = "anonymous";

/// Records coarse usage signals
pub trait EventSink {
    fn track_event(&self, config: &Configuration, action: &str, label: &str);
}

/// One recorded usage event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub project: String,
    pub action: String,
    pub label: String,
}

impl TelemetryEvent {
    pub fn new(config: &Configuration, action: &str, label: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            user_id: config
                .telemetry
                .user_id
                .clone()
                .unwrap_or_else(|| ANONYMOUS_USER.to_string()),
            project: config.project.name.clone(),
            action: action.to_string(),
            label: label.to_string(),
        }
    }
}

/// Appends events as JSON lines to [`Configuration::events_path`]
///
/// Nothing is written when `telemetry.send_anonymous_stats` is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonlEventSink;

impl EventSink for JsonlEventSink {
    fn track_event(&self, config: &Configuration, action: &str, label: &str) {
        if !config.telemetry.send_anonymous_stats {
            debug!(action, label, "Telemetry disabled, dropping event");
            return;
        }

        let event = TelemetryEvent::new(config, action, label);
        let path = config.events_path();

        match append_event(&path, &event) {
            Ok(()) => debug!(action, label, path = %path.display(), "Recorded event"),
            Err(e) => warn!(action, label, path = %path.display(), error = %e, "Failed to record event"),
        }
    }
}

fn append_event(path: &Path, event: &TelemetryEvent) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut line = serde_json::to_string(event)?;
    line.push('\n');

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;

    Ok(())
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn track_event(&self, _config: &Configuration, action: &str, label: &str) {
        debug!(action, label, "Discarding event");
    }
}

/// Read back the events recorded at `path`, skipping lines that do not parse
pub fn read_events(path: &Path) -> anyhow::Result<Vec<TelemetryEvent>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let events = content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| match serde_json::from_str(l) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!(error = %e, "Skipping malformed event line");
                None
            }
        })
        .collect();

    Ok(events)
}
