//! User-level settings file (`~/.vigil/config.toml`)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_profile: Option<String>,
    pub telemetry: TelemetrySettings,
    pub profiles: BTreeMap<String, Profile>,
}

/// Controls the local usage event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySettings {
    pub send_anonymous_stats: bool,
    pub user_id: Option<String>,
    pub events_path: Option<PathBuf>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            send_anonymous_stats: true,
            user_id: None,
            events_path: None,
        }
    }
}

/// Execution environment for monitors
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub timeout_secs: Option<u64>,
    pub env: BTreeMap<String, String>,
}
