//! Shared helpers for building projects on disk

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use vigil::config::RunArgs;

/// A temporary project directory plus its own settings file
pub struct TestProject {
    pub dir: TempDir,
    pub settings: PathBuf,
}

impl TestProject {
    /// Create a project named `name` with an empty settings file
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(
            dir.path().join(vigil::PROJECT_FILE_NAME),
            format!("name: {name}\nversion: 1\n"),
        )
        .expect("Failed to write project file");
        fs::create_dir(dir.path().join("monitors")).expect("Failed to create monitors dir");

        let settings = dir.path().join("settings.toml");
        fs::write(&settings, "").expect("Failed to write settings");

        Self { dir, settings }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a monitor definition file under monitors/
    pub fn monitors(&self, file_name: &str, content: &str) -> &Self {
        fs::write(self.path().join("monitors").join(file_name), content)
            .expect("Failed to write monitor file");
        self
    }

    pub fn settings(&self, content: &str) -> &Self {
        fs::write(&self.settings, content).expect("Failed to write settings");
        self
    }

    pub fn args(&self) -> RunArgs {
        RunArgs::new(self.path()).with_config_path(&self.settings)
    }

    pub fn events_path(&self) -> PathBuf {
        self.path().join(".vigil").join("events.jsonl")
    }
}
