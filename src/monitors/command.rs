use anyhow::{Context, Result};
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use wait_timeout::ChildExt;

use super::{Monitor, MonitorOutcome};
use crate::config::Configuration;

/// How long to wait for the stderr reader after the process exits
const OUTPUT_COLLECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum stderr kept for the outcome message (64KB)
const MAX_STDERR_SIZE: u64 = 64 * 1024;

/// Runs a shell command in the project directory; passes on exit status 0
#[derive(Debug, Clone)]
pub struct CommandMonitor {
    id: String,
    description: Option<String>,
    command: String,
    timeout: Option<Duration>,
}

impl CommandMonitor {
    pub fn new(id: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            command: command.into(),
            timeout: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Override the profile timeout for this monitor
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn effective_timeout(&self, config: &Configuration) -> Duration {
        self.timeout.unwrap_or_else(|| config.command_timeout())
    }
}

impl Monitor for CommandMonitor {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn kind(&self) -> &'static str {
        "command"
    }

    fn run(&self, config: &Configuration) -> Result<MonitorOutcome> {
        let timeout = self.effective_timeout(config);
        let start = Instant::now();

        let mut child = spawn_shell_command(&self.command, config)?;

        // Drain stderr while waiting so a chatty command cannot block on a full pipe
        let (stderr_tx, stderr_rx) = mpsc::channel();
        match child.stderr.take() {
            Some(mut stderr) => {
                thread::spawn(move || {
                    let mut buf = Vec::new();
                    let _ = (&mut stderr).take(MAX_STDERR_SIZE).read_to_end(&mut buf);
                    let _ = std::io::copy(&mut stderr, &mut std::io::sink());
                    let _ = stderr_tx.send(String::from_utf8_lossy(&buf).into_owned());
                });
            }
            None => {
                let _ = stderr_tx.send(String::new());
            }
        }

        let status = child
            .wait_timeout(timeout)
            .with_context(|| format!("Failed to wait for command: {}", self.command))?;

        let status = match status {
            Some(status) => status,
            None => {
                kill_child_process(&mut child);
                return Ok(MonitorOutcome::failed(
                    &self.id,
                    format!("timed out after {}s", timeout.as_secs()),
                ));
            }
        };

        let stderr = stderr_rx
            .recv_timeout(OUTPUT_COLLECTION_TIMEOUT)
            .unwrap_or_default();

        debug!(
            monitor = %self.id,
            elapsed_ms = start.elapsed().as_millis() as u64,
            code = ?status.code(),
            "Command finished"
        );

        if status.success() {
            return Ok(MonitorOutcome::passed(&self.id, "exit code 0"));
        }

        let code = status
            .code()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "none (terminated by signal)".to_string());
        let message = match stderr.lines().rev().find(|l| !l.trim().is_empty()) {
            Some(line) => format!("exit code {code}: {}", line.trim()),
            None => format!("exit code {code}"),
        };

        Ok(MonitorOutcome::failed(&self.id, message))
    }
}

/// Spawn `command` through the system shell with the profile's environment
fn spawn_shell_command(command: &str, config: &Configuration) -> Result<Child> {
    let mut cmd = if cfg!(target_family = "unix") {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    } else {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    };

    cmd.current_dir(&config.project_dir)
        .envs(&config.profile.env)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    cmd.spawn()
        .with_context(|| format!("Failed to spawn command: {command}"))
}

fn kill_child_process(child: &mut Child) {
    if let Err(e) = child.kill() {
        warn!(pid = child.id(), error = %e, "Failed to kill timed out command");
    }
    let _ = child.wait();
}
