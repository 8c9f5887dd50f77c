//! Command runner adapters.
//!
//! [`ShellRunner`] is the production implementation: it spawns the tool via
//! `std::process::Command`, inherits stdio so the user sees gradle/npm
//! output live, and blocks until the process exits.  A non-zero exit comes
//! back as a status for the caller to judge; only a failure to spawn at all
//! (tool not installed, permission denied) is an error.
//!
//! [`RecordingRunner`] is the test double: it records every invocation and
//! replays a scripted sequence of statuses.

use std::path::Path;
use std::process::Command;
use std::sync::Mutex;

use tracing::{debug, instrument};

use dwag_core::{
    application::{ApplicationError, StepStatus, ports::CommandRunner},
    error::DwagResult,
};

/// Runs external tools through the system shell environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    #[instrument(skip(self), fields(cwd = %cwd.display()))]
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> DwagResult<StepStatus> {
        debug!("spawning external tool");

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|err| ApplicationError::ExternalToolFailure {
                command: format!("{program} ({err})"),
                code: None,
            })?;

        Ok(match status.code() {
            Some(code) => StepStatus::Exited(code),
            None => StepStatus::Terminated,
        })
    }
}

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: std::path::PathBuf,
}

/// Test double replaying scripted statuses.
///
/// Statuses are consumed in order; once the script is exhausted every
/// further call exits zero.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<RecordedCall>>,
    script: Mutex<Vec<StepStatus>>,
}

impl RecordingRunner {
    /// A runner whose every call exits zero.
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// A runner replaying the given statuses in order.
    pub fn scripted(statuses: impl IntoIterator<Item = StepStatus>) -> Self {
        let mut script: Vec<StepStatus> = statuses.into_iter().collect();
        script.reverse();
        Self {
            calls: Mutex::new(Vec::new()),
            script: Mutex::new(script),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> DwagResult<StepStatus> {
        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        });

        Ok(self
            .script
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(StepStatus::Exited(0)))
    }
}
