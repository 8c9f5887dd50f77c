//! Post-generation install chain.
//!
//! The original behavior this replaces launched each external tool from the
//! previous tool's completion callback and never looked at exit codes.
//! Here the chain is an explicit, ordered [`InstallPlan`] executed by
//! [`InstallRunner`]: each step blocks until its process reaches a terminal
//! state, the exit status is captured and inspected, and a failing step is
//! logged and recorded.  By default the chain continues past failures
//! (matching the observed original behavior); `halt_on_failure` aborts the
//! remainder instead.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{CommandRunner, StepStatus},
    domain::{ProjectContext, RelativePath},
    error::DwagResult,
};

/// One external command, with a working directory relative to the generated
/// project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallStep {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: RelativePath,
}

impl InstallStep {
    /// A step running at the project root.
    pub fn at_root(program: &str, args: &[&str]) -> Self {
        Self::in_dir(program, args, ".")
    }

    /// A step running in a subdirectory of the project root.
    pub fn in_dir(program: &str, args: &[&str], cwd: impl Into<RelativePath>) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.into(),
        }
    }

    /// Human-readable command line for logs and reports.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Ordered list of install steps for one generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub steps: Vec<InstallStep>,
}

impl InstallPlan {
    /// The standard chain: version control init at the root, gradle
    /// bootstrap, then the frontend toolchain inside `{slug}-app`.
    pub fn standard(ctx: &ProjectContext) -> Self {
        let app_dir = ctx.module_dir("app");

        Self {
            steps: vec![
                InstallStep::at_root("git", &["init"]),
                InstallStep::at_root("git", &["add", "*"]),
                InstallStep::at_root("git", &["commit", "-am", "\"Initial Commit\""]),
                InstallStep::at_root("git", &["tag", "0.0.0"]),
                InstallStep::at_root("./gradlew", &["idea"]),
                InstallStep::in_dir("npm", &["install"], app_dir.clone()),
                InstallStep::in_dir("bower", &["install"], app_dir.clone()),
                InstallStep::in_dir("gulp", &["build"], app_dir),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// How one step ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// The process ran to a terminal state (possibly non-zero).
    Completed(StepStatus),
    /// The process could not be started at all (tool missing, permissions).
    SpawnFailed(String),
}

/// Record of one executed (or skipped-over-failure) step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub command: String,
    pub result: StepResult,
}

impl StepOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self.result, StepResult::Completed(status) if status.success())
    }
}

/// Outcome of a whole install chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub outcomes: Vec<StepOutcome>,
    /// True when `halt_on_failure` cut the chain short.
    pub aborted: bool,
}

impl InstallReport {
    pub fn all_succeeded(&self) -> bool {
        !self.aborted && self.outcomes.iter().all(StepOutcome::succeeded)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

/// Executes an [`InstallPlan`] sequentially over a [`CommandRunner`] port.
pub struct InstallRunner {
    runner: Box<dyn CommandRunner>,
    halt_on_failure: bool,
}

impl InstallRunner {
    pub fn new(runner: Box<dyn CommandRunner>, halt_on_failure: bool) -> Self {
        Self {
            runner,
            halt_on_failure,
        }
    }

    /// Run every step in order, strictly sequentially.
    ///
    /// `observer` is invoked just before each step starts (progress display
    /// in the CLI).  Spawn failures and non-zero exits are recorded in the
    /// report, never silently dropped; they abort the chain only when
    /// `halt_on_failure` is set.
    #[instrument(skip_all, fields(steps = plan.len()))]
    pub fn run(
        &self,
        plan: &InstallPlan,
        project_root: &Path,
        mut observer: impl FnMut(usize, &InstallStep),
    ) -> DwagResult<InstallReport> {
        let mut outcomes = Vec::with_capacity(plan.len());
        let mut aborted = false;

        for (index, step) in plan.steps.iter().enumerate() {
            observer(index, step);

            let cwd = project_root.join(step.cwd.as_path());
            let result = match self.runner.run(&step.program, &step.args, &cwd) {
                Ok(status) => {
                    if status.success() {
                        info!(command = %step.display(), "Install step succeeded");
                    } else {
                        warn!(
                            command = %step.display(),
                            code = ?status.code(),
                            "Install step exited non-zero"
                        );
                    }
                    StepResult::Completed(status)
                }
                Err(e) => {
                    warn!(command = %step.display(), error = %e, "Install step failed to start");
                    StepResult::SpawnFailed(e.to_string())
                }
            };

            let outcome = StepOutcome {
                command: step.display(),
                result,
            };
            let failed = !outcome.succeeded();
            outcomes.push(outcome);

            if failed && self.halt_on_failure {
                warn!("Aborting remaining install steps");
                aborted = true;
                break;
            }
        }

        Ok(InstallReport { outcomes, aborted })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Answers;

    fn ctx() -> ProjectContext {
        ProjectContext::derive(Answers {
            name: "demo app".into(),
            description: String::new(),
            package: Answers::DEFAULT_PACKAGE.into(),
        })
    }

    #[test]
    fn standard_plan_order_and_cwds() {
        let plan = InstallPlan::standard(&ctx());
        assert_eq!(plan.len(), 8);

        // Version control first, at the root.
        assert_eq!(plan.steps[0].display(), "git init");
        assert_eq!(plan.steps[0].cwd.as_path(), std::path::Path::new("."));
        assert_eq!(plan.steps[3].display(), "git tag 0.0.0");

        // Gradle bootstrap at the root.
        assert_eq!(plan.steps[4].display(), "./gradlew idea");

        // Frontend chain inside the app module.
        for step in &plan.steps[5..] {
            assert_eq!(step.cwd.as_path(), std::path::Path::new("demo-app-app"));
        }
        assert_eq!(plan.steps[7].display(), "gulp build");
    }

    #[test]
    fn step_outcome_success_requires_exit_zero() {
        let ok = StepOutcome {
            command: "git init".into(),
            result: StepResult::Completed(StepStatus::Exited(0)),
        };
        let bad = StepOutcome {
            command: "npm install".into(),
            result: StepResult::Completed(StepStatus::Exited(1)),
        };
        let gone = StepOutcome {
            command: "bower install".into(),
            result: StepResult::SpawnFailed("not found".into()),
        };
        assert!(ok.succeeded());
        assert!(!bad.succeeded());
        assert!(!gone.succeeded());
    }

    #[test]
    fn report_surfaces_failures() {
        let report = InstallReport {
            outcomes: vec![
                StepOutcome {
                    command: "git init".into(),
                    result: StepResult::Completed(StepStatus::Exited(0)),
                },
                StepOutcome {
                    command: "npm install".into(),
                    result: StepResult::Completed(StepStatus::Exited(127)),
                },
            ],
            aborted: false,
        };
        assert!(!report.all_succeeded());
        assert_eq!(report.failures().count(), 1);
    }
}
