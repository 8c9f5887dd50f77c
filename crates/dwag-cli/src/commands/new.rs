//! Implementation of the `dwag new` command.
//!
//! Responsibility: collect the three answers, call the core generator, and
//! drive the install chain. No business logic lives here.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, instrument};

use dwag_adapters::{LocalFilesystem, ShellRunner, template_source};
use dwag_core::{
    application::{GeneratorService, InstallPlan, InstallRunner},
    domain::{Answers, ProjectContext},
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `dwag new` command.
///
/// Dispatch sequence:
/// 1. Resolve the target directory and the default project name
/// 2. Collect answers (flags, then prompts, then defaults)
/// 3. Early-exit if `--dry-run`
/// 4. Confirm with user unless `--yes` or `--quiet`
/// 5. Materialize via `GeneratorService`
/// 6. Run the install chain unless `--skip-install`
/// 7. Print next-steps guidance
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve target directory and default name
    let output_root = args.dir.clone();
    let default_name = default_project_name(&output_root)?;

    // 2. Collect answers
    let interactive = !args.yes && !global.quiet && std::io::stdin().is_terminal();
    let answers = collect_answers(&args, &config, &default_name, interactive)?;
    validate_project_name(&answers.name)?;

    let ctx = ProjectContext::derive(answers.clone());
    debug!(
        class_name = %ctx.class_name(),
        slug = %ctx.slug(),
        package = %ctx.package(),
        "Answers resolved"
    );

    // 3. Build the generator early so template resolution failures surface
    //    before any prompt-confirmed work starts.
    let templates_dir = args.templates_dir.clone().or_else(|| {
        config.templates.local_path.clone()
    });
    let templates = template_source::resolve(templates_dir)?;
    let service = GeneratorService::new(templates, Box::new(LocalFilesystem::new()));

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(answers)?;
        if output.format() == OutputFormat::Json {
            println!(
                "{}",
                serde_json::to_string_pretty(&plan).map_err(|e| CliError::InvalidInput {
                    message: format!("failed to serialise plan: {e}"),
                    source: Some(Box::new(e)),
                })?
            );
            return Ok(());
        }

        output.info(&format!(
            "Dry run: would write {} files under {}",
            plan.file_count(),
            output_root.display(),
        ))?;
        for manifest in &plan.manifests {
            output.header(&format!("[{}]", manifest.name))?;
            for path in &manifest.outputs {
                output.print(&format!("  {path}"))?;
            }
        }
        return Ok(());
    }

    // 5. Show configuration and confirm
    if interactive {
        show_configuration(&ctx, &output_root, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 6. Refuse a populated target unless forced
    ensure_target_usable(&output_root, args.force)?;

    output.header(&format!("Generating '{}'...", ctx.name()))?;
    info!(project = %ctx.name(), path = %output_root.display(), "Generation started");

    let report = service.generate(answers, &output_root)?;

    info!(run_id = %report.run_id, files = report.files_written, "Generation completed");

    if output.format() == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(|e| CliError::InvalidInput {
                message: format!("failed to serialise report: {e}"),
                source: Some(Box::new(e)),
            })?
        );
    } else {
        output.success(&format!(
            "Project '{}' generated ({} files)",
            report.project_name, report.files_written,
        ))?;
        for module in &report.modules {
            output.print(&format!("  {module}/"))?;
        }
    }

    // 7. Install chain
    if args.skip_install || config.install.skip {
        output.info("Skipping install chain (--skip-install)")?;
    } else {
        let halt = args.halt_on_failure || config.install.halt_on_failure;
        run_install_chain(&ctx, &output_root, halt, &output)?;
    }

    // 8. Next steps
    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", output_root.display()))?;
        output.print("  ./gradlew build")?;
        output.print(&format!(
            "  java -jar {}/build/libs/*.jar server",
            ctx.module_dir("server")
        ))?;
    }

    Ok(())
}

// ── Install chain ─────────────────────────────────────────────────────────────

/// Run the standard git/gradle/npm/bower/gulp chain with a spinner.
fn run_install_chain(
    ctx: &ProjectContext,
    project_root: &Path,
    halt_on_failure: bool,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = InstallPlan::standard(ctx);
    let runner = InstallRunner::new(Box::new(ShellRunner::new()), halt_on_failure);

    output.header("Bootstrapping project (git, gradle, npm, bower, gulp)...")?;

    let spinner = if output.is_quiet() {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let total = plan.len();
    let report = runner.run(&plan, project_root, |index, step| {
        spinner.set_message(format!("[{}/{}] {}", index + 1, total, step.display()));
    })?;
    spinner.finish_and_clear();

    if report.all_succeeded() {
        output.success("Install chain completed")?;
    } else {
        for failure in report.failures() {
            output.warning(&format!("install step failed: {}", failure.command))?;
        }
        if report.aborted {
            output.warning("Install chain aborted; remaining steps were skipped")?;
        } else {
            output.warning("Some install steps failed; the generated files are intact")?;
        }
        output.info("Re-run the failed tools manually inside the project directory")?;
    }

    Ok(())
}

// ── Answer collection ─────────────────────────────────────────────────────────

/// The default project name is the target directory's trailing segment
/// (the current directory's name when generating into `.`).
fn default_project_name(dir: &Path) -> CliResult<String> {
    let effective = if dir.as_os_str() == "." {
        std::env::current_dir().map_err(|e| CliError::IoError {
            message: "cannot determine current directory".into(),
            source: e,
        })?
    } else {
        dir.to_path_buf()
    };

    Ok(effective
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("application")
        .to_string())
}

fn collect_answers(
    args: &NewArgs,
    config: &AppConfig,
    default_name: &str,
    interactive: bool,
) -> CliResult<Answers> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None if interactive => prompt("Your project name", default_name)?,
        None => default_name.to_string(),
    };

    let description = match &args.description {
        Some(d) => d.clone(),
        None if interactive => prompt("Your project description", &config.defaults.description)?,
        None => config.defaults.description.clone(),
    };

    let package = match &args.package {
        Some(p) => p.clone(),
        None if interactive => prompt("Your package", &config.defaults.package)?,
        None => config.defaults.package.clone(),
    };

    Ok(Answers {
        name,
        description,
        package,
    })
}

/// The derived class name and slug are empty for a letterless name, which
/// would produce module directories like `-server`.  Reject it up front.
fn validate_project_name(name: &str) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if !name.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name must contain at least one letter".into(),
        });
    }
    Ok(())
}

/// A populated directory is only written into with `--force`; a missing or
/// empty directory is always fine.
fn ensure_target_usable(dir: &Path, force: bool) -> CliResult<()> {
    if !dir.exists() || force {
        return Ok(());
    }

    let mut entries = std::fs::read_dir(dir).map_err(|e| CliError::IoError {
        message: format!("cannot inspect '{}'", dir.display()),
        source: e,
    })?;

    if entries.next().is_some() {
        return Err(CliError::DirectoryNotEmpty {
            path: dir.to_path_buf(),
        });
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn prompt(label: &str, default: &str) -> CliResult<String> {
    dialoguer::Input::<String>::new()
        .with_prompt(label)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CliError::InvalidInput {
            message: format!("prompt failed: {e}"),
            source: None,
        })
}

#[cfg(not(feature = "interactive"))]
fn prompt(label: &str, default: &str) -> CliResult<String> {
    use std::io::{self, Write};

    print!("{label} [{default}]: ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(|e| CliError::IoError {
        message: "failed to read input".into(),
        source: e,
    })?;

    let input = input.trim();
    Ok(if input.is_empty() {
        default.to_string()
    } else {
        input.to_string()
    })
}

fn show_configuration(ctx: &ProjectContext, output_root: &Path, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:     {}", ctx.name()))?;
    if !ctx.description().is_empty() {
        out.print(&format!("  Description: {}", ctx.description()))?;
    }
    out.print(&format!("  Package:     {}", ctx.package()))?;
    out.print(&format!("  Class name:  {}", ctx.class_name()))?;
    out.print(&format!("  Modules:     {}-{{distribution,app,server}}", ctx.slug()))?;
    out.print(&format!("  Location:    {}", output_root.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
