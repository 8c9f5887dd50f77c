//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dwag",
    bin_name = "dwag",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Dropwizard + Angular + Gradle project generator",
    long_about = "Dwag generates a ready-to-build multi-module Gradle project \
                  with a Dropwizard backend and an Angular frontend, then \
                  bootstraps version control and the frontend toolchain.",
    after_help = "EXAMPLES:\n\
        \x20 dwag new my-service --package com.example.service\n\
        \x20 dwag new my-service --yes --skip-install\n\
        \x20 dwag new . --name \"Billing Portal\" --dry-run\n\
        \x20 dwag completions bash > /usr/share/bash-completion/completions/dwag",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project skeleton.
    #[command(
        visible_alias = "n",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 dwag new my-service\n\
            \x20 dwag new my-service --package com.example.service --yes\n\
            \x20 dwag new ../billing --name \"Billing Portal\" --skip-install"
    )]
    New(NewArgs),

    /// Initialise a dwag configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 dwag init           # default location\n\
            \x20 dwag init --local   # .dwag.toml in CWD\n\
            \x20 dwag init --force   # overwrite existing"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dwag completions bash > ~/.local/share/bash-completion/completions/dwag\n\
            \x20 dwag completions zsh  > ~/.zfunc/_dwag\n\
            \x20 dwag completions fish > ~/.config/fish/completions/dwag.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `dwag new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Directory to generate into.  Created if missing; the last path
    /// segment doubles as the default project name.
    #[arg(value_name = "DIR", default_value = ".", help = "Target directory")]
    pub dir: PathBuf,

    /// Project name (free text; the class name and module slug derive
    /// from it).
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Project name"
    )]
    pub name: Option<String>,

    /// Project description.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Project description"
    )]
    pub description: Option<String>,

    /// Java package qualifier for the server module.
    #[arg(
        short = 'p',
        long = "package",
        value_name = "PACKAGE",
        help = "Java package (e.g. com.example.service)"
    )]
    pub package: Option<String>,

    /// Skip prompts; missing answers take their defaults.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Accept defaults and skip prompts"
    )]
    pub yes: bool,

    /// Generate into a non-empty directory (destructive).
    #[arg(long = "force", help = "Overwrite files in a non-empty directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip the post-generation install chain (git, gradle, npm, bower,
    /// gulp).
    #[arg(long = "skip-install", help = "Skip git/gradle/npm/bower/gulp bootstrap")]
    pub skip_install: bool,

    /// Abort the install chain at the first failing step instead of
    /// continuing.
    #[arg(long = "halt-on-failure", help = "Stop the install chain on the first failure")]
    pub halt_on_failure: bool,

    /// Read templates from a directory instead of the embedded payload.
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        help = "Custom template directory"
    )]
    pub templates_dir: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `dwag init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.dwag.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dwag completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
