//! Lint command
//!
//! Usage: tracklint [-C <DIR>] [--format text|json] [--log-json]

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracklint_core::logging_facility::{init, Profile};
use tracklint_core::{LintEngine, LintPolicy, Result};
use tracklint_core_types::RunId;
use tracklint_git::GitRepo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per violation
    Text,
    /// A single JSON document
    Json,
}

#[derive(Debug, Args)]
pub struct LintArgs {
    /// Directory inside the repository to check (default: current directory)
    #[arg(short = 'C', long = "repo", default_value = ".")]
    pub repo: PathBuf,

    /// Violation output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Emit logs on stderr as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// Execute the lint command and return the process exit code
///
/// # Errors
///
/// Returns an environment fault: not a repository, git failure, unreadable
/// tracked file.
pub fn execute(args: LintArgs) -> Result<i32> {
    init(if args.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let run_id = RunId::new();
    let repo = GitRepo::discover(&args.repo)?;
    let engine = LintEngine::new(LintPolicy::default())?;
    let report = engine.run(&repo, &run_id)?;

    if !report.is_clean() {
        match args.format {
            OutputFormat::Text => print!("{}", report.render_text()),
            OutputFormat::Json => println!("{}", report.render_json()?),
        }
    }

    Ok(report.exit_code())
}
