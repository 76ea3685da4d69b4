//! Lint driver
//!
//! Gathers the snapshot once, then runs the four passes in order against it.
//! Every pass always runs; the summed violation count decides the exit code.
//!
//! ## Logging Ownership
//!
//! The engine owns lifecycle logging for the run and each pass:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on an environment fault
//!
//! Checks and the extractor use only `tracing::debug!()` for details.

use std::time::Instant;

use serde::Serialize;
use tracklint_core_types::RunId;

use crate::errors::{LintError, Result};
use crate::extract::{parse_shebang_matches, parse_tree_listing};
use crate::model::Violation;
use crate::policy::LintPolicy;
use crate::rules::{
    Check, FilenameCheck, PermissionCheck, ShebangPresenceCheck, Snapshot, SourceFilenameCheck,
};
use crate::source::RepoSource;
use crate::{log_op_end, log_op_error, log_op_start};

/// Process exit status for a clean run
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit status for violations or an environment fault
pub const EXIT_FAILURE: i32 = 1;

/// Violation count for one pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub check: &'static str,
    pub violations: usize,
}

/// Outcome of a full run
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
    pub run_id: Option<RunId>,
    pub file_count: usize,
    pub checks: Vec<CheckSummary>,
    pub violations: Vec<Violation>,
}

impl LintReport {
    pub fn total(&self) -> usize {
        self.violations.len()
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }

    /// Violation count for a named pass, if it ran
    pub fn count_for(&self, check: &str) -> Option<usize> {
        self.checks
            .iter()
            .find(|c| c.check == check)
            .map(|c| c.violations)
    }

    /// One line per violation, in pass order
    pub fn render_text(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("{}\n", v))
            .collect()
    }

    /// Pretty JSON document with the total and every violation
    ///
    /// # Errors
    ///
    /// Returns `ERR_SERIALIZATION` if encoding fails.
    pub fn render_json(&self) -> Result<String> {
        #[derive(Serialize)]
        struct JsonReport<'a> {
            total: usize,
            checks: &'a [CheckSummary],
            violations: &'a [Violation],
        }

        let doc = JsonReport {
            total: self.total(),
            checks: &self.checks,
            violations: &self.violations,
        };
        Ok(serde_json::to_string_pretty(&doc).map_err(LintError::from)?)
    }
}

/// The four passes, built once from one policy
pub struct LintEngine {
    policy: LintPolicy,
    checks: Vec<Box<dyn Check>>,
}

impl LintEngine {
    /// Build every pass, compiling all policy patterns up front
    ///
    /// # Errors
    ///
    /// Returns `ERR_INVALID_PATTERN` if a policy pattern does not compile.
    pub fn new(policy: LintPolicy) -> Result<Self> {
        let checks: Vec<Box<dyn Check>> = vec![
            Box::new(FilenameCheck::new(&policy)?),
            Box::new(SourceFilenameCheck::new(&policy)?),
            Box::new(PermissionCheck::new(&policy)),
            Box::new(ShebangPresenceCheck::new(&policy)),
        ];
        Ok(Self { policy, checks })
    }

    pub fn policy(&self) -> &LintPolicy {
        &self.policy
    }

    /// Query the repository and run every pass
    ///
    /// # Errors
    ///
    /// Returns the first environment fault (listing, search, or file read).
    /// Policy violations never produce an error.
    pub fn run<R: RepoSource>(&self, repo: &R, run_id: &RunId) -> Result<LintReport> {
        log_op_start!("lint_run", run_id = run_id.as_str());
        let start = Instant::now();

        let report = self.run_impl(repo, run_id).map_err(|e| {
            log_op_error!(
                "lint_run",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                run_id = run_id.as_str()
            );
            e.with_run_id(run_id.clone())
        })?;

        log_op_end!(
            "lint_run",
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = run_id.as_str(),
            file_count = report.file_count,
            violations = report.total()
        );
        Ok(report)
    }

    fn run_impl<R: RepoSource>(&self, repo: &R, run_id: &RunId) -> Result<LintReport> {
        let files = parse_tree_listing(&repo.tracked_files()?, &self.policy)?;
        let shebang_paths = parse_shebang_matches(&repo.shebang_matches()?, &self.policy);

        let snapshot = Snapshot {
            files: &files,
            shebang_paths: &shebang_paths,
            first_lines: repo,
        };

        let mut report = LintReport {
            run_id: Some(run_id.clone()),
            file_count: files.len(),
            ..LintReport::default()
        };

        for check in &self.checks {
            let violations = run_check(check.as_ref(), &snapshot)?;
            report.checks.push(CheckSummary {
                check: check.name(),
                violations: violations.len(),
            });
            report.violations.extend(violations);
        }

        Ok(report)
    }
}

fn run_check(check: &dyn Check, snapshot: &Snapshot<'_>) -> Result<Vec<Violation>> {
    let op = check.name();
    log_op_start!(op, file_count = snapshot.files.len());
    let start = Instant::now();

    let violations = check.check(snapshot).map_err(|e| {
        log_op_error!(
            op,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    for v in &violations {
        tracing::debug!(check = op, rule = v.rule.code(), path = %v.path, "violation");
    }
    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        violations = violations.len()
    );
    Ok(violations)
}
