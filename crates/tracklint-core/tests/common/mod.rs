use tracklint_core::{LintEngine, LintPolicy, LintReport, MemoryRepo, Rule};
use tracklint_core_types::RunId;

pub const EXEC: u32 = 0o100755;
pub const PLAIN: u32 = 0o100644;

/// Run the default policy against an in-memory repository
#[allow(dead_code)]
pub fn lint(repo: &MemoryRepo) -> LintReport {
    LintEngine::new(LintPolicy::default())
        .expect("default policy compiles")
        .run(repo, &RunId::new())
        .expect("in-memory run has no environment faults")
}

/// Rules reported for one path, in report order
#[allow(dead_code)]
pub fn rules_for(report: &LintReport, path: &str) -> Vec<Rule> {
    report
        .violations
        .iter()
        .filter(|v| v.path == path)
        .map(|v| v.rule)
        .collect()
}
