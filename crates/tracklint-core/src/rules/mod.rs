//! The four lint passes
//!
//! Each pass is a `Check` built from the shared `LintPolicy`. Checks never
//! stop at the first failure: they return every violation they find.

pub mod filenames;
pub mod permissions;
pub mod shebang;
pub mod source_filenames;

use regex::{Regex, RegexBuilder};

use crate::errors::{LintError, Result};
use crate::model::{FileIndex, Violation};
use crate::source::FirstLineSource;

pub use filenames::FilenameCheck;
pub use permissions::PermissionCheck;
pub use shebang::ShebangPresenceCheck;
pub use source_filenames::SourceFilenameCheck;

/// Read-only inputs shared by every check in one run
pub struct Snapshot<'a> {
    pub files: &'a FileIndex,
    /// Paths whose first line starts with `#!`, third-party already removed
    pub shebang_paths: &'a [String],
    pub first_lines: &'a dyn FirstLineSource,
}

/// One lint pass over the snapshot
pub trait Check {
    /// Stable name used as the log `op`
    fn name(&self) -> &'static str;

    /// Run the pass and return every violation
    ///
    /// # Errors
    ///
    /// Returns an environment fault only; policy failures are violations.
    fn check(&self, snapshot: &Snapshot<'_>) -> Result<Vec<Violation>>;
}

/// Compile a pattern anchored at the start of the path
pub(crate) fn compile_anchored(pattern: &str) -> Result<Regex> {
    build(pattern, false)
}

/// Case-insensitive variant of `compile_anchored`
pub(crate) fn compile_anchored_ci(pattern: &str) -> Result<Regex> {
    build(pattern, true)
}

fn build(pattern: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(&format!("^(?:{})", pattern))
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|e| {
            LintError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_anchored_matches_prefix_only() {
        let re = compile_anchored("src/univalue/").unwrap();
        assert!(re.is_match("src/univalue/lib/univalue.cpp"));
        assert!(!re.is_match("vendor/src/univalue/x.cpp"));
    }

    #[test]
    fn test_compile_anchored_ci() {
        let re = compile_anchored_ci(r".*\.(cpp|sh)$").unwrap();
        assert!(re.is_match("Ci/Lint.SH"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = compile_anchored("src/(unclosed").unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_PATTERN");
    }
}
