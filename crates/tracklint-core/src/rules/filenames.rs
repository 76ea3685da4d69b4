//! General filename policy
//!
//! Every tracked path must be portable across case-(in)sensitive filesystems
//! and safe to pass to shell tooling: letters, digits, `/`, `_`, `.`, `@`,
//! and `-` after the first character.

use regex::Regex;

use super::{compile_anchored, Check, Snapshot};
use crate::errors::Result;
use crate::model::{Rule, Violation};
use crate::policy::LintPolicy;

pub struct FilenameCheck {
    pattern: String,
    allowed: Regex,
    exceptions: Vec<String>,
}

impl FilenameCheck {
    /// # Errors
    ///
    /// Returns `ERR_INVALID_PATTERN` if the policy pattern does not compile.
    pub fn new(policy: &LintPolicy) -> Result<Self> {
        Ok(Self {
            pattern: policy.allowed_filename.clone(),
            allowed: compile_anchored(&policy.allowed_filename)?,
            exceptions: policy.allowed_filename_exceptions.clone(),
        })
    }

    /// True when `path` passes the policy or is an exception
    pub fn accepts(&self, path: &str) -> bool {
        self.allowed.is_match(path) || self.exceptions.iter().any(|e| e == path)
    }
}

impl Check for FilenameCheck {
    fn name(&self) -> &'static str {
        "check_all_filenames"
    }

    fn check(&self, snapshot: &Snapshot<'_>) -> Result<Vec<Violation>> {
        Ok(snapshot
            .files
            .paths()
            .filter(|path| !self.accepts(path))
            .map(|path| {
                Violation::new(
                    Rule::Filename,
                    path,
                    format!(
                        "File \"{}\" does not match the allowed filename regexp ('{}'). Rename it.",
                        path, self.pattern
                    ),
                )
            })
            .collect())
    }
}
