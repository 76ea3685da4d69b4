//! Source filename policy
//!
//! Source files (`.cpp`, `.h`, `.py`, `.sh`, `.rs`, any case) must be named
//! with lowercase letters, digits, `_`, `.`, `-` and `/`. Vendored subtrees
//! and a few historically named files are carved out by prefix patterns.

use regex::Regex;

use super::{compile_anchored, compile_anchored_ci, Check, Snapshot};
use crate::errors::Result;
use crate::model::{Rule, Violation};
use crate::policy::LintPolicy;

pub struct SourceFilenameCheck {
    pattern: String,
    is_source: Regex,
    allowed: Regex,
    exceptions: Vec<Regex>,
}

impl SourceFilenameCheck {
    /// Compiles every exception pattern once for the whole run
    ///
    /// # Errors
    ///
    /// Returns `ERR_INVALID_PATTERN` if any policy pattern does not compile.
    pub fn new(policy: &LintPolicy) -> Result<Self> {
        let exceptions = policy
            .source_filename_exceptions
            .iter()
            .map(|p| compile_anchored(p))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            pattern: policy.allowed_source_filename.clone(),
            is_source: compile_anchored_ci(&policy.source_filename)?,
            allowed: compile_anchored(&policy.allowed_source_filename)?,
            exceptions,
        })
    }

    pub fn is_source(&self, path: &str) -> bool {
        self.is_source.is_match(path)
    }

    /// True when a source path passes the strict pattern or an exception
    pub fn accepts(&self, path: &str) -> bool {
        self.allowed.is_match(path) || self.exceptions.iter().any(|re| re.is_match(path))
    }
}

impl Check for SourceFilenameCheck {
    fn name(&self) -> &'static str {
        "check_source_filenames"
    }

    fn check(&self, snapshot: &Snapshot<'_>) -> Result<Vec<Violation>> {
        Ok(snapshot
            .files
            .paths()
            .filter(|path| self.is_source(path) && !self.accepts(path))
            .map(|path| {
                Violation::new(
                    Rule::SourceFilename,
                    path,
                    format!(
                        "File \"{}\" does not match the allowed source filename regexp ('{}') \
                         or any exception regexp. Rename it.",
                        path, self.pattern
                    ),
                )
            })
            .collect())
    }
}
