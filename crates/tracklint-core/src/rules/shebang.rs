//! Shebang presence policy
//!
//! A file whose first line is a shebang must be executable, unless its full
//! extension marks it as sourced rather than run (`sh.in`, `bash`, ...).

use super::{Check, Snapshot};
use crate::errors::Result;
use crate::model::file_meta::MODE_EXECUTABLE;
use crate::model::{Rule, Violation};
use crate::policy::LintPolicy;

pub struct ShebangPresenceCheck {
    policy: LintPolicy,
}

impl ShebangPresenceCheck {
    pub fn new(policy: &LintPolicy) -> Self {
        Self {
            policy: policy.clone(),
        }
    }
}

impl Check for ShebangPresenceCheck {
    fn name(&self) -> &'static str {
        "check_shebang_file_permissions"
    }

    fn check(&self, snapshot: &Snapshot<'_>) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();

        for path in snapshot.shebang_paths {
            let Some(meta) = snapshot.files.get(path) else {
                tracing::debug!(path = %path, "shebang match is not a tracked file");
                continue;
            };
            if meta.permission().is_executable()
                || self.policy.is_sourced_extension(meta.full_extension())
            {
                continue;
            }

            let bits = meta.permission_bits();
            violations.push(Violation::new(
                Rule::ShebangNotExecutable,
                path.as_str(),
                format!(
                    "File \"{path}\" contains a shebang line, but has the file permission \
                     {bits:03o} instead of the expected executable permission \
                     {MODE_EXECUTABLE:03o}. Do \"chmod {MODE_EXECUTABLE:03o} {path}\" \
                     (or remove the shebang line)."
                ),
            ));
        }

        Ok(violations)
    }
}
