//! Permission and shebang consistency
//!
//! Executables must start with a shebang, and for extensions with a canonical
//! interpreter the shebang must be one of the accepted lines. Modes other than
//! 644 and 755 are reported. Only executables are opened, and only their first
//! line is read.

use super::{Check, Snapshot};
use crate::errors::Result;
use crate::model::file_meta::{MODE_EXECUTABLE, MODE_NON_EXECUTABLE};
use crate::model::{FileMetadata, Permission, Rule, Violation};
use crate::policy::{LintPolicy, SHEBANG};

pub struct PermissionCheck {
    policy: LintPolicy,
}

impl PermissionCheck {
    pub fn new(policy: &LintPolicy) -> Self {
        Self {
            policy: policy.clone(),
        }
    }

    fn check_executable(&self, meta: &FileMetadata, first_line: &[u8]) -> Vec<Violation> {
        let path = meta.path();
        let mut violations = Vec::new();

        if self.policy.is_executable_exception(path) {
            return violations;
        }

        if !first_line.starts_with(SHEBANG) {
            violations.push(Violation::new(
                Rule::MissingShebang,
                path,
                format!(
                    "File \"{path}\" has permission {MODE_EXECUTABLE:03o} (executable) and is thus \
                     expected to contain a shebang '#!'. Add shebang or do \
                     \"chmod {MODE_NON_EXECUTABLE:03o} {path}\" to make it non-executable."
                ),
            ));
        }

        if let Some(allowed) = self.policy.shebangs_for(meta.extension()) {
            if !allowed.iter().any(|s| s.as_slice() == first_line) {
                let expected = allowed
                    .iter()
                    .map(|s| String::from_utf8_lossy(s).into_owned())
                    .collect::<Vec<_>>()
                    .join(" or ");
                violations.push(Violation::new(
                    Rule::UnexpectedShebang,
                    path,
                    format!("File \"{path}\" is missing expected shebang {expected}"),
                ));
            }
        }

        violations
    }
}

impl Check for PermissionCheck {
    fn name(&self) -> &'static str {
        "check_all_file_permissions"
    }

    fn check(&self, snapshot: &Snapshot<'_>) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();

        for meta in snapshot.files.iter() {
            match meta.permission() {
                Permission::Executable => {
                    let first_line = snapshot.first_lines.first_line(meta.path())?;
                    violations.extend(self.check_executable(meta, &first_line));
                }
                Permission::NonExecutable => {}
                Permission::Other(bits) => {
                    let path = meta.path();
                    violations.push(Violation::new(
                        Rule::UnexpectedPermission,
                        path,
                        format!(
                            "File \"{path}\" has unexpected permission {bits:03o}. Do \
                             \"chmod {MODE_NON_EXECUTABLE:03o} {path}\" (if non-executable) or \
                             \"chmod {MODE_EXECUTABLE:03o} {path}\" (if executable)."
                        ),
                    ));
                }
            }
        }

        Ok(violations)
    }
}
