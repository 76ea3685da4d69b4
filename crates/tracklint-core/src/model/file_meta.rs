use serde::Serialize;

/// Mode git records for regular files
pub const MODE_NON_EXECUTABLE: u32 = 0o644;
/// Mode git records for executable files
pub const MODE_EXECUTABLE: u32 = 0o755;

/// Typed view of a tracked file's permission bits
///
/// Git only keeps an executable bit for regular files, so anything other than
/// the two known modes (symlinks, submodules) lands in `Other` and is a policy
/// violation rather than a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Permission {
    NonExecutable,
    Executable,
    Other(u32),
}

impl Permission {
    pub fn from_mode(mode: u32) -> Self {
        match mode & 0o7777 {
            MODE_NON_EXECUTABLE => Permission::NonExecutable,
            MODE_EXECUTABLE => Permission::Executable,
            other => Permission::Other(other),
        }
    }

    /// Octal bits, masked to 12 bits
    pub fn bits(&self) -> u32 {
        match self {
            Permission::NonExecutable => MODE_NON_EXECUTABLE,
            Permission::Executable => MODE_EXECUTABLE,
            Permission::Other(bits) => *bits,
        }
    }

    pub fn is_executable(&self) -> bool {
        matches!(self, Permission::Executable)
    }
}

/// Metadata for one tracked file
///
/// `extension` and `full_extension` are two deliberate views of the file
/// name: `split-debug.sh.in` has extension `in` and full extension `sh.in`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    path: String,
    permission: Permission,
    extension: Option<String>,
    full_extension: Option<String>,
}

impl FileMetadata {
    pub fn new(path: impl Into<String>, mode: u32) -> Self {
        let path = path.into();
        let name = file_name(&path);
        Self {
            extension: extension_of(name),
            full_extension: full_extension_of(name),
            permission: Permission::from_mode(mode),
            path,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn permission(&self) -> Permission {
        self.permission
    }

    /// Raw octal permission bits
    pub fn permission_bits(&self) -> u32 {
        self.permission.bits()
    }

    /// Text after the last dot of the file name
    ///
    /// Leading dots do not start an extension, so `.gitignore` has none.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Text after the first dot of the file name
    pub fn full_extension(&self) -> Option<&str> {
        self.full_extension.as_deref()
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn extension_of(name: &str) -> Option<String> {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    let (_, rest) = name.split_at(stem_start);
    rest.rfind('.')
        .map(|idx| &rest[idx + 1..])
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
}

fn full_extension_of(name: &str) -> Option<String> {
    name.split_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_views() {
        let meta = FileMetadata::new("ci/lint_run_all.sh", 0o100755);
        assert_eq!(meta.extension(), Some("sh"));
        assert_eq!(meta.full_extension(), Some("sh"));

        let meta = FileMetadata::new("contrib/devtools/split-debug.sh.in", 0o100644);
        assert_eq!(meta.extension(), Some("in"));
        assert_eq!(meta.full_extension(), Some("sh.in"));

        let meta = FileMetadata::new("ci/retry/retry", 0o100755);
        assert_eq!(meta.extension(), None);
        assert_eq!(meta.full_extension(), None);
    }

    #[test]
    fn test_directory_dots_do_not_leak_into_extension() {
        let meta = FileMetadata::new("web/e.cash/README", 0o100644);
        assert_eq!(meta.extension(), None);
        assert_eq!(meta.full_extension(), None);
    }

    #[test]
    fn test_dotfile_has_no_extension_but_has_full_extension() {
        let meta = FileMetadata::new(".gitignore", 0o100644);
        assert_eq!(meta.extension(), None);
        assert_eq!(meta.full_extension(), Some("gitignore"));

        let meta = FileMetadata::new("contrib/.env.sh", 0o100644);
        assert_eq!(meta.extension(), Some("sh"));
        assert_eq!(meta.full_extension(), Some("env.sh"));
    }

    #[test]
    fn test_permission_is_masked_to_twelve_bits() {
        assert_eq!(Permission::from_mode(0o100755), Permission::Executable);
        assert_eq!(Permission::from_mode(0o100644), Permission::NonExecutable);
        assert_eq!(Permission::from_mode(0o120000), Permission::Other(0));
        assert_eq!(Permission::from_mode(0o100664).bits(), 0o664);
    }
}
