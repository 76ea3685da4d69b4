//! Error helpers for tracklint-git
//!
//! Wraps tracklint-core `LintError` into `ExError` for git-specific failures

use std::path::Path;
use std::process::Output;

use tracklint_core::errors::{ExError, LintError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// git could not be started at all
pub fn spawn_failed(command: &str, err: std::io::Error) -> ExError {
    LintError::GitFailed {
        command: command.to_string(),
        reason: format!("failed to spawn git: {}", err),
    }
    .into()
}

/// git ran but exited unsuccessfully
pub fn command_failed(command: &str, output: &Output) -> ExError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    LintError::GitFailed {
        command: command.to_string(),
        reason: format!("{}: {}", output.status, stderr.trim()),
    }
    .into()
}

/// The start directory is not inside a work tree
pub fn not_a_repository(dir: &Path, cause: ExError) -> ExError {
    ExError::from(LintError::NotARepository {
        dir: dir.to_path_buf(),
    })
    .with_source(cause)
}

/// A tracked file could not be read
pub fn unreadable(path: &Path, err: std::io::Error) -> ExError {
    LintError::UnreadableFile {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracklint_core::errors::ExErrorKind;

    #[test]
    fn test_spawn_failed_is_external_service() {
        let err = spawn_failed(
            "ls-files",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no git"),
        );
        assert_eq!(err.kind(), ExErrorKind::ExternalService);
        assert!(err.message().contains("no git"));
    }

    #[test]
    fn test_not_a_repository_keeps_cause() {
        let cause = ExError::new(ExErrorKind::ExternalService).with_message("exit status: 128");
        let err = not_a_repository(Path::new("/tmp"), cause);
        assert_eq!(err.kind(), ExErrorKind::NotARepository);
        assert_eq!(
            err.source_error().map(|s| s.kind()),
            Some(ExErrorKind::ExternalService)
        );
    }
}
