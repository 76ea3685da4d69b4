use std::path::PathBuf;

use tracklint_core::errors::{ExError, ExErrorKind, LintError};

#[test]
fn test_malformed_record_maps_to_invalid_input() {
    let ex: ExError = LintError::MalformedRecord {
        record: "garbage".to_string(),
    }
    .into();

    assert_eq!(ex.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex.code(), "ERR_INVALID_INPUT");
    assert_eq!(ex.op(), Some("parse_tree_listing"));
}

#[test]
fn test_unreadable_file_carries_path() {
    let ex: ExError = LintError::UnreadableFile {
        path: PathBuf::from("ci/run.sh"),
        reason: "Permission denied".to_string(),
    }
    .into();

    assert_eq!(ex.kind(), ExErrorKind::Io);
    assert_eq!(ex.path(), Some("ci/run.sh"));
    assert_eq!(ex.message(), "Permission denied");
}

#[test]
fn test_git_failure_is_external_service() {
    let ex: ExError = LintError::GitFailed {
        command: "ls-files".to_string(),
        reason: "exit status 128".to_string(),
    }
    .into();

    assert_eq!(ex.kind(), ExErrorKind::ExternalService);
    assert_eq!(ex.op(), Some("git ls-files"));
    assert!(ex.to_string().starts_with("[ERR_EXTERNAL_SERVICE]"));
}

#[test]
fn test_not_a_repository_code() {
    let ex: ExError = LintError::NotARepository {
        dir: PathBuf::from("/tmp/nowhere"),
    }
    .into();

    assert_eq!(ex.code(), "ERR_NOT_A_REPOSITORY");
}

#[test]
fn test_lint_error_display() {
    let err = LintError::InvalidMode {
        path: "README.md".to_string(),
        mode: "10064x".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid file mode \"10064x\" for README.md");
}
