use std::path::PathBuf;

use thiserror::Error;
use tracklint_core_types::RunId;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every environment fault the linter can hit maps to one of these kinds.
/// Policy violations are never errors; they are reported as `Violation`
/// values and only affect the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    InvalidPattern,

    // Environment
    NotARepository,
    Io,
    ExternalService,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidPattern => "ERR_INVALID_PATTERN",
            ExErrorKind::NotARepository => "ERR_NOT_A_REPOSITORY",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a kind for programmatic handling plus the operation and path that
/// were involved, so the CLI can print one self-describing diagnostic.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    run_id: Option<RunId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            run_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add run correlation
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the run ID, if any
    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised while gathering the tracked-file snapshot
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LintError {
    /// A `git ls-files --stage` record had no tab between metadata and path
    #[error("Malformed tree listing record: {record:?}")]
    MalformedRecord { record: String },

    /// The mode field of a tree listing record is not an octal number
    #[error("Invalid file mode {mode:?} for {path}")]
    InvalidMode { path: String, mode: String },

    /// A compiled-in policy pattern failed to compile
    #[error("Invalid policy pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A tracked file could not be opened for its first line
    #[error("Cannot read {path}: {reason}")]
    UnreadableFile { path: PathBuf, reason: String },

    /// The directory is not inside a git work tree
    #[error("Not a git repository: {dir}")]
    NotARepository { dir: PathBuf },

    /// A git subprocess could not be spawned or exited unsuccessfully
    #[error("git {command} failed: {reason}")]
    GitFailed { command: String, reason: String },

    /// Report serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<LintError> for ExError {
    fn from(err: LintError) -> Self {
        match err {
            LintError::MalformedRecord { record } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_tree_listing")
                .with_message(format!("Malformed tree listing record {:?}", record)),

            LintError::InvalidMode { path, mode } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_tree_listing")
                .with_path(path)
                .with_message(format!("Mode {:?} is not an octal number", mode)),

            LintError::InvalidPattern { pattern, reason } => {
                ExError::new(ExErrorKind::InvalidPattern)
                    .with_op("compile_policy")
                    .with_message(format!("Pattern {:?} does not compile: {}", pattern, reason))
            }

            LintError::UnreadableFile { path, reason } => ExError::new(ExErrorKind::Io)
                .with_op("read_first_line")
                .with_path(path.display().to_string())
                .with_message(reason),

            LintError::NotARepository { dir } => ExError::new(ExErrorKind::NotARepository)
                .with_op("discover_root")
                .with_path(dir.display().to_string())
                .with_message("Not inside a git work tree"),

            LintError::GitFailed { command, reason } => {
                ExError::new(ExErrorKind::ExternalService)
                    .with_op(format!("git {}", command))
                    .with_message(reason)
            }

            LintError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for LintError {
    fn from(err: serde_json::Error) -> Self {
        LintError::Serialization {
            message: err.to_string(),
        }
    }
}
