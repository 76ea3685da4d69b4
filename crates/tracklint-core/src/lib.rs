//! tracklint core - tracked-file hygiene checks
//!
//! This crate provides:
//! - Tracked-file metadata (`FileMetadata`, `FileIndex`) parsed from git output
//! - The compiled-in `LintPolicy` tables
//! - Four lint passes: general filenames, source filenames, executable
//!   permission/shebang consistency, and shebang/permission consistency
//! - `LintEngine`, which runs every pass over one snapshot and sums the result
//! - Error and logging facilities shared by the git adapter and the CLI

pub mod engine;
pub mod errors;
pub mod extract;
pub mod logging_facility;
pub mod model;
pub mod policy;
pub mod rules;
pub mod source;

// Re-export commonly used types
pub use engine::{LintEngine, LintReport};
pub use errors::{ExError, ExErrorKind, LintError, Result};
pub use model::{FileIndex, FileMetadata, Permission, Rule, Violation};
pub use policy::LintPolicy;
pub use source::{FirstLineSource, MemoryRepo, RepoSource};
