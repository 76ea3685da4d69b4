//! Git-backed repository source for tracklint
//!
//! Runs the tracked-file listing and the shebang search with the `git` binary
//! and reads first lines from the work tree. Every query is anchored at the
//! repository root found by `git rev-parse --show-toplevel`.

pub mod errors;
pub mod repo;

pub use repo::GitRepo;
