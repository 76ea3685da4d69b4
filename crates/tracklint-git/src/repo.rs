//! `RepoSource` over a real git work tree

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracklint_core::errors::LintError;
use tracklint_core::source::{read_first_line, FirstLineSource, RepoSource};

use crate::errors::{command_failed, not_a_repository, spawn_failed, unreadable, Result};

/// Arguments for the staged tree listing
pub const LS_FILES_ARGS: &[&str] = &["ls-files", "-z", "--full-name", "--stage"];

/// Arguments for the line-anchored shebang search
pub const GREP_SHEBANG_ARGS: &[&str] = &[
    "grep",
    "-z",
    "--no-color",
    "--full-name",
    "--line-number",
    "-I",
    "-e",
    "^#!",
];

/// A git work tree rooted at its top-level directory
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    /// Find the work tree containing `start`
    ///
    /// # Errors
    ///
    /// Returns `ERR_NOT_A_REPOSITORY` when `start` is outside a work tree, or
    /// `ERR_EXTERNAL_SERVICE` when git cannot be run.
    pub fn discover(start: &Path) -> Result<Self> {
        let output = git(start, &["rev-parse", "--show-toplevel"])?;
        if !output.status.success() {
            return Err(not_a_repository(
                start,
                command_failed("rev-parse", &output),
            ));
        }

        let top = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if top.is_empty() {
            return Err(LintError::NotARepository {
                dir: start.to_path_buf(),
            }
            .into());
        }

        tracing::debug!(root = %top, "discovered repository root");
        Ok(Self::at(top))
    }

    /// Use `root` as the work tree top without asking git
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        git(&self.root, args)
    }
}

fn git(dir: &Path, args: &[&str]) -> Result<Output> {
    let command = args.first().copied().unwrap_or_default();
    tracing::debug!(dir = %dir.display(), ?args, "running git");

    Command::new("git")
        .current_dir(dir)
        .args(["-c", "core.quotepath=off"])
        .args(args)
        .output()
        .map_err(|e| spawn_failed(command, e))
}

impl FirstLineSource for GitRepo {
    fn first_line(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.root.join(path);
        let file = File::open(&full).map_err(|e| unreadable(Path::new(path), e))?;
        read_first_line(BufReader::new(file)).map_err(|e| unreadable(Path::new(path), e))
    }
}

impl RepoSource for GitRepo {
    fn tracked_files(&self) -> Result<Vec<u8>> {
        let output = self.run(LS_FILES_ARGS)?;
        if !output.status.success() {
            return Err(command_failed("ls-files", &output));
        }
        Ok(output.stdout)
    }

    fn shebang_matches(&self) -> Result<Vec<u8>> {
        let output = self.run(GREP_SHEBANG_ARGS)?;
        match output.status.code() {
            Some(0) => Ok(output.stdout),
            // Status 1 without diagnostics is "nothing matched"
            Some(1) if output.stderr.is_empty() => Ok(Vec::new()),
            _ => Err(command_failed("grep", &output)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_keeps_root() {
        let repo = GitRepo::at("/src/project");
        assert_eq!(repo.root(), Path::new("/src/project"));
    }

    #[test]
    fn test_grep_is_anchored_to_line_start() {
        assert_eq!(GREP_SHEBANG_ARGS.last(), Some(&"^#!"));
        assert!(GREP_SHEBANG_ARGS.contains(&"--line-number"));
        assert!(GREP_SHEBANG_ARGS.contains(&"-z"));
    }

    #[test]
    fn test_first_line_of_missing_file_is_io_error() {
        let repo = GitRepo::at(std::env::temp_dir().join("tracklint-missing-root"));
        let err = repo.first_line("nope.sh").unwrap_err();
        assert_eq!(err.code(), "ERR_IO");
        assert_eq!(err.path(), Some("nope.sh"));
    }
}
