//! Repository access seam
//!
//! The checkers never talk to git or the filesystem directly. They read the
//! raw query output and first lines through these traits, so the engine runs
//! the same against a real work tree or an in-memory fixture.

use std::collections::HashMap;
use std::io::{BufRead, Read};

use crate::errors::{ExError, ExErrorKind, Result};

/// Upper bound on bytes read when looking for the first line
pub const MAX_FIRST_LINE_BYTES: u64 = 4096;

/// Reads the first line of a tracked file
pub trait FirstLineSource {
    /// First line of `path` without its trailing newline
    ///
    /// # Errors
    ///
    /// Returns `ERR_IO` when the file cannot be opened or read.
    fn first_line(&self, path: &str) -> Result<Vec<u8>>;
}

/// Raw tracked-file queries plus first-line reads
pub trait RepoSource: FirstLineSource {
    /// NUL-separated `git ls-files -z --full-name --stage` output
    ///
    /// # Errors
    ///
    /// Returns an environment fault when the listing cannot be produced.
    fn tracked_files(&self) -> Result<Vec<u8>>;

    /// `git grep -z --full-name --line-number -I '^#!'` output
    ///
    /// # Errors
    ///
    /// Returns an environment fault when the search cannot be run.
    fn shebang_matches(&self) -> Result<Vec<u8>>;
}

/// Read one line from `reader`, bounded by `MAX_FIRST_LINE_BYTES`
///
/// # Errors
///
/// Propagates the reader's I/O error.
pub fn read_first_line<R: BufRead>(reader: R) -> std::io::Result<Vec<u8>> {
    let mut line = Vec::new();
    reader.take(MAX_FIRST_LINE_BYTES).read_until(b'\n', &mut line)?;
    while line.last() == Some(&b'\n') {
        line.pop();
    }
    Ok(line)
}

/// In-memory repository for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryRepo {
    files: Vec<(String, u32)>,
    contents: HashMap<String, Vec<u8>>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tracked file with `mode` and full `content`
    pub fn with_file(mut self, path: &str, mode: u32, content: impl AsRef<[u8]>) -> Self {
        self.files.push((path.to_string(), mode));
        self.contents.insert(path.to_string(), content.as_ref().to_vec());
        self
    }

    /// Add a tracked file whose content is missing from the work tree
    pub fn with_missing_file(mut self, path: &str, mode: u32) -> Self {
        self.files.push((path.to_string(), mode));
        self
    }
}

impl FirstLineSource for MemoryRepo {
    fn first_line(&self, path: &str) -> Result<Vec<u8>> {
        let content = self.contents.get(path).ok_or_else(|| {
            ExError::new(ExErrorKind::Io)
                .with_op("read_first_line")
                .with_path(path)
                .with_message("No such file")
        })?;
        read_first_line(content.as_slice()).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("read_first_line")
                .with_path(path)
                .with_message(e.to_string())
        })
    }
}

impl RepoSource for MemoryRepo {
    fn tracked_files(&self) -> Result<Vec<u8>> {
        let mut raw = Vec::new();
        for (path, mode) in &self.files {
            raw.extend_from_slice(
                format!("{:06o} e69de29bb2d1d6434b8b29ae775ad8c2e48c5391 0\t", mode).as_bytes(),
            );
            raw.extend_from_slice(path.as_bytes());
            raw.push(0);
        }
        Ok(raw)
    }

    fn shebang_matches(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for (path, _) in &self.files {
            let Some(content) = self.contents.get(path) else {
                continue;
            };
            for (idx, line) in content.split(|b| *b == b'\n').enumerate() {
                if line.starts_with(b"#!") {
                    out.extend_from_slice(format!("{}\0{}\0", path, idx + 1).as_bytes());
                    out.extend_from_slice(line);
                    out.push(b'\n');
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_first_line_strips_newline() {
        let line = read_first_line(&b"#!/bin/sh\necho hi\n"[..]).unwrap();
        assert_eq!(line, b"#!/bin/sh");
    }

    #[test]
    fn test_read_first_line_keeps_carriage_return() {
        let line = read_first_line(&b"#!/bin/sh\r\n"[..]).unwrap();
        assert_eq!(line, b"#!/bin/sh\r");
    }

    #[test]
    fn test_read_first_line_is_bounded() {
        let blob = vec![b'x'; 10_000];
        let line = read_first_line(blob.as_slice()).unwrap();
        assert_eq!(line.len() as u64, MAX_FIRST_LINE_BYTES);
    }

    #[test]
    fn test_memory_repo_listing_round_trips_modes() {
        let repo = MemoryRepo::new().with_file("ci/a.sh", 0o100755, "#!/bin/sh\n");
        let raw = repo.tracked_files().unwrap();
        assert!(raw.starts_with(b"100755 "));
        assert!(raw.ends_with(b"\tci/a.sh\0"));
    }

    #[test]
    fn test_memory_repo_shebang_matches_are_nul_separated() {
        let repo = MemoryRepo::new()
            .with_file("tool\"x.sh", 0o100644, "#!/bin/sh\necho\n")
            .with_file("README.md", 0o100644, "# readme\n");
        let raw = repo.shebang_matches().unwrap();
        assert_eq!(raw, b"tool\"x.sh\x001\x00#!/bin/sh\n");
    }

    #[test]
    fn test_memory_repo_missing_file_is_io_error() {
        let repo = MemoryRepo::new().with_missing_file("gone.sh", 0o100755);
        let err = repo.first_line("gone.sh").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
    }
}
