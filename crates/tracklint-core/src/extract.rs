//! Metadata extraction from git query output
//!
//! Parses the `git ls-files -z --full-name --stage` listing into a
//! `FileIndex`, and the `git grep -z --line-number '^#!'` output into the list
//! of files whose first line is a shebang. Both drop the third-party subtree.

use std::borrow::Cow;

use crate::errors::{LintError, Result};
use crate::model::{FileIndex, FileMetadata};
use crate::policy::LintPolicy;

/// Parse a staged tree listing
///
/// Each record is `<mode> <object> <stage>\t<path>`. Only the mode and the
/// path are kept.
///
/// # Errors
///
/// Returns `ERR_INVALID_INPUT` when a record has no tab or a non-octal mode.
pub fn parse_tree_listing(raw: &[u8], policy: &LintPolicy) -> Result<FileIndex> {
    let mut index = FileIndex::new();

    for record in raw.split(|b| *b == 0).filter(|r| !r.is_empty()) {
        let (path, mode) = parse_record(record)?;
        if policy.is_third_party(&path) {
            continue;
        }
        index.insert(FileMetadata::new(path, mode));
    }

    tracing::debug!(file_count = index.len(), "parsed tree listing");
    Ok(index)
}

fn parse_record(record: &[u8]) -> Result<(String, u32)> {
    let tab = record
        .iter()
        .position(|b| *b == b'\t')
        .ok_or_else(|| LintError::MalformedRecord {
            record: String::from_utf8_lossy(record).into_owned(),
        })?;
    let (meta, path) = (&record[..tab], &record[tab + 1..]);

    let path = decode_path(path);
    let meta = String::from_utf8_lossy(meta);
    let mode_str = meta.split_whitespace().next().unwrap_or_default();
    let mode = u32::from_str_radix(mode_str, 8).map_err(|_| LintError::InvalidMode {
        path: path.clone(),
        mode: mode_str.to_string(),
    })?;

    Ok((path, mode & 0o7777))
}

fn decode_path(raw: &[u8]) -> String {
    match String::from_utf8_lossy(raw) {
        Cow::Borrowed(path) => path.to_string(),
        Cow::Owned(path) => {
            tracing::warn!(path = %path, "tracked path is not valid UTF-8");
            path
        }
    }
}

/// Extract files whose first line is a shebang from `git grep -z` output
///
/// Each match is `path\0line\0content\n`. Paths arrive unquoted, so any
/// byte other than NUL may appear in them.
pub fn parse_shebang_matches(raw: &[u8], policy: &LintPolicy) -> Vec<String> {
    let mut paths = Vec::new();
    let mut rest = raw;

    while !rest.is_empty() {
        let Some((path, line_no, tail)) = split_grep_record(rest) else {
            tracing::debug!(remaining = rest.len(), "skipping unrecognised grep output");
            break;
        };
        rest = tail;
        if line_no != 1 {
            continue;
        }
        let path = decode_path(path);
        if !policy.is_third_party(&path) {
            paths.push(path);
        }
    }

    paths
}

/// Split one `path\0line\0content\n` record off the front of `raw`
fn split_grep_record(raw: &[u8]) -> Option<(&[u8], u64, &[u8])> {
    let path_end = raw.iter().position(|b| *b == 0)?;
    let after_path = &raw[path_end + 1..];
    let number_end = after_path.iter().position(|b| *b == 0)?;
    let line_no = std::str::from_utf8(&after_path[..number_end])
        .ok()?
        .parse()
        .ok()?;

    let content = &after_path[number_end + 1..];
    let tail = match content.iter().position(|b| *b == b'\n') {
        Some(newline) => &content[newline + 1..],
        None => &content[content.len()..],
    };
    Some((&raw[..path_end], line_no, tail))
}
