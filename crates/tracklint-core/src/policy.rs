//! Lint policy tables
//!
//! All exception lists and patterns live in one immutable `LintPolicy` value.
//! Checkers borrow it at construction and compile what they need once.

use std::collections::BTreeMap;

/// Shebang marker every executable must start with
pub const SHEBANG: &[u8] = b"#!";

/// Compiled-in policy for one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintPolicy {
    /// Subtree hidden from every check
    pub third_party_prefix: String,
    /// Pattern every tracked path must match
    pub allowed_filename: String,
    /// Paths exempt from `allowed_filename`
    pub allowed_filename_exceptions: Vec<String>,
    /// Pattern selecting source files, matched case-insensitively
    pub source_filename: String,
    /// Stricter pattern every source file must match
    pub allowed_source_filename: String,
    /// Prefix-anchored patterns exempt from `allowed_source_filename`
    pub source_filename_exceptions: Vec<String>,
    /// Accepted first lines per extension for executables
    pub allowed_shebangs: BTreeMap<String, Vec<Vec<u8>>>,
    /// Executables that may lack a standard shebang
    pub executable_exceptions: Vec<String>,
    /// Full extensions of files that carry a shebang but are sourced
    pub sourced_extensions: Vec<String>,
}

impl Default for LintPolicy {
    fn default() -> Self {
        let mut allowed_shebangs = BTreeMap::new();
        allowed_shebangs.insert("py".to_string(), vec![b"#!/usr/bin/env python3".to_vec()]);
        allowed_shebangs.insert(
            "sh".to_string(),
            vec![b"#!/usr/bin/env bash".to_vec(), b"#!/bin/sh".to_vec()],
        );

        Self {
            third_party_prefix: "contrib/gitian-builder/".to_string(),
            allowed_filename: "^[a-zA-Z0-9/_.@][a-zA-Z0-9/_.@-]*$".to_string(),
            // JS assets use mixedCase and routing brackets
            allowed_filename_exceptions: vec!["web/e.cash/pages/blog/[slug].js".to_string()],
            source_filename: r"^.*\.(cpp|h|py|sh|rs)$".to_string(),
            allowed_source_filename: "^[a-z0-9_./-]+$".to_string(),
            source_filename_exceptions: vec![
                "^src/(secp256k1/|univalue/|test/fuzz/FuzzedDataProvider.h)".to_string(),
                "^cmake/utils/EventCheckVersion.cpp$".to_string(),
                "^contrib/buildbot/test/test_endpoint_".to_string(),
            ],
            allowed_shebangs,
            // Windows PowerShell script
            executable_exceptions: vec!["contrib/teamcity/run-tests-windows.ps1".to_string()],
            sourced_extensions: ["bash", "init", "openrc", "sh.in"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl LintPolicy {
    /// True when `path` lies in the excluded third-party subtree
    pub fn is_third_party(&self, path: &str) -> bool {
        !self.third_party_prefix.is_empty() && path.starts_with(&self.third_party_prefix)
    }

    pub fn is_executable_exception(&self, path: &str) -> bool {
        self.executable_exceptions.iter().any(|p| p == path)
    }

    pub fn is_sourced_extension(&self, full_extension: Option<&str>) -> bool {
        full_extension.is_some_and(|ext| self.sourced_extensions.iter().any(|s| s == ext))
    }

    /// Accepted shebangs for an extension, if it has a canonical interpreter
    pub fn shebangs_for(&self, extension: Option<&str>) -> Option<&[Vec<u8>]> {
        extension
            .and_then(|ext| self.allowed_shebangs.get(ext))
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_party_prefix() {
        let policy = LintPolicy::default();
        assert!(policy.is_third_party("contrib/gitian-builder/bin/gbuild"));
        assert!(!policy.is_third_party("contrib/gitian-descriptors/linux.yml"));
    }

    #[test]
    fn test_sourced_extensions_use_full_extension() {
        let policy = LintPolicy::default();
        assert!(policy.is_sourced_extension(Some("sh.in")));
        assert!(policy.is_sourced_extension(Some("bash")));
        assert!(!policy.is_sourced_extension(Some("in")));
        assert!(!policy.is_sourced_extension(None));
    }

    #[test]
    fn test_shebang_table() {
        let policy = LintPolicy::default();
        let sh = policy.shebangs_for(Some("sh")).unwrap();
        assert!(sh.contains(&b"#!/bin/sh".to_vec()));
        assert!(policy.shebangs_for(Some("ps1")).is_none());
        assert!(policy.shebangs_for(None).is_none());
    }
}
