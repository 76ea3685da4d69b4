use std::collections::BTreeMap;

use super::FileMetadata;

/// Snapshot of every tracked file, keyed by repository-relative path
///
/// Built once per run and read-only afterwards. Iteration is in path order,
/// which keeps diagnostics stable between runs.
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    files: BTreeMap<String, FileMetadata>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, replacing an earlier record for the same path
    ///
    /// A conflicted index lists one record per stage; the path stays unique.
    pub fn insert(&mut self, meta: FileMetadata) {
        self.files.insert(meta.path().to_string(), meta);
    }

    pub fn get(&self, path: &str) -> Option<&FileMetadata> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileMetadata> {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<FileMetadata> for FileIndex {
    fn from_iter<I: IntoIterator<Item = FileMetadata>>(iter: I) -> Self {
        let mut index = FileIndex::new();
        for meta in iter {
            index.insert(meta);
        }
        index
    }
}
