pub use code_analyser_core::LineCounts;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

pub const TOTAL_NAME: &str = "TOTAL";

/// Counts for one analyzed file. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub language: String,
    pub size_bytes: u64,
    #[serde(flatten)]
    pub counts: LineCounts,
}

impl FileRecord {
    #[must_use]
    pub fn new(path: PathBuf, language: &str, size_bytes: u64, counts: LineCounts) -> Self {
        Self {
            path,
            language: language.to_owned(),
            size_bytes,
            counts,
        }
    }
}

/// 言語ごとの集計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageAggregate {
    pub name: String,
    /// Number of files counted.
    pub files: usize,
    pub size_bytes: u64,
    #[serde(flatten)]
    pub counts: LineCounts,
}

impl LanguageAggregate {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            files: 0,
            size_bytes: 0,
            counts: LineCounts::zero(),
        }
    }

    #[must_use]
    pub fn total() -> Self {
        Self::new(TOTAL_NAME)
    }

    pub fn add_file(&mut self, record: &FileRecord) {
        self.files += 1;
        self.size_bytes += record.size_bytes;
        self.counts += record.counts;
    }

    /// Adds another aggregate's sums into this one, keeping this name.
    pub fn merge(&mut self, other: &Self) {
        self.files += other.files;
        self.size_bytes += other.size_bytes;
        self.counts += other.counts;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningKind {
    Root,
    File,
    Walk,
}

/// A root or file that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWarning {
    pub kind: WarningKind,
    pub path: PathBuf,
    pub message: String,
}

impl AnalysisWarning {
    pub fn new(kind: WarningKind, path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Result of [`crate::analyze`]: grand total, per-language and per-file
/// counts. Maps are ordered by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total: LanguageAggregate,
    pub languages: BTreeMap<String, LanguageAggregate>,
    pub files: BTreeMap<PathBuf, FileRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AnalysisWarning>,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            total: LanguageAggregate::total(),
            languages: BTreeMap::new(),
            files: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }
}

impl AnalysisResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, lines: usize, code: usize, size: u64) -> FileRecord {
        FileRecord::new(
            PathBuf::from(path),
            "Go",
            size,
            LineCounts {
                lines,
                blanks: lines - code,
                comments: 0,
                code,
            },
        )
    }

    #[test]
    fn test_add_file_and_merge() {
        let mut a = LanguageAggregate::new("Go");
        a.add_file(&record("a.go", 10, 7, 100));
        a.add_file(&record("b.go", 5, 5, 40));
        assert_eq!(a.files, 2);
        assert_eq!(a.size_bytes, 140);
        assert_eq!(a.counts.code, 12);

        let mut total = LanguageAggregate::total();
        total.merge(&a);
        total.merge(&a);
        assert_eq!(total.name, TOTAL_NAME);
        assert_eq!(total.files, 4);
        assert_eq!(total.counts.lines, 30);
    }

    #[test]
    fn test_file_record_serializes_flat() {
        let value = serde_json::to_value(record("a.go", 2, 1, 9)).unwrap();
        assert_eq!(value["lines"], 2);
        assert_eq!(value["code"], 1);
        assert_eq!(value["blanks"], 1);
        assert_eq!(value["size_bytes"], 9);
        assert_eq!(value["language"], "Go");
    }
}
