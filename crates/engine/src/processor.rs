use crate::dedup::DuplicateFilter;
use crate::error::{EngineError, Result};
use crate::stats::FileRecord;
use code_analyser_core::{LanguageDefinition, count_bytes};
use std::path::Path;

/// Process a single file and return its record.
///
/// Returns `Ok(None)` when the duplicate filter rejects the content.
///
/// # Errors
/// Returns `EngineError::FileRead` when the file cannot be read.
pub fn process_file(
    path: &Path,
    language: &LanguageDefinition,
    dedup: &DuplicateFilter,
) -> Result<Option<FileRecord>> {
    let content = std::fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if !dedup.admit(path, &content) {
        log::debug!("Skipping duplicate {}", path.display());
        return Ok(None);
    }

    let counts = count_bytes(&content, language);
    let size = u64::try_from(content.len()).unwrap_or(u64::MAX);
    Ok(Some(FileRecord::new(
        path.to_path_buf(),
        &language.name,
        size,
        counts,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DedupMode;
    use code_analyser_core::LanguageRegistry;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_process_file_counts_and_size() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "package main\n\n// c\n/* a\n b */\nfunc main() {{}}").unwrap();
        let registry = LanguageRegistry::builtin();
        let go = registry.get("Go").unwrap();

        let record = process_file(file.path(), go, &DuplicateFilter::Disabled)
            .unwrap()
            .unwrap();

        assert_eq!(record.language, "Go");
        assert_eq!(record.size_bytes, 44);
        assert_eq!(record.counts.lines, 6);
        assert_eq!(record.counts.code, 2);
        assert_eq!(record.counts.blanks, 1);
        assert_eq!(record.counts.comments, 3);
    }

    #[test]
    fn test_process_file_missing() {
        let registry = LanguageRegistry::builtin();
        let go = registry.get("Go").unwrap();
        let err = process_file(Path::new("/definitely/not/here.go"), go, &DuplicateFilter::Disabled)
            .unwrap_err();
        assert!(matches!(err, EngineError::FileRead { .. }));
    }

    #[test]
    fn test_process_file_duplicate_is_none() {
        let mut a = NamedTempFile::new().unwrap();
        let mut b = NamedTempFile::new().unwrap();
        writeln!(a, "x := 1").unwrap();
        writeln!(b, "x := 1").unwrap();
        let registry = LanguageRegistry::builtin();
        let go = registry.get("Go").unwrap();
        let dedup = DuplicateFilter::new(true, DedupMode::FirstSeen, std::iter::empty());

        assert!(process_file(a.path(), go, &dedup).unwrap().is_some());
        assert!(process_file(b.path(), go, &dedup).unwrap().is_none());
    }
}
