//! 言語ごとのワーカーと共有ファイルインデックス

use crate::dedup::DuplicateFilter;
use crate::processor::process_file;
use crate::stats::{AnalysisWarning, FileRecord, LanguageAggregate, WarningKind};
use code_analyser_core::LanguageDefinition;
use hashbrown::HashMap;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// Shared path → record index, written by every worker.
#[derive(Debug, Default)]
pub struct FileIndex {
    inner: Mutex<HashMap<PathBuf, FileRecord>>,
}

impl FileIndex {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(HashMap::with_capacity(capacity)),
        }
    }

    pub fn insert(&self, record: FileRecord) {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        map.insert(record.path.clone(), record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the index once every worker has finished.
    #[must_use]
    pub fn into_sorted(self) -> BTreeMap<PathBuf, FileRecord> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_iter()
            .collect()
    }
}

/// What one language worker hands back at the barrier.
#[derive(Debug)]
pub struct WorkerOutput {
    pub aggregate: LanguageAggregate,
    pub warnings: Vec<AnalysisWarning>,
}

impl WorkerOutput {
    fn new(name: &str) -> Self {
        Self {
            aggregate: LanguageAggregate::new(name),
            warnings: Vec::new(),
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.aggregate.merge(&other.aggregate);
        self.warnings.extend(other.warnings);
        self
    }
}

/// Counts every file of one language.
///
/// Files are folded into private partial aggregates and reduced at the
/// end, so no lock guards the aggregate. Only the index insert and the
/// duplicate check touch shared state.
pub fn run_language(
    language: &LanguageDefinition,
    files: &[PathBuf],
    index: &FileIndex,
    dedup: &DuplicateFilter,
) -> WorkerOutput {
    log::debug!("{}: analyzing {} files", language.name, files.len());

    let output = files
        .par_iter()
        .fold(
            || WorkerOutput::new(&language.name),
            |mut acc, path| {
                match process_file(path, language, dedup) {
                    Ok(Some(record)) => {
                        acc.aggregate.add_file(&record);
                        index.insert(record);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        log::warn!("{e}");
                        acc.warnings
                            .push(AnalysisWarning::new(WarningKind::File, path.clone(), &e));
                    }
                }
                acc
            },
        )
        .reduce(|| WorkerOutput::new(&language.name), WorkerOutput::merge);

    log::debug!(
        "{}: {} files, {} code lines",
        language.name,
        output.aggregate.files,
        output.aggregate.counts.code
    );
    output
}
