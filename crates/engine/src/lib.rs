// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::path::PathBuf;

pub mod aggregate;
pub mod config;
pub mod dedup;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod stats;

pub use code_analyser_core::{LanguageDefinition, LanguageRegistry};

use crate::aggregate::{FileIndex, WorkerOutput};
use crate::config::Options;
use crate::dedup::DuplicateFilter;
use crate::error::Result;
use crate::stats::AnalysisResult;

/// Run the analysis over `paths`.
///
/// Discovers files, then runs one worker per language on a pool bounded
/// by `options.threads`. Unreadable roots and files become
/// `AnalysisResult::warnings`; they never abort the run.
///
/// # Errors
///
/// Returns an error only when the worker pool cannot be started.
pub fn analyze(
    registry: &LanguageRegistry,
    options: &Options,
    paths: &[PathBuf],
) -> Result<AnalysisResult> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads.max(1))
        .thread_name(|i| format!("code-analyser-{i}"))
        .build()?;

    let discovery = filesystem::discover(registry, options, paths);
    let index = FileIndex::with_capacity(discovery.file_count());

    let outputs: Vec<WorkerOutput> = pool.install(|| {
        let dedup = DuplicateFilter::new(
            options.skip_duplicated,
            options.dedup_mode,
            discovery.languages.values().flatten(),
        );

        discovery
            .languages
            .par_iter()
            .filter(|(_, files)| !files.is_empty())
            .filter_map(|(name, files)| {
                let language = registry.get(name)?;
                Some(aggregate::run_language(language, files, &index, &dedup))
            })
            .collect()
    });

    // Every worker has returned: the aggregates are final.
    let mut result = AnalysisResult {
        warnings: discovery.warnings,
        ..AnalysisResult::default()
    };
    for output in outputs {
        result.warnings.extend(output.warnings);
        if output.aggregate.files == 0 {
            continue;
        }
        result.total.merge(&output.aggregate);
        result
            .languages
            .insert(output.aggregate.name.clone(), output.aggregate);
    }
    result.files = index.into_sorted();
    result.warnings.sort_by(|a, b| a.path.cmp(&b.path));

    log::debug!(
        "Analyzed {} files in {} languages",
        result.total.files,
        result.languages.len()
    );
    Ok(result)
}
