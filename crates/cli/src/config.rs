// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::Result;
pub use code_analyser_engine::config::{Options, OptionsBuilder};
use code_analyser_engine::LanguageRegistry;
use code_analyser_engine::config::extension_set;
use code_analyser_engine::error::EngineError;
use code_analyser_engine::options::{SortKey, parse_sort_key};
use hashbrown::HashSet;

/// Builds engine options from parsed arguments.
///
/// Directory patterns are compiled here, so a malformed regex is reported
/// before any file is touched.
///
/// # Errors
/// Returns `EngineError::Regex` for an invalid `--match-dir` or
/// `--not-match-dir` pattern.
pub fn options_from_args(args: &Args, registry: &LanguageRegistry) -> Result<Options> {
    let mut builder = OptionsBuilder::default();
    builder
        .by_file(args.by_file)
        .skip_duplicated(args.skip_duplicated)
        .dedup_mode(args.dedup_mode)
        .exclude_extensions(extension_set(&args.exclude_ext))
        .include_languages(resolve_languages(&args.include_lang, registry))
        .sort(resolve_sort(&args.sort))
        .follow_links(!args.no_follow_links);

    if let Some(threads) = args.threads.filter(|&n| n > 0) {
        builder.threads(threads);
    }
    if let Some(pattern) = &args.match_dir {
        builder.match_dir_pattern(pattern)?;
    }
    if let Some(pattern) = &args.not_match_dir {
        builder.exclude_dir_pattern(pattern)?;
    }

    Ok(builder.build().map_err(EngineError::from)?)
}

/// Unknown columns fall back to `code`.
fn resolve_sort(raw: &str) -> SortKey {
    parse_sort_key(raw).unwrap_or_else(|e| {
        log::warn!("{e}; sorting by code");
        SortKey::Code
    })
}

/// Maps names onto registry names, ignoring ASCII case. Unknown names are
/// dropped with a warning.
fn resolve_languages(names: &[String], registry: &LanguageRegistry) -> HashSet<String> {
    names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .filter_map(|name| {
            let found = registry
                .iter()
                .find(|lang| lang.name.eq_ignore_ascii_case(name))
                .map(|lang| lang.name.clone());
            if found.is_none() {
                log::warn!("Unknown language: {name}");
            }
            found
        })
        .collect()
}
