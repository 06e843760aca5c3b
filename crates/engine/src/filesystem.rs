//! ファイル探索とフィルタ
//!
//! Walks every root in parallel and maps each accepted regular file to its
//! language. Only the policy in [`evaluate`] filters files: ignore files and
//! hidden-file rules of the walker are switched off.

use crate::config::Options;
use crate::stats::{AnalysisWarning, WarningKind};
use code_analyser_core::LanguageRegistry;
use code_analyser_core::language::registry::extension_key;
use ignore::WalkBuilder;
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Version-control metadata directories, never descended into.
pub const VCS_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    ".bzr",
    "_darcs",
    "CVS",
    ".fossil-settings",
    ".jj",
    ".pijul",
];

/// Accepted files grouped by language name, each list sorted by path.
#[derive(Debug, Default)]
pub struct Discovery {
    pub languages: BTreeMap<String, Vec<PathBuf>>,
    pub warnings: Vec<AnalysisWarning>,
}

impl Discovery {
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.languages.values().map(Vec::len).sum()
    }
}

enum Found {
    File(String, PathBuf),
    Error(ignore::Error),
}

/// Parallel recursive walk over `roots`.
///
/// Missing roots are logged and recorded as warnings; the walk continues
/// over the remaining ones. An empty result is not an error.
pub fn discover(registry: &LanguageRegistry, options: &Options, roots: &[PathBuf]) -> Discovery {
    let mut discovery = Discovery::default();

    let mut valid_roots = Vec::with_capacity(roots.len());
    for root in roots {
        match std::fs::metadata(root) {
            Ok(_) => valid_roots.push(root.clone()),
            Err(e) => {
                log::warn!("Skipping root {}: {e}", root.display());
                discovery
                    .warnings
                    .push(AnalysisWarning::new(WarningKind::Root, root.clone(), e));
            }
        }
    }

    let Some((first, rest)) = valid_roots.split_first() else {
        return discovery;
    };

    let mut builder = WalkBuilder::new(first);
    for root in rest {
        builder.add(root);
    }
    builder
        .standard_filters(false)
        .follow_links(options.follow_links)
        .threads(options.threads.max(1))
        .filter_entry(|entry| {
            // Prune VCS metadata below a root; a root itself is always walked.
            !(entry.depth() > 0
                && entry.file_type().is_some_and(|ft| ft.is_dir())
                && is_vcs_dir(entry.file_name()))
        });

    let (tx, rx) = crossbeam_channel::bounded(1024);

    let (files, walk_warnings) = std::thread::scope(|scope| {
        let collector = scope.spawn(move || collect(rx));

        builder.build_parallel().run(|| {
            let tx = tx.clone();
            Box::new(move |entry| {
                let found = match entry {
                    Ok(entry) => {
                        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                            return ignore::WalkState::Continue;
                        }
                        match evaluate(entry.path(), entry.depth(), registry, options) {
                            Some(lang) => Found::File(lang.to_owned(), entry.into_path()),
                            None => return ignore::WalkState::Continue,
                        }
                    }
                    Err(e) => Found::Error(e),
                };
                if tx.send(found).is_err() {
                    return ignore::WalkState::Quit;
                }
                ignore::WalkState::Continue
            })
        });
        // The collector stops once every sender is gone.
        drop(tx);

        match collector.join() {
            Ok(collected) => collected,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    });
    discovery.warnings.extend(walk_warnings);

    discovery.languages = files
        .into_iter()
        .map(|(lang, paths)| (lang, paths.into_iter().collect()))
        .collect();

    log::debug!(
        "Discovered {} files in {} languages",
        discovery.file_count(),
        discovery.languages.len()
    );
    discovery
}

type Collected = (BTreeMap<String, BTreeSet<PathBuf>>, Vec<AnalysisWarning>);

/// Drains the walker channel. A path reached from two overlapping roots
/// is kept once.
fn collect(rx: crossbeam_channel::Receiver<Found>) -> Collected {
    let mut files: BTreeMap<String, BTreeSet<PathBuf>> = BTreeMap::new();
    let mut warnings = Vec::new();
    for found in rx {
        match found {
            Found::File(lang, path) => {
                files.entry(lang).or_default().insert(path);
            }
            Found::Error(e) => {
                log::warn!("Walk error: {e}");
                warnings.push(AnalysisWarning::new(WarningKind::Walk, error_path(&e), &e));
            }
        }
    }
    (files, warnings)
}

/// ファイルを評価し、対象なら言語名を返す
///
/// `depth` is the number of components of `path` below its walk root.
/// Rules, in order: VCS metadata, directory patterns, excluded
/// extensions, language resolution and the language whitelist.
pub fn evaluate<'r>(
    path: &Path,
    depth: usize,
    registry: &'r LanguageRegistry,
    options: &Options,
) -> Option<&'r str> {
    if below_root_dirs(path, depth).any(is_vcs_dir) {
        return None;
    }

    if let Some(exclude) = &options.exclude_dir
        && dir_components(path).any(|c| exclude.is_match(&c.to_string_lossy()))
    {
        return None;
    }
    if let Some(include) = &options.match_dir
        && !dir_components(path).any(|c| include.is_match(&c.to_string_lossy()))
    {
        return None;
    }

    let file_name = path.file_name()?.to_string_lossy();
    if let Some(key) = extension_key(&file_name)
        && options.exclude_extensions.contains(&key)
    {
        return None;
    }

    let language = registry.lookup_file_name(&file_name)?;
    if !options.include_languages.is_empty() && !options.include_languages.contains(&language.name)
    {
        return None;
    }

    Some(language.name.as_str())
}

fn is_vcs_dir(name: &OsStr) -> bool {
    name.to_str().is_some_and(|n| VCS_DIRS.contains(&n))
}

/// Named directory components of the parent of `path`.
fn dir_components(path: &Path) -> impl Iterator<Item = &OsStr> {
    path.parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name),
            _ => None,
        })
}

/// Directory components that lie below the walk root.
fn below_root_dirs(path: &Path, depth: usize) -> impl Iterator<Item = &OsStr> {
    let dirs: Vec<&OsStr> = dir_components(path).collect();
    let below = depth.saturating_sub(1).min(dirs.len());
    dirs.into_iter().rev().take(below)
}

fn error_path(err: &ignore::Error) -> PathBuf {
    match err {
        ignore::Error::WithPath { path, .. } => path.clone(),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => child.clone(),
        _ => PathBuf::from("<walk>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OptionsBuilder, extension_set};

    fn registry() -> LanguageRegistry {
        LanguageRegistry::builtin()
    }

    #[test]
    fn test_evaluate_resolves_language() {
        let reg = registry();
        let opts = Options::default();
        assert_eq!(evaluate(Path::new("src/main.go"), 2, &reg, &opts), Some("Go"));
        assert_eq!(evaluate(Path::new("Makefile"), 1, &reg, &opts), Some("Makefile"));
        assert_eq!(evaluate(Path::new("src/unknown.zzz"), 2, &reg, &opts), None);
        assert_eq!(evaluate(Path::new("README"), 1, &reg, &opts), None);
    }

    #[test]
    fn test_evaluate_rejects_vcs_below_root_only() {
        let reg = registry();
        let opts = Options::default();
        assert_eq!(evaluate(Path::new("repo/.git/hooks/x.sh"), 3, &reg, &opts), None);
        // The root itself may live inside a VCS directory.
        assert_eq!(evaluate(Path::new(".git/hooks/x.sh"), 1, &reg, &opts), Some("Shell"));
    }

    #[test]
    fn test_evaluate_dir_patterns() {
        let reg = registry();
        let opts = OptionsBuilder::default()
            .exclude_dir_pattern("^vendor$")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(evaluate(Path::new("a/vendor/lib.go"), 3, &reg, &opts), None);
        assert_eq!(evaluate(Path::new("a/vendors/lib.go"), 3, &reg, &opts), Some("Go"));

        let opts = OptionsBuilder::default()
            .match_dir_pattern("src")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(evaluate(Path::new("proj/src/lib.rs"), 3, &reg, &opts), Some("Rust"));
        assert_eq!(evaluate(Path::new("proj/tests/lib.rs"), 3, &reg, &opts), None);
        // The file name itself is not a directory component.
        assert_eq!(evaluate(Path::new("proj/src.rs"), 2, &reg, &opts), None);
    }

    #[test]
    fn test_evaluate_extension_and_language_filters() {
        let reg = registry();
        let opts = OptionsBuilder::default()
            .exclude_extensions(extension_set(["h"]))
            .build()
            .unwrap();
        assert_eq!(evaluate(Path::new("x/a.h"), 2, &reg, &opts), None);
        assert_eq!(evaluate(Path::new("x/a.c"), 2, &reg, &opts), Some("C"));

        let opts = OptionsBuilder::default()
            .include_languages(["Rust".to_owned()].into_iter().collect::<hashbrown::HashSet<_>>())
            .build()
            .unwrap();
        assert_eq!(evaluate(Path::new("x/a.rs"), 2, &reg, &opts), Some("Rust"));
        assert_eq!(evaluate(Path::new("x/a.go"), 2, &reg, &opts), None);
    }

    #[test]
    fn test_below_root_dirs() {
        let dirs: Vec<_> = below_root_dirs(Path::new("/r/a/b/f.rs"), 3).collect();
        assert_eq!(dirs, vec![OsStr::new("b"), OsStr::new("a")]);
        assert_eq!(below_root_dirs(Path::new("f.rs"), 0).count(), 0);
    }
}
