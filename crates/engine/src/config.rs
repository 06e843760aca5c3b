use crate::error::Result;
use crate::options::{DedupMode, SortKey};
use code_analyser_core::language::normalize_extension;
use derive_builder::Builder;
use hashbrown::HashSet;
use regex::Regex;

/// Options for one analysis run. Immutable once built.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), derive(Debug))]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Report individual files, not only languages.
    #[builder(default)]
    pub by_file: bool,
    #[builder(default)]
    pub skip_duplicated: bool,
    #[builder(default)]
    pub dedup_mode: DedupMode,
    /// Normalized extension keys (`.md`) that are never counted.
    #[builder(default)]
    pub exclude_extensions: HashSet<String>,
    /// Language names to keep. Empty keeps all.
    #[builder(default)]
    pub include_languages: HashSet<String>,
    /// Require a directory component matching this pattern.
    #[builder(default)]
    pub match_dir: Option<Regex>,
    /// Drop files below a directory component matching this pattern.
    #[builder(default)]
    pub exclude_dir: Option<Regex>,
    #[builder(default)]
    pub sort: SortKey,
    /// Worker pool size.
    #[builder(default = "num_cpus::get()")]
    pub threads: usize,
    #[builder(default = "true")]
    pub follow_links: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            by_file: false,
            skip_duplicated: false,
            dedup_mode: DedupMode::default(),
            exclude_extensions: HashSet::new(),
            include_languages: HashSet::new(),
            match_dir: None,
            exclude_dir: None,
            sort: SortKey::default(),
            threads: num_cpus::get(),
            follow_links: true,
        }
    }
}

impl OptionsBuilder {
    /// Compiles and sets the directory include pattern. Empty clears it.
    ///
    /// # Errors
    /// Returns `EngineError::Regex` for a malformed pattern.
    pub fn match_dir_pattern(&mut self, pattern: &str) -> Result<&mut Self> {
        Ok(self.match_dir(compile_dir_pattern(pattern)?))
    }

    /// Compiles and sets the directory exclude pattern. Empty clears it.
    ///
    /// # Errors
    /// Returns `EngineError::Regex` for a malformed pattern.
    pub fn exclude_dir_pattern(&mut self, pattern: &str) -> Result<&mut Self> {
        Ok(self.exclude_dir(compile_dir_pattern(pattern)?))
    }
}

/// Compiles a directory pattern; an empty pattern means "unset".
///
/// # Errors
/// Returns `EngineError::Regex` for a malformed pattern.
pub fn compile_dir_pattern(pattern: &str) -> Result<Option<Regex>> {
    if pattern.is_empty() {
        return Ok(None);
    }
    Ok(Some(Regex::new(pattern)?))
}

/// Normalizes user-supplied extensions (`md`, `.MD`) into lookup keys.
pub fn extension_set<I, S>(extensions: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .map(|e| normalize_extension(e.as_ref()))
        .filter(|e| !e.is_empty())
        .collect()
}
