//! 言語定義とコメント構文
//!
//! A [`LanguageDefinition`] is plain data: a name, the extensions it claims
//! and its comment syntax. [`LanguageRegistry`] indexes a set of definitions
//! by extension, and [`LineClassifier`] drives the per-file state machine
//! from one definition.

pub mod catalog;
pub mod classifier;
pub mod registry;

pub use classifier::{LineClassifier, LineKind};
pub use registry::LanguageRegistry;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// A block comment delimiter pair such as `/*` … `*/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDelimiter {
    pub start: String,
    pub end: String,
}

impl BlockDelimiter {
    #[must_use]
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// 言語ごとのコメント構文定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDefinition {
    /// Display name, unique within a registry.
    pub name: String,
    /// Normalized extension keys (`.rs`), or bare lowercase file names
    /// (`makefile`) for files that have no extension.
    pub extensions: Vec<String>,
    /// Line comment prefixes, tested in order.
    pub single_line_tokens: Vec<String>,
    /// Block comment pairs, tested in order before the line tokens.
    pub block_delimiters: Vec<BlockDelimiter>,
}

impl LanguageDefinition {
    /// Builds a definition, normalizing extensions and dropping empty tokens.
    ///
    /// An empty start delimiter or line token would match every line, so
    /// such entries are discarded instead of being kept as catch-alls.
    #[must_use]
    pub fn new(
        name: &str,
        extensions: &[&str],
        single_line_tokens: &[&str],
        block_delimiters: &[(&str, &str)],
    ) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|e| normalize_extension(e)).collect(),
            single_line_tokens: single_line_tokens
                .iter()
                .filter(|t| !t.is_empty())
                .map(|t| (*t).to_string())
                .collect(),
            block_delimiters: block_delimiters
                .iter()
                .filter(|(start, end)| !start.is_empty() && !end.is_empty())
                .map(|(start, end)| BlockDelimiter::new(start, end))
                .collect(),
        }
    }

    /// Whether the language has any comment syntax at all.
    #[must_use]
    pub fn has_comments(&self) -> bool {
        !self.single_line_tokens.is_empty() || !self.block_delimiters.is_empty()
    }
}

/// 拡張子キーを正規化する
///
/// `rs`, `.rs` and `.RS` all become `.rs`. Keys that name a whole file
/// (`Makefile`, `Dockerfile`) are registered without a dot and are only
/// lowercased; callers pass them with [`file_name_key`].
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.is_empty() || lower.starts_with('.') || is_file_name_key(&lower) {
        lower
    } else {
        let mut key = String::with_capacity(lower.len() + 1);
        key.push('.');
        key.push_str(&lower);
        key
    }
}

/// Lookup key for a file name without any extension.
#[must_use]
pub fn file_name_key(file_name: &str) -> String {
    file_name.to_ascii_lowercase()
}

/// Extension-less file names known to the catalog.
const FILE_NAME_KEYS: &[&str] = &["makefile", "gnumakefile", "dockerfile", "cmakelists.txt"];

fn is_file_name_key(key: &str) -> bool {
    FILE_NAME_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("rs"), ".rs");
        assert_eq!(normalize_extension(".RS"), ".rs");
        assert_eq!(normalize_extension(" .go "), ".go");
        assert_eq!(normalize_extension("Makefile"), "makefile");
        assert_eq!(normalize_extension(""), "");
    }

    #[test]
    fn test_empty_tokens_are_dropped() {
        let def = LanguageDefinition::new("Odd", &["odd"], &["", "#"], &[("", ""), ("/*", "*/")]);
        assert_eq!(def.single_line_tokens.len(), 1);
        assert_eq!(def.block_delimiters.len(), 1);
        assert_eq!(def.extensions[0], ".odd");
        assert!(def.has_comments());
    }

    #[test]
    fn test_language_without_comments() {
        let def = LanguageDefinition::new("Text", &["txt"], &[], &[]);
        assert!(!def.has_comments());
    }
}
