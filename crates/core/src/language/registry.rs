use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

use super::catalog::{BUILTIN, CatalogEntry};
use super::{LanguageDefinition, file_name_key, normalize_extension};

/// 言語レジストリ
///
/// Immutable once built: share it by reference across worker threads.
/// Each extension key resolves to exactly one language; the first
/// definition that claims a key keeps it.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: Vec<LanguageDefinition>,
    by_extension: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Builds a registry from the built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_catalog(BUILTIN)
    }

    #[must_use]
    pub fn from_catalog(entries: &[CatalogEntry]) -> Self {
        Self::new(
            entries
                .iter()
                .map(|(name, exts, line, block)| LanguageDefinition::new(name, exts, line, block)),
        )
    }

    /// Builds a registry from arbitrary definitions, in priority order.
    ///
    /// A definition whose name is already registered is ignored.
    pub fn new<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = LanguageDefinition>,
    {
        let mut registry = Self::default();
        for def in definitions {
            if registry.by_name.contains_key(&def.name) {
                continue;
            }
            let idx = registry.languages.len();
            for ext in &def.extensions {
                if !ext.is_empty() {
                    registry.by_extension.entry(ext.clone()).or_insert(idx);
                }
            }
            registry.by_name.insert(def.name.clone(), idx);
            registry.languages.push(def);
        }
        registry
    }

    /// Resolves an extension (`rs`, `.rs`, `.RS`) or file-name key.
    #[must_use]
    pub fn lookup(&self, extension: &str) -> Option<&LanguageDefinition> {
        let key = normalize_extension(extension);
        self.by_extension.get(&key).map(|&idx| &self.languages[idx])
    }

    /// Resolves a file name: whole-name keys first, then the extension.
    #[must_use]
    pub fn lookup_file_name(&self, file_name: &str) -> Option<&LanguageDefinition> {
        if let Some(&idx) = self.by_extension.get(&file_name_key(file_name)) {
            return Some(&self.languages[idx]);
        }
        extension_key(file_name).and_then(|key| self.lookup(&key))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LanguageDefinition> {
        self.by_name.get(name).map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageDefinition> {
        self.languages.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// 拡張子キーを取り出す
///
/// `main.RS` → `.rs`, `.bashrc` → `.bashrc`, `README` → `None`.
#[must_use]
pub fn extension_key(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(normalize_extension(ext))
}
