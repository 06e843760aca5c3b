//! # Line Classifier
//!
//! Two-state machine that labels each line of a file as blank, comment or
//! code from a [`LanguageDefinition`]'s declarative comment syntax.
//!
//! ## States
//!
//! | State | Line result | Transition |
//! |-------|-------------|------------|
//! | `Code` | blank if empty after trim | - |
//! | `Code` | comment if it starts with a block start | `InBlock(end)` unless `end` follows on the same line |
//! | `Code` | comment if it starts with a line token | - |
//! | `Code` | code otherwise | - |
//! | `InBlock(end)` | always comment | `Code` once `end` is seen |
//!
//! Only the beginning of a line matters: `x = 1; // note` is code. Block
//! comments do not nest; the first end delimiter closes the block.

use super::LanguageDefinition;

/// 行の分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    /// Index into `block_delimiters` of the open block.
    InBlock(usize),
}

/// Per-file classifier. Create one per file, or call [`reset`](Self::reset).
#[derive(Debug)]
pub struct LineClassifier<'a> {
    language: &'a LanguageDefinition,
    state: State,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(language: &'a LanguageDefinition) -> Self {
        Self {
            language,
            state: State::Code,
        }
    }

    /// 1行を分類し、次の行のための状態を更新する
    ///
    /// `line` may still carry its terminator; surrounding whitespace is
    /// ignored for matching.
    pub fn classify(&mut self, line: &str) -> LineKind {
        let trimmed = line.trim();

        if let State::InBlock(idx) = self.state {
            let end = self.language.block_delimiters[idx].end.as_str();
            if trimmed.contains(end) {
                self.state = State::Code;
            }
            return LineKind::Comment;
        }

        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        for (idx, delim) in self.language.block_delimiters.iter().enumerate() {
            if let Some(rest) = trimmed.strip_prefix(delim.start.as_str()) {
                if !rest.contains(delim.end.as_str()) {
                    self.state = State::InBlock(idx);
                }
                return LineKind::Comment;
            }
        }

        if self
            .language
            .single_line_tokens
            .iter()
            .any(|token| trimmed.starts_with(token.as_str()))
        {
            return LineKind::Comment;
        }

        LineKind::Code
    }

    /// Returns the state machine to `Code`.
    pub fn reset(&mut self) {
        self.state = State::Code;
    }

    #[must_use]
    pub const fn is_in_block_comment(&self) -> bool {
        matches!(self.state, State::InBlock(_))
    }
}
