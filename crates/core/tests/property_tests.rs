use code_analyser_core::parser::count_bytes;
use code_analyser_core::{LanguageDefinition, LanguageRegistry};
use proptest::prelude::*;

fn c_like() -> LanguageDefinition {
    LanguageDefinition::new("C", &["c"], &["//"], &[("/*", "*/")])
}

proptest! {
    #[test]
    fn test_kinds_partition_lines(
        content in "([a-z ;=(){}]|//|/\\*|\\*/|\n|\r\n|\t){0,400}"
    ) {
        let counts = count_bytes(content.as_bytes(), &c_like());
        prop_assert_eq!(counts.blanks + counts.comments + counts.code, counts.lines);
    }

    #[test]
    fn test_line_count_matches_terminators(
        content in "[\\x00-\\x7F]{0,1000}"
    ) {
        // "" -> 0 lines, otherwise one line per '\n' plus an unterminated tail.
        let counts = count_bytes(content.as_bytes(), &c_like());
        let newlines = content.bytes().filter(|&b| b == b'\n').count();
        let tail = usize::from(!content.is_empty() && !content.ends_with('\n'));
        prop_assert_eq!(counts.lines, newlines + tail);
    }

    #[test]
    fn test_every_builtin_language_keeps_invariant(
        content in "\\PC{0,300}",
        pick in 0usize..64
    ) {
        let registry = LanguageRegistry::builtin();
        let languages: Vec<_> = registry.iter().collect();
        let lang = languages[pick % languages.len()];
        let counts = count_bytes(content.as_bytes(), lang);
        prop_assert!(counts.is_consistent());
    }
}
