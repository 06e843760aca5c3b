use alloc::string::String;

use crate::language::{LanguageDefinition, LineClassifier, LineKind};
use crate::stats::LineCounts;

/// Count blank/comment/code lines in a byte slice.
///
/// This is the core entry point for the library. Lines end at `\n`; a
/// `\r` before it is removed by trimming, and trailing content without a
/// terminator still forms a final line. Invalid UTF-8 is decoded lossily.
#[must_use]
pub fn count_bytes(input: &[u8], language: &LanguageDefinition) -> LineCounts {
    let mut counts = LineCounts::zero();
    if input.is_empty() {
        return counts;
    }

    // A final terminator closes the last line rather than opening a new one.
    let body = input.strip_suffix(b"\n").unwrap_or(input);
    let mut classifier = LineClassifier::new(language);

    for raw in body.split(|&b| b == b'\n') {
        let line = String::from_utf8_lossy(raw);
        counts.lines += 1;
        match classifier.classify(&line) {
            LineKind::Blank => counts.blanks += 1,
            LineKind::Comment => counts.comments += 1,
            LineKind::Code => counts.code += 1,
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_like() -> LanguageDefinition {
        LanguageDefinition::new("C", &["c"], &["//"], &[("/*", "*/")])
    }

    fn slash_only() -> LanguageDefinition {
        LanguageDefinition::new("Slash", &["sl"], &["//"], &[])
    }

    #[test]
    fn test_plain_file() {
        let counts = count_bytes(b"int x = 1;\n\n// c\n", &slash_only());
        assert_eq!(counts.lines, 3);
        assert_eq!(counts.code, 1);
        assert_eq!(counts.blanks, 1);
        assert_eq!(counts.comments, 1);
    }

    #[test]
    fn test_block_comment_spanning_lines() {
        let counts = count_bytes(b"/* start\nmiddle\nend */\ncode();", &c_like());
        assert_eq!(counts.lines, 4);
        assert_eq!(counts.comments, 3);
        assert_eq!(counts.code, 1);
        assert_eq!(counts.blanks, 0);
    }

    #[test]
    fn test_blank_line_inside_block_is_comment() {
        let counts = count_bytes(b"/*\n\n*/\n", &c_like());
        assert_eq!(counts.comments, 3);
        assert_eq!(counts.blanks, 0);
    }

    #[test]
    fn test_trailing_comment_is_code() {
        let counts = count_bytes(b"x = 1; // note\n", &c_like());
        assert_eq!(counts.lines, 1);
        assert_eq!(counts.code, 1);
        assert_eq!(counts.comments, 0);
    }

    #[test]
    fn test_line_terminators() {
        let lang = c_like();
        assert_eq!(count_bytes(b"", &lang).lines, 0);
        assert_eq!(count_bytes(b"\n", &lang).blanks, 1);
        assert_eq!(count_bytes(b"a", &lang).lines, 1);
        assert_eq!(count_bytes(b"a\n", &lang).lines, 1);
        assert_eq!(count_bytes(b"a\n\n", &lang).lines, 2);

        let crlf = count_bytes(b"a();\r\n\r\n// c\r\n", &lang);
        assert_eq!(crlf.lines, 3);
        assert_eq!(crlf.code, 1);
        assert_eq!(crlf.blanks, 1);
        assert_eq!(crlf.comments, 1);
    }

    #[test]
    fn test_unterminated_block_runs_to_end_of_file() {
        let counts = count_bytes(b"code();\n/* open\nmore\n", &c_like());
        assert_eq!(counts.code, 1);
        assert_eq!(counts.comments, 2);
    }

    #[test]
    fn test_invalid_utf8_is_still_counted() {
        let counts = count_bytes(b"\xff\xfe = 1;\n// \xc3\n", &c_like());
        assert_eq!(counts.lines, 2);
        assert_eq!(counts.code, 1);
        assert_eq!(counts.comments, 1);
    }

    #[test]
    fn test_language_without_comment_syntax() {
        let text = LanguageDefinition::new("Text", &["txt"], &[], &[]);
        let counts = count_bytes(b"// not a comment\n\nword\n", &text);
        assert_eq!(counts.code, 2);
        assert_eq!(counts.blanks, 1);
        assert!(counts.is_consistent());
    }
}
