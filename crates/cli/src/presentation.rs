// crates/cli/src/presentation.rs
use crate::options::OutputType;
use code_analyser_engine::config::Options;
use code_analyser_engine::options::SortKey;
use code_analyser_engine::stats::{
    AnalysisResult, AnalysisWarning, FileRecord, LanguageAggregate, LineCounts,
};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use serde::Serialize;
use std::cmp::Ordering;
use std::io::{self, Write};

const LANGUAGE_HEADER: [&str; 7] = [
    "Language", "Files", "Lines", "Blanks", "Comments", "Code", "Size",
];
const FILE_HEADER: [&str; 7] = [
    "File", "Language", "Lines", "Blanks", "Comments", "Code", "Size",
];

/// Renders `result` in the requested format.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write<W: Write>(
    result: &AnalysisResult,
    options: &Options,
    output: OutputType,
    out: &mut W,
) -> io::Result<()> {
    let languages = sorted_languages(result, options.sort);
    let files = if options.by_file {
        Some(sorted_files(result, options.sort))
    } else {
        None
    };

    match output {
        OutputType::Default => write_console(out, result, &languages, files.as_deref()),
        OutputType::Json => write_json(out, result, &languages, files.as_deref()),
        OutputType::Html => write_html(out, result, &languages, files.as_deref()),
    }
}

/// 降順。同値は名前順
#[must_use]
pub fn sorted_languages(result: &AnalysisResult, key: SortKey) -> Vec<&LanguageAggregate> {
    let mut languages: Vec<_> = result.languages.values().collect();
    languages.sort_by(|a, b| {
        language_column(b, key)
            .cmp(&language_column(a, key))
            .then_with(|| a.name.cmp(&b.name))
    });
    languages
}

#[must_use]
pub fn sorted_files(result: &AnalysisResult, key: SortKey) -> Vec<&FileRecord> {
    let mut files: Vec<_> = result.files.values().collect();
    files.sort_by(|a, b| match file_column(b, key).cmp(&file_column(a, key)) {
        Ordering::Equal => a.path.cmp(&b.path),
        other => other,
    });
    files
}

fn language_column(lang: &LanguageAggregate, key: SortKey) -> u64 {
    match key {
        SortKey::Files => lang.files as u64,
        SortKey::Size => lang.size_bytes,
        _ => counts_column(&lang.counts, key),
    }
}

// A file row has no file count, so `files` degrades to path order.
fn file_column(record: &FileRecord, key: SortKey) -> u64 {
    match key {
        SortKey::Files => 0,
        SortKey::Size => record.size_bytes,
        _ => counts_column(&record.counts, key),
    }
}

fn counts_column(counts: &LineCounts, key: SortKey) -> u64 {
    let value = match key {
        SortKey::Lines => counts.lines,
        SortKey::Blanks => counts.blanks,
        SortKey::Comments => counts.comments,
        SortKey::Code | SortKey::Files | SortKey::Size => counts.code,
    };
    value as u64
}

fn language_cells(lang: &LanguageAggregate) -> [String; 7] {
    [
        lang.name.clone(),
        lang.files.to_string(),
        lang.counts.lines.to_string(),
        lang.counts.blanks.to_string(),
        lang.counts.comments.to_string(),
        lang.counts.code.to_string(),
        lang.size_bytes.to_string(),
    ]
}

fn file_cells(record: &FileRecord) -> [String; 7] {
    [
        record.path.display().to_string(),
        record.language.clone(),
        record.counts.lines.to_string(),
        record.counts.blanks.to_string(),
        record.counts.comments.to_string(),
        record.counts.code.to_string(),
        record.size_bytes.to_string(),
    ]
}

fn new_table(header: [&str; 7]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header.to_vec());
    table
}

fn add_row(table: &mut Table, cells: [String; 7], numeric_from: usize) {
    table.add_row(cells.into_iter().enumerate().map(|(i, text)| {
        let cell = Cell::new(text);
        if i >= numeric_from {
            cell.set_alignment(CellAlignment::Right)
        } else {
            cell
        }
    }));
}

fn write_console<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    languages: &[&LanguageAggregate],
    files: Option<&[&FileRecord]>,
) -> io::Result<()> {
    let mut table = new_table(LANGUAGE_HEADER);
    for lang in languages {
        add_row(&mut table, language_cells(lang), 1);
    }
    add_row(&mut table, language_cells(&result.total), 1);
    writeln!(out, "{table}")?;

    if let Some(files) = files {
        let mut table = new_table(FILE_HEADER);
        for record in files {
            add_row(&mut table, file_cells(record), 2);
        }
        writeln!(out, "{table}")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total: &'a LanguageAggregate,
    languages: &'a [&'a LanguageAggregate],
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<&'a [&'a FileRecord]>,
    #[serde(skip_serializing_if = "no_warnings")]
    warnings: &'a [AnalysisWarning],
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn no_warnings(warnings: &&[AnalysisWarning]) -> bool {
    warnings.is_empty()
}

fn write_json<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    languages: &[&LanguageAggregate],
    files: Option<&[&FileRecord]>,
) -> io::Result<()> {
    let report = JsonReport {
        total: &result.total,
        languages,
        files,
        warnings: &result.warnings,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

fn write_html<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    languages: &[&LanguageAggregate],
    files: Option<&[&FileRecord]>,
) -> io::Result<()> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{}</title>", crate::APP_NAME)?;
    writeln!(
        out,
        "<style>table{{border-collapse:collapse}}th,td{{border:1px solid #999;padding:2px 8px}}td.n{{text-align:right}}</style>"
    )?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;

    let mut rows: Vec<[String; 7]> = languages.iter().map(|l| language_cells(l)).collect();
    rows.push(language_cells(&result.total));
    write_html_table(out, &LANGUAGE_HEADER, &rows, 1)?;

    if let Some(files) = files {
        let rows: Vec<[String; 7]> = files.iter().map(|r| file_cells(r)).collect();
        write_html_table(out, &FILE_HEADER, &rows, 2)?;
    }

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_html_table<W: Write>(
    out: &mut W,
    header: &[&str],
    rows: &[[String; 7]],
    numeric_from: usize,
) -> io::Result<()> {
    writeln!(out, "<table>")?;
    write!(out, "<tr>")?;
    for name in header {
        write!(out, "<th>{}</th>", escape_html(name))?;
    }
    writeln!(out, "</tr>")?;
    for row in rows {
        write!(out, "<tr>")?;
        for (i, text) in row.iter().enumerate() {
            if i >= numeric_from {
                write!(out, "<td class=\"n\">{}</td>", escape_html(text))?;
            } else {
                write!(out, "<td>{}</td>", escape_html(text))?;
            }
        }
        writeln!(out, "</tr>")?;
    }
    writeln!(out, "</table>")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
