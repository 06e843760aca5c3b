// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::{CliDedupMode, OutputType};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "code_analyser",
    version = crate::VERSION,
    about = "言語ごとに空行/コメント行/コード行を集計します",
    override_usage = "code_analyser [OPTIONS] [PATHS]..."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 解析対象のパス（ディレクトリまたはファイル）
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// ファイルごとの結果も表示
    #[arg(long = "files", help_heading = "出力")]
    pub by_file: bool,

    /// 出力形式
    #[arg(long, value_enum, default_value = "default", help_heading = "出力")]
    pub output_type: OutputType,

    /// ソート列 [files, lines, blanks, code, comments, size]。不明な値は code
    #[arg(long, default_value = "code", help_heading = "出力")]
    pub sort: String,

    /// 内容が同一のファイルを一度だけ数える
    #[arg(long, help_heading = "フィルタ")]
    pub skip_duplicated: bool,

    /// 重複ファイルのうちどれを残すか
    #[arg(long, value_enum, default_value = "lowest-path", help_heading = "フィルタ")]
    pub dedup_mode: CliDedupMode,

    /// 除外する拡張子（カンマ区切り/複数指定可, 例: md,txt）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub exclude_ext: Vec<String>,

    /// 対象とする言語名（カンマ区切り/複数指定可, 例: Go,Rust）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub include_lang: Vec<String>,

    /// このパターンに一致するディレクトリ配下のみ対象（正規表現）
    #[arg(long, help_heading = "フィルタ")]
    pub match_dir: Option<String>,

    /// このパターンに一致するディレクトリ配下を除外（正規表現）
    #[arg(long, help_heading = "フィルタ")]
    pub not_match_dir: Option<String>,

    /// ワーカースレッド数（既定: CPU数）
    #[arg(long, help_heading = "走査")]
    pub threads: Option<usize>,

    /// シンボリックリンクを辿らない
    #[arg(long, help_heading = "走査")]
    pub no_follow_links: bool,

    /// デバッグログを表示
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["code_analyser", "."]).unwrap();
        assert_eq!(args.paths, vec![PathBuf::from(".")]);
        assert_eq!(args.output_type, OutputType::Default);
        assert_eq!(args.dedup_mode, CliDedupMode::LowestPath);
        assert_eq!(args.sort, "code");
        assert!(!args.by_file);
        assert!(args.match_dir.is_none());
    }

    #[test]
    fn test_comma_separated_lists() {
        let args = Args::try_parse_from([
            "code_analyser",
            "--exclude-ext",
            "md,txt",
            "--include-lang",
            "Go",
            "--include-lang",
            "Rust",
            "src",
        ])
        .unwrap();
        assert_eq!(args.exclude_ext, vec!["md", "txt"]);
        assert_eq!(args.include_lang, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_unknown_output_type_is_rejected() {
        assert!(Args::try_parse_from(["code_analyser", "--output-type", "xml", "."]).is_err());
    }
}
