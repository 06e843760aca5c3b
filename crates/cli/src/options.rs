use clap::ValueEnum;
use code_analyser_engine::options::DedupMode;
use serde::{Deserialize, Serialize};

/// 出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputType {
    /// Console table
    #[default]
    Default,
    Json,
    Html,
}

/// 重複ファイルの残し方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliDedupMode {
    /// Keep the lexicographically smallest path (stable)
    #[default]
    LowestPath,
    /// Keep whichever copy a worker reaches first
    FirstSeen,
}

impl From<CliDedupMode> for DedupMode {
    fn from(mode: CliDedupMode) -> Self {
        match mode {
            CliDedupMode::LowestPath => Self::LowestPath,
            CliDedupMode::FirstSeen => Self::FirstSeen,
        }
    }
}
