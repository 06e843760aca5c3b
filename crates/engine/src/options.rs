use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column used to order languages and files in reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Files,
    Lines,
    Blanks,
    Comments,
    #[default]
    Code,
    Size,
}

impl SortKey {
    pub const ALL: [Self; 6] = [
        Self::Files,
        Self::Lines,
        Self::Blanks,
        Self::Comments,
        Self::Code,
        Self::Size,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::Lines => "lines",
            Self::Blanks => "blanks",
            Self::Comments => "comments",
            Self::Code => "code",
            Self::Size => "size",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sort_key(s)
    }
}

pub fn parse_sort_key(key_str: &str) -> Result<SortKey, String> {
    match key_str.trim().to_ascii_lowercase().as_str() {
        "files" => Ok(SortKey::Files),
        "lines" => Ok(SortKey::Lines),
        "blanks" => Ok(SortKey::Blanks),
        "comments" => Ok(SortKey::Comments),
        "code" => Ok(SortKey::Code),
        "size" => Ok(SortKey::Size),
        other => Err(format!("Unknown sort key: {other}")),
    }
}

/// 重複ファイルの扱い
///
/// Which copy of a byte-identical file survives duplicate suppression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DedupMode {
    /// Fingerprint every candidate up front and keep the smallest path of
    /// each group. Stable across runs.
    #[default]
    LowestPath,
    /// Workers race on a shared fingerprint set; the first one wins.
    FirstSeen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_key() {
        assert_eq!(parse_sort_key("CODE"), Ok(SortKey::Code));
        assert_eq!(" size ".parse::<SortKey>(), Ok(SortKey::Size));
        assert!(parse_sort_key("chars").is_err());
    }

    #[test]
    fn test_sort_key_round_trips_through_display() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>(), Ok(key));
        }
    }
}
