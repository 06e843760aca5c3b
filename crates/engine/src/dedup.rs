//! Duplicate-content suppression.
//!
//! Two policies, see [`DedupMode`]. `FirstSeen` races workers on a shared
//! fingerprint set; `LowestPath` decides every group before any worker
//! runs, so the surviving path does not depend on scheduling.

use crate::options::DedupMode;
use hashbrown::{HashMap, HashSet};
use rayon::prelude::*;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use xxhash_rust::xxh3::{Xxh3, xxh3_128};

/// Content hash used to detect byte-identical files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Fingerprint(pub u128);

impl Fingerprint {
    #[must_use]
    pub fn of(content: &[u8]) -> Self {
        Self(xxh3_128(content))
    }

    /// Streams a file through xxh3 without holding it in memory.
    ///
    /// # Errors
    /// Returns the underlying I/O error.
    pub fn of_file(path: &Path) -> std::io::Result<Self> {
        let mut file = File::open(path)?;
        let mut hasher = Xxh3::new();
        let mut buf = [0u8; 8192];
        loop {
            match file.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => hasher.update(&buf[..n]),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(Self(hasher.digest128()))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// 重複判定フィルタ
#[derive(Debug)]
pub enum DuplicateFilter {
    Disabled,
    FirstSeen(Mutex<HashSet<Fingerprint>>),
    /// Paths that lost to a smaller path with the same content.
    LowestPath(HashSet<PathBuf>),
}

impl DuplicateFilter {
    /// Builds the filter for a run. `LowestPath` fingerprints every
    /// candidate in parallel here; call it inside the run's pool.
    pub fn new<'a, I>(enabled: bool, mode: DedupMode, candidates: I) -> Self
    where
        I: IntoIterator<Item = &'a PathBuf>,
    {
        if !enabled {
            return Self::Disabled;
        }
        match mode {
            DedupMode::FirstSeen => Self::FirstSeen(Mutex::new(HashSet::new())),
            DedupMode::LowestPath => Self::LowestPath(losers_by_path(candidates)),
        }
    }

    /// Whether `path` with `content` should be counted.
    pub fn admit(&self, path: &Path, content: &[u8]) -> bool {
        match self {
            Self::Disabled => true,
            Self::FirstSeen(seen) => {
                let fingerprint = Fingerprint::of(content);
                // Poisoning cannot leave a half-inserted set behind.
                let mut seen = seen.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
                seen.insert(fingerprint)
            }
            Self::LowestPath(losers) => !losers.contains(path),
        }
    }
}

/// Groups candidates by fingerprint; every path but the smallest of each
/// group is a loser. Unreadable files are left to the worker to report.
fn losers_by_path<'a, I>(candidates: I) -> HashSet<PathBuf>
where
    I: IntoIterator<Item = &'a PathBuf>,
{
    let paths: Vec<&PathBuf> = candidates.into_iter().collect();
    let mut hashed: Vec<(&PathBuf, Fingerprint)> = paths
        .par_iter()
        .filter_map(|path| match Fingerprint::of_file(path) {
            Ok(fp) => Some((*path, fp)),
            Err(e) => {
                log::debug!("Cannot fingerprint {}: {e}", path.display());
                None
            }
        })
        .collect();
    hashed.sort_by(|a, b| a.0.cmp(b.0));

    let mut winners: HashMap<Fingerprint, &PathBuf> = HashMap::with_capacity(hashed.len());
    let mut losers = HashSet::new();
    for (path, fp) in hashed {
        if let Some(winner) = winners.get(&fp) {
            log::debug!("Duplicate {} of {}", path.display(), winner.display());
            losers.insert(path.clone());
        } else {
            winners.insert(fp, path);
        }
    }
    losers
}
