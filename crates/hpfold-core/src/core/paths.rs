//! Ranked candidate lookup for result files and output directories.
//!
//! The simulation may be run from the project root (results land in `Out/`) or directly in
//! the results directory, so every location is looked up in a ranked list: the first
//! existing candidate wins, and when nothing exists the primary candidate is returned so
//! the caller fails with a diagnostic that names the preferred location.

use std::path::{Path, PathBuf};
use tracing::debug;

/// A non-empty, ranked list of candidate paths. The first entry is the primary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    primary: PathBuf,
    fallbacks: Vec<PathBuf>,
}

impl CandidateList {
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            fallbacks: Vec::new(),
        }
    }

    /// Builds a list from ranked paths, returning `None` when `paths` is empty.
    pub fn from_ranked<I, P>(paths: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut iter = paths.into_iter().map(Into::into);
        let primary = iter.next()?;
        Some(Self {
            primary,
            fallbacks: iter.collect(),
        })
    }

    pub fn with_fallback(mut self, path: impl Into<PathBuf>) -> Self {
        self.fallbacks.push(path.into());
        self
    }

    pub fn primary(&self) -> &Path {
        &self.primary
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.primary.as_path()).chain(self.fallbacks.iter().map(PathBuf::as_path))
    }

    pub fn len(&self) -> usize {
        1 + self.fallbacks.len()
    }

    /// Joins `file_name` onto every candidate directory, keeping the ranking.
    pub fn join(&self, file_name: impl AsRef<Path>) -> Self {
        let file_name = file_name.as_ref();
        Self {
            primary: self.primary.join(file_name),
            fallbacks: self.fallbacks.iter().map(|d| d.join(file_name)).collect(),
        }
    }
}

/// Outcome of resolving a [`CandidateList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub path: PathBuf,
    /// Rank of the matching candidate, or `None` when no candidate exists.
    pub rank: Option<usize>,
}

impl Resolution {
    pub fn exists(&self) -> bool {
        self.rank.is_some()
    }

    pub fn is_fallback(&self) -> bool {
        self.rank.is_some_and(|r| r > 0)
    }
}

/// Returns the first candidate accepted by `exists`, or the primary when none is.
pub fn resolve(candidates: &CandidateList, exists: impl Fn(&Path) -> bool) -> Resolution {
    for (rank, candidate) in candidates.iter().enumerate() {
        if exists(candidate) {
            debug!("Resolved {:?} (candidate #{})", candidate, rank);
            return Resolution {
                path: candidate.to_path_buf(),
                rank: Some(rank),
            };
        }
        debug!("Candidate {:?} does not exist", candidate);
    }
    Resolution {
        path: candidates.primary().to_path_buf(),
        rank: None,
    }
}

pub fn resolve_file(candidates: &CandidateList) -> Resolution {
    resolve(candidates, Path::is_file)
}

pub fn resolve_dir(candidates: &CandidateList) -> Resolution {
    resolve(candidates, Path::is_dir)
}
