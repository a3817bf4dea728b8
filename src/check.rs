//! Consistency check against a checked-in artifact
//!
//! Regenerating the artifact must reproduce the persisted file line for line.
//! A mismatch means the partition/emit contract changed or somebody forgot to
//! regenerate.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use difference::{Changeset, Difference};
use thiserror::Error;
use tracing::{debug, warn};

/// The regenerated artifact differs from the persisted one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "{} differs from the regenerated artifact ({changed_lines} changed lines). \
     Did you forget to regenerate it?\n{diff}",
    .path.display()
)]
pub struct ConsistencyMismatchError {
    /// Persisted artifact that was compared.
    pub path: PathBuf,
    /// Lines added or removed by regeneration.
    pub changed_lines: usize,
    /// Line diff from persisted (`-`) to regenerated (`+`).
    pub diff: String,
}

/// Failures of the consistency-check stage.
#[derive(Debug, Error)]
pub enum ConsistencyError {
    /// Persisted artifact could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Artifact path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Persisted artifact is stale.
    #[error(transparent)]
    Mismatch(#[from] ConsistencyMismatchError),
}

/// Line diff between two texts, rendered with ` `, `-` and `+` prefixes.
pub struct LineDiff(Changeset);

impl LineDiff {
    /// Diff `left` (persisted) against `right` (regenerated).
    pub fn new(left: &str, right: &str) -> Self {
        Self(Changeset::new(left, right, "\n"))
    }

    /// Number of added plus removed lines.
    pub fn changed_lines(&self) -> usize {
        self.0
            .diffs
            .iter()
            .map(|d| match d {
                Difference::Same(_) => 0,
                Difference::Add(x) | Difference::Rem(x) => x.split('\n').count(),
            })
            .sum()
    }
}

impl fmt::Display for LineDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0.diffs {
            let (prefix, lines) = match d {
                Difference::Same(x) => (" ", x),
                Difference::Add(x) => ("+", x),
                Difference::Rem(x) => ("-", x),
            };
            for line in lines.split('\n') {
                writeln!(f, "{}{}", prefix, line)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for LineDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineDiff")
            .field("changed_lines", &self.changed_lines())
            .finish()
    }
}

/// Compare persisted and regenerated text, ignoring line-ending style.
pub fn compare(
    path: &Path,
    persisted: &str,
    regenerated: &str,
) -> Result<(), ConsistencyMismatchError> {
    if persisted.lines().eq(regenerated.lines()) {
        debug!(path = %path.display(), "artifact is up to date");
        return Ok(());
    }

    let left = persisted.lines().collect::<Vec<_>>().join("\n");
    let right = regenerated.lines().collect::<Vec<_>>().join("\n");
    let diff = LineDiff::new(&left, &right);
    let changed_lines = diff.changed_lines();
    warn!(path = %path.display(), changed_lines, "artifact is stale");

    Err(ConsistencyMismatchError {
        path: path.to_path_buf(),
        changed_lines,
        diff: diff.to_string(),
    })
}

/// Read the artifact at `path` and compare it with `regenerated`.
pub fn verify_artifact(path: &Path, regenerated: &str) -> Result<(), ConsistencyError> {
    let persisted = fs::read_to_string(path).map_err(|source| ConsistencyError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    compare(path, &persisted, regenerated)?;
    Ok(())
}
