// Snapshot persistence - the flat identity→status JSON file

use std::fs;
use std::path::Path;

use crate::state::Snapshot;

/// Failure classes at the snapshot I/O boundary. Callers map these to
/// "empty history" on load and "log and continue" on save; they never
/// escape the reporter.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read and parse a persisted snapshot.
pub fn load(path: &Path) -> Result<Snapshot, SnapshotError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read a persisted snapshot, treating any failure (missing file, corrupt
/// content) as no history.
pub fn load_or_empty(path: &Path) -> Snapshot {
    match load(path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::debug!("no previous results at {}: {}", path.display(), err);
            Snapshot::new()
        }
    }
}

/// Overwrite the snapshot file with the current run's mapping, creating
/// the containing directory first.
pub fn save(path: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}
