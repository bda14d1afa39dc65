//! Snapshot decoding from the JSON document the host pipes to stdin.

use std::io::Read;

use cc_statusline::Snapshot;

#[derive(Debug)]
pub(crate) enum SnapshotError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::Parse(err) => write!(f, "JSON parse error: {err}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

/// Read one snapshot; blank input yields the default snapshot.
pub(crate) fn read_snapshot(mut reader: impl Read) -> Result<Snapshot, SnapshotError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw).map_err(SnapshotError::Io)?;
    parse_snapshot(&raw)
}

fn parse_snapshot(raw: &str) -> Result<Snapshot, SnapshotError> {
    if raw.trim().is_empty() {
        return Ok(Snapshot::default());
    }
    let mut snapshot: Snapshot = serde_json::from_str(raw).map_err(SnapshotError::Parse)?;
    if snapshot.model_class == cc_statusline::ModelClass::Unspecified {
        snapshot.model_class = cc_statusline::ModelClass::detect(&snapshot.model_name);
    }
    tracing::debug!(model = %snapshot.model_name, "decoded snapshot");
    Ok(snapshot)
}
