// src/memory/store.rs
// Feature store reader - best-effort load of .claude/memory/features.json

use crate::error::{MemoryError, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Store file name inside the memory directory
pub const FEATURES_FILE: &str = "features.json";

/// Outcome of loading the feature store.
///
/// A missing file and an unreadable or malformed one both collapse into
/// `Absent`; callers never see why.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreLoad {
    Present(Value),
    Absent,
}

impl StoreLoad {
    /// Number of entries under `features`, zero when absent or not a mapping
    pub fn feature_count(&self) -> usize {
        match self {
            StoreLoad::Present(value) => value
                .get("features")
                .and_then(Value::as_object)
                .map_or(0, |features| features.len()),
            StoreLoad::Absent => 0,
        }
    }
}

/// `<project_dir>/.claude/memory/features.json`
pub fn features_path(project_dir: &Path) -> PathBuf {
    project_dir
        .join(".claude")
        .join("memory")
        .join(FEATURES_FILE)
}

/// Read and parse a store file, keeping the failure detail.
pub fn read_store(path: &Path) -> Result<Value> {
    let bytes = std::fs::read(path).map_err(|source| MemoryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| MemoryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the feature store for a project. Never fails.
pub fn load_store(project_dir: &Path) -> StoreLoad {
    let path = features_path(project_dir);

    if !path.exists() {
        debug!(path = %path.display(), "No feature store found");
        return StoreLoad::Absent;
    }

    match read_store(&path) {
        Ok(value) => {
            let load = StoreLoad::Present(value);
            debug!(
                path = %path.display(),
                features = load.feature_count(),
                "Loaded feature store"
            );
            load
        }
        Err(e) => {
            warn!("Ignoring feature store: {e}");
            StoreLoad::Absent
        }
    }
}
