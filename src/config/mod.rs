// src/config/mod.rs
// Configuration: environment lookup and project directory resolution

pub mod env;

pub use env::EnvConfig;

use std::path::PathBuf;

/// Resolve the active project directory.
///
/// A non-empty `configured` value wins, used verbatim; otherwise the process working
/// directory is used, or `.` if even that cannot be determined. The path
/// is not checked for existence.
pub fn resolve_project_dir(configured: Option<&str>) -> PathBuf {
    match configured.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().unwrap_or_else(|e| {
            tracing::warn!("Could not read current directory, using '.': {e}");
            PathBuf::from(".")
        }),
    }
}
