// src/cli/status.rs
// `status` command - print every tracked feature

use crate::config::{EnvConfig, resolve_project_dir};
use crate::error::Result;
use crate::memory::{features_path, load_store, status_report};
use std::io::Write;
use tracing::info;

pub fn run_status(project_dir: Option<&str>, recent: Option<usize>, env: &EnvConfig) -> Result<()> {
    let dir = resolve_project_dir(project_dir.or(env.project_dir.as_deref()));
    info!(store = %features_path(&dir).display(), "Reading project memory");

    let report = status_report(&load_store(&dir), recent);

    let mut out = std::io::stdout().lock();
    writeln!(out, "{report}")?;
    Ok(())
}
