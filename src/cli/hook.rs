// src/cli/hook.rs
// `hook session-start` entry point

use crate::config::{EnvConfig, resolve_project_dir};
use crate::hooks::session;

/// Run the SessionStart hook. Failures are logged and replaced by the
/// generic error envelope; the process still exits successfully.
pub fn run_session_start(project_dir: Option<&str>, env: &EnvConfig) {
    let dir = resolve_project_dir(project_dir.or(env.project_dir.as_deref()));

    if let Err(e) = session::run(&dir) {
        tracing::error!("SessionStart hook failed: {e}");
        if let Err(e) = session::write_error_output(&mut std::io::stdout().lock()) {
            tracing::error!("Failed to write hook error output: {e}");
        }
    }
}
