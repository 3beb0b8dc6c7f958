// src/hooks/session.rs
// SessionStart hook handler - summarizes project memory for the new session

use super::{HookOutput, HookTimer, read_hook_input, write_hook_output};
use crate::error::Result;
use crate::memory::{build_context, features_path, load_store};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Context emitted when the hook itself fails
pub const HOOK_ERROR_MESSAGE: &str =
    "Project memory hook encountered an error. Use /init-memory to set up.";

/// Context for `project_dir`, whatever state its store is in.
pub fn session_context(project_dir: &Path) -> String {
    build_context(&load_store(project_dir))
}

/// Handle SessionStart hook from Claude Code
pub fn run(project_dir: &Path) -> Result<()> {
    let _timer = HookTimer::start("SessionStart");

    let input = read_hook_input();
    debug!(
        session_id = input.session_id.as_deref().unwrap_or("unknown"),
        source = input.source.as_deref().unwrap_or("unknown"),
        event = input.hook_event_name.as_deref().unwrap_or("SessionStart"),
        cwd = input.cwd.as_deref().unwrap_or("-"),
        "SessionStart hook input"
    );
    debug!(
        project_dir = %project_dir.display(),
        store = %features_path(project_dir).display(),
        "Loading project memory"
    );

    let context = session_context(project_dir);
    debug!(context = %context, "Built session context");

    write_hook_output(&mut std::io::stdout().lock(), &HookOutput::with_context(context))
}

/// Emit the generic error envelope so the host still gets valid JSON.
pub fn write_error_output<W: Write>(out: &mut W) -> Result<()> {
    write_hook_output(out, &HookOutput::with_context(HOOK_ERROR_MESSAGE))
}
