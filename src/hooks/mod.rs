// src/hooks/mod.rs
// Claude Code hook handlers and their stdin/stdout plumbing

pub mod session;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{IsTerminal, Read, Write};
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Upper bound on hook input read from stdin
const MAX_HOOK_INPUT_BYTES: u64 = 1_048_576;

/// How long to wait for the host to finish writing hook input
pub const HOOK_INPUT_TIMEOUT: Duration = Duration::from_millis(100);

/// Performance threshold in milliseconds - warn if hook exceeds this.
const HOOK_PERF_THRESHOLD_MS: u128 = 100;

/// Fields of the host's hook input that we log. Everything is optional.
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    pub session_id: Option<String>,
    pub source: Option<String>,
    pub hook_event_name: Option<String>,
    pub cwd: Option<String>,
}

/// Parse hook input, falling back to an empty input on bad JSON.
pub fn parse_hook_input(raw: &[u8]) -> HookInput {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return HookInput::default();
    }
    serde_json::from_slice(raw).unwrap_or_else(|e| {
        tracing::debug!("Ignoring unparseable hook input: {e}");
        HookInput::default()
    })
}

/// Read hook input from stdin (Claude Code passes JSON).
///
/// An interactive terminal is never read from. Input is diagnostic only,
/// so a stalled or failing stdin yields an empty input.
pub fn read_hook_input() -> HookInput {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return HookInput::default();
    }
    read_hook_input_from(stdin, HOOK_INPUT_TIMEOUT)
}

/// Read and parse hook input from `reader`, giving up after `timeout`.
///
/// The read runs on a detached thread; if the deadline passes it is left
/// blocked and dies with the process.
pub fn read_hook_input_from<R>(reader: R, timeout: Duration) -> HookInput
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let mut raw = Vec::new();
        let result = reader
            .take(MAX_HOOK_INPUT_BYTES)
            .read_to_end(&mut raw)
            .map(|_| raw);
        let _ = tx.send(result);
    });

    match rx.recv_timeout(timeout) {
        Ok(Ok(raw)) => parse_hook_input(&raw),
        Ok(Err(e)) => {
            tracing::debug!("Failed to read hook input: {e}");
            HookInput::default()
        }
        Err(_) => {
            tracing::debug!(
                "No hook input within {}ms, continuing without it",
                timeout.as_millis()
            );
            HookInput::default()
        }
    }
}

/// `{"hookSpecificOutput": {"additionalContext": "..."}}`
#[derive(Debug, Serialize)]
pub struct HookOutput {
    #[serde(rename = "hookSpecificOutput")]
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Serialize)]
pub struct HookSpecificOutput {
    #[serde(rename = "additionalContext")]
    pub additional_context: String,
}

impl HookOutput {
    pub fn with_context(context: impl Into<String>) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                additional_context: context.into(),
            },
        }
    }
}

/// Write hook output as a single JSON line
pub fn write_hook_output<W: Write>(out: &mut W, output: &HookOutput) -> Result<()> {
    serde_json::to_writer(&mut *out, output)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Timer guard for hook performance monitoring
/// Logs execution time to stderr on drop
pub struct HookTimer {
    hook_name: &'static str,
    start: Instant,
}

impl HookTimer {
    /// Start timing a hook
    pub fn start(hook_name: &'static str) -> Self {
        Self {
            hook_name,
            start: Instant::now(),
        }
    }
}

impl Drop for HookTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed().as_millis();
        if elapsed > HOOK_PERF_THRESHOLD_MS {
            tracing::warn!(
                "PERF: {} hook took {}ms (threshold: {}ms)",
                self.hook_name,
                elapsed,
                HOOK_PERF_THRESHOLD_MS
            );
        } else {
            tracing::debug!("{} hook completed in {}ms", self.hook_name, elapsed);
        }
    }
}
