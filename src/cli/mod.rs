// src/cli/mod.rs
// CLI module for project-memory commands

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;

pub mod hook;
pub mod status;

pub use hook::run_session_start;
pub use status::run_status;

#[derive(Parser)]
#[command(name = "project-memory")]
#[command(about = "Project memory hooks for Claude Code")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse arguments without ever refusing to run the hook.
    ///
    /// `--help` and `--version` behave as usual. Any other parse error is
    /// returned alongside a default `Cli` (SessionStart) so the host still
    /// receives an envelope.
    pub fn parse_or_hook_from<I, T>(args: I) -> (Self, Option<clap::Error>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => (cli, None),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => (Self { command: None }, Some(e)),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Claude Code hook handlers
    Hook {
        #[command(subcommand)]
        action: HookAction,
    },

    /// List every tracked feature grouped by status
    Status {
        /// Project root (default: $CLAUDE_PROJECT_DIR, then current directory)
        #[arg(short, long)]
        project_dir: Option<String>,

        /// Show only the N most recently implemented features
        #[arg(short, long)]
        recent: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum HookAction {
    /// Handle SessionStart hooks - summarize tracked features (default)
    SessionStart {
        /// Project root (default: $CLAUDE_PROJECT_DIR, then current directory)
        #[arg(short, long)]
        project_dir: Option<String>,
    },
}
