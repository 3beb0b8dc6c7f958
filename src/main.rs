// src/main.rs
// project-memory - SessionStart hook summarizing tracked project features

use anyhow::Result;
use project_memory::cli::{Cli, Commands, HookAction, run_session_start, run_status};
use project_memory::config::EnvConfig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let env = EnvConfig::from_env();
    let (cli, parse_error) = Cli::parse_or_hook_from(std::env::args_os());

    // stdout belongs to the host for hooks; keep stderr quiet there
    let default_level = match &cli.command {
        None | Some(Commands::Hook { .. }) => Level::WARN,
        Some(Commands::Status { .. }) => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(env.log_level(default_level))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(e) = parse_error {
        let reason = e.to_string();
        tracing::warn!(
            "Ignoring arguments, running session-start: {}",
            reason.lines().next().unwrap_or("invalid arguments")
        );
    }

    match cli.command {
        None => run_session_start(None, &env),
        Some(Commands::Hook { action }) => match action {
            HookAction::SessionStart { project_dir } => {
                run_session_start(project_dir.as_deref(), &env);
            }
        },
        Some(Commands::Status {
            project_dir,
            recent,
        }) => {
            run_status(project_dir.as_deref(), recent, &env)?;
        }
    }

    Ok(())
}
