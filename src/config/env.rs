// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use tracing::Level;

/// Project root set by the hosting assistant
pub const PROJECT_DIR_VAR: &str = "CLAUDE_PROJECT_DIR";

/// Log level override for stderr diagnostics
pub const LOG_LEVEL_VAR: &str = "PROJECT_MEMORY_LOG";

/// Values read once from the environment at process start
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// Project root (CLAUDE_PROJECT_DIR)
    pub project_dir: Option<String>,
    /// Raw log level (PROJECT_MEMORY_LOG)
    pub log_level: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            project_dir: read_var(PROJECT_DIR_VAR),
            log_level: read_var(LOG_LEVEL_VAR),
        }
    }

    /// Configured log level, or `default` when unset or unrecognized.
    ///
    /// Runs before the subscriber exists, so bad values go straight to stderr.
    pub fn log_level(&self, default: Level) -> Level {
        match self.log_level.as_deref() {
            None => default,
            Some(raw) => parse_level(raw).unwrap_or_else(|| {
                eprintln!("[project-memory] Unknown {LOG_LEVEL_VAR} value '{raw}', using {default}");
                default
            }),
        }
    }
}

/// Read a single variable, treating empty values as unset
fn read_var(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse a log level name (case-insensitive)
pub fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_known_names() {
        assert_eq!(parse_level("error"), Some(Level::ERROR));
        assert_eq!(parse_level("WARN"), Some(Level::WARN));
        assert_eq!(parse_level("warning"), Some(Level::WARN));
        assert_eq!(parse_level(" Debug "), Some(Level::DEBUG));
        assert_eq!(parse_level("trace"), Some(Level::TRACE));
    }

    #[test]
    fn test_parse_level_unknown() {
        assert_eq!(parse_level("loud"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn test_non_empty_keeps_whitespace_values() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some(" ".to_string())).as_deref(), Some(" "));
        assert_eq!(non_empty(Some("/work".to_string())).as_deref(), Some("/work"));
    }

    #[test]
    fn test_log_level_defaults_when_unset() {
        let config = EnvConfig::default();
        assert_eq!(config.log_level(Level::WARN), Level::WARN);
    }

    #[test]
    fn test_log_level_override() {
        let config = EnvConfig {
            log_level: Some("debug".to_string()),
            ..Default::default()
        };
        assert_eq!(config.log_level(Level::WARN), Level::DEBUG);
    }

    #[test]
    fn test_log_level_bad_value_uses_default() {
        let config = EnvConfig {
            log_level: Some("chatty".to_string()),
            ..Default::default()
        };
        assert_eq!(config.log_level(Level::INFO), Level::INFO);
    }
}
