//! Tests for the `status` command

use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn write_store(project: &Path, contents: &str) {
    let memory_dir = project.join(".claude").join("memory");
    std::fs::create_dir_all(&memory_dir).expect("Failed to create memory dir");
    std::fs::write(memory_dir.join("features.json"), contents).expect("Failed to write store");
}

fn run_status(project: &Path, extra: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_project-memory"))
        .env_remove("CLAUDE_PROJECT_DIR")
        .env_remove("PROJECT_MEMORY_LOG")
        .arg("status")
        .arg("--project-dir")
        .arg(project)
        .args(extra)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run project-memory status");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

#[test]
fn test_status_without_store() {
    let project = TempDir::new().unwrap();
    assert_eq!(
        run_status(project.path(), &[]),
        "No project memory found. Run /init-memory to enable feature tracking.\n"
    );
}

#[test]
fn test_status_lists_all_groups() {
    let project = TempDir::new().unwrap();
    write_store(
        project.path(),
        r#"{"features": {
            "API-1": {"status": "implemented", "summary": "Rate limiting", "date": "2025-04-02"},
            "API-2": {"status": "in_progress", "dev": "ana"},
            "API-3": {"status": "implemented", "summary": "Auth tokens", "date": "2025-05-11"},
            "API-4": {"status": "abandoned"}
        }}"#,
    );

    let report = run_status(project.path(), &[]);
    assert!(report.starts_with("4 feature(s) tracked: 2 implemented, 1 in progress, 1 other\n"));
    let newer = report.find("API-3  2025-05-11  Auth tokens").unwrap();
    let older = report.find("API-1  2025-04-02  Rate limiting").unwrap();
    assert!(newer < older);
    assert!(report.contains("  API-2 (ana)\n"));
    assert!(report.contains("  API-4 [abandoned]\n"));
}

#[test]
fn test_status_recent_limit() {
    let project = TempDir::new().unwrap();
    write_store(
        project.path(),
        r#"{"features": {
            "A": {"status": "implemented", "date": "2025-01-01"},
            "B": {"status": "implemented", "date": "2025-01-02"},
            "C": {"status": "implemented", "date": "2025-01-03"}
        }}"#,
    );

    let report = run_status(project.path(), &["--recent", "2"]);
    assert!(report.contains("  C  2025-01-03  No summary\n  B  2025-01-02  No summary\n  ... and 1 more\n"));
    assert!(!report.contains("  A  2025-01-01"));
}
