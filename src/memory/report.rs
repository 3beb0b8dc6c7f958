// src/memory/report.rs
// Multi-line listing of every tracked feature for /memory-status

use super::feature::{Feature, StatusGroups, features};
use super::store::StoreLoad;
use super::summary::{EMPTY_MEMORY_MESSAGE, NO_MEMORY_MESSAGE};

/// Render the status report.
///
/// Implemented features are listed newest first by `date`; `recent` caps
/// that section. In-progress and other features keep document order.
pub fn status_report(load: &StoreLoad, recent: Option<usize>) -> String {
    let store = match load {
        StoreLoad::Present(value) => value,
        StoreLoad::Absent => return NO_MEMORY_MESSAGE.to_string(),
    };

    let mut groups = StatusGroups::partition(features(store));
    if groups.total() == 0 {
        return EMPTY_MEMORY_MESSAGE.to_string();
    }

    let mut lines = vec![format!(
        "{} feature(s) tracked: {} implemented, {} in progress, {} other",
        groups.total(),
        groups.implemented.len(),
        groups.in_progress.len(),
        groups.other.len()
    )];

    // Stable sort: undated entries sink, ties keep document order
    groups.implemented.sort_by(|a, b| b.date().cmp(&a.date()));

    if !groups.implemented.is_empty() {
        lines.push(String::new());
        lines.push("Implemented:".to_string());
        let shown = recent.unwrap_or(usize::MAX);
        lines.extend(groups.implemented.iter().take(shown).map(implemented_line));
        if groups.implemented.len() > shown {
            lines.push(format!("  ... and {} more", groups.implemented.len() - shown));
        }
    }

    if !groups.in_progress.is_empty() {
        lines.push(String::new());
        lines.push("In progress:".to_string());
        lines.extend(
            groups
                .in_progress
                .iter()
                .map(|f| format!("  {} ({})", f.id, f.dev().unwrap_or("unknown"))),
        );
    }

    if !groups.other.is_empty() {
        lines.push(String::new());
        lines.push("Other:".to_string());
        lines.extend(
            groups
                .other
                .iter()
                .map(|f| format!("  {} [{}]", f.id, f.raw_status().unwrap_or("unknown"))),
        );
    }

    lines.join("\n")
}

fn implemented_line(feature: &Feature<'_>) -> String {
    format!(
        "  {}  {}  {}",
        feature.id,
        feature.date().unwrap_or("-"),
        feature.summary().unwrap_or("No summary")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> StoreLoad {
        StoreLoad::Present(json!({"features": {
            "PROJ-1": {"status": "implemented", "summary": "Login form", "date": "2025-01-10"},
            "PROJ-2": {"status": "in_progress", "dev": "sam"},
            "PROJ-3": {"status": "implemented", "date": "2025-02-01"},
            "PROJ-4": {"status": "blocked"},
            "PROJ-5": {"status": "implemented", "summary": "Undated"},
            "PROJ-6": {"status": "in_progress"}
        }}))
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(status_report(&StoreLoad::Absent, None), NO_MEMORY_MESSAGE);
        let empty = StoreLoad::Present(json!({"features": {}}));
        assert_eq!(status_report(&empty, None), EMPTY_MEMORY_MESSAGE);
    }

    #[test]
    fn test_full_report() {
        let report = status_report(&sample(), None);
        let expected = "\
6 feature(s) tracked: 3 implemented, 2 in progress, 1 other

Implemented:
  PROJ-3  2025-02-01  No summary
  PROJ-1  2025-01-10  Login form
  PROJ-5  -  Undated

In progress:
  PROJ-2 (sam)
  PROJ-6 (unknown)

Other:
  PROJ-4 [blocked]";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_recent_limits_implemented() {
        let report = status_report(&sample(), Some(1));
        assert!(report.contains("  PROJ-3  2025-02-01  No summary\n  ... and 2 more"));
        assert!(!report.contains("PROJ-1  2025-01-10"));
        // other sections are not capped
        assert!(report.contains("  PROJ-6 (unknown)"));
    }

    #[test]
    fn test_sections_omitted_when_empty() {
        let load = StoreLoad::Present(json!({"features": {"A": {"status": "in_progress"}}}));
        let report = status_report(&load, None);
        assert!(!report.contains("Implemented:"));
        assert!(!report.contains("Other:"));
        assert!(report.ends_with("In progress:\n  A (unknown)"));
    }
}
