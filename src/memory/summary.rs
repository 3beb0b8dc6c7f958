// src/memory/summary.rs
// SessionStart context: a short paragraph describing tracked features

use super::feature::{StatusGroups, features};
use super::store::StoreLoad;

/// Shown when there is no usable store
pub const NO_MEMORY_MESSAGE: &str =
    "No project memory found. Run /init-memory to enable feature tracking.";

/// Shown when the store exists but tracks nothing
pub const EMPTY_MEMORY_MESSAGE: &str = "Project memory initialized but empty. Use /execute TICKET-ID description to implement features with tracking.";

const EXECUTE_HINT: &str =
    "Use /execute TICKET-ID description to implement features with duplicate detection.";
const STATUS_HINT: &str = "Use /memory-status to see all tracked features.";

/// In-progress tickets named before collapsing the rest into "and K more"
const MAX_IN_PROGRESS_SHOWN: usize = 3;

/// Build the context string injected at session start.
pub fn build_context(load: &StoreLoad) -> String {
    let store = match load {
        StoreLoad::Present(value) => value,
        StoreLoad::Absent => return NO_MEMORY_MESSAGE.to_string(),
    };

    let groups = StatusGroups::partition(features(store));
    if groups.total() == 0 {
        return EMPTY_MEMORY_MESSAGE.to_string();
    }

    let mut parts = vec![format!(
        "Project has {} implemented feature(s).",
        groups.implemented.len()
    )];

    if !groups.in_progress.is_empty() {
        let mut list = groups
            .in_progress
            .iter()
            .take(MAX_IN_PROGRESS_SHOWN)
            .map(|f| f.id)
            .collect::<Vec<_>>()
            .join(", ");
        if groups.in_progress.len() > MAX_IN_PROGRESS_SHOWN {
            list.push_str(&format!(
                " and {} more",
                groups.in_progress.len() - MAX_IN_PROGRESS_SHOWN
            ));
        }
        parts.push(format!("In progress: {list}."));
    }

    parts.push(EXECUTE_HINT.to_string());
    parts.push(STATUS_HINT.to_string());

    parts.join(" ")
}
