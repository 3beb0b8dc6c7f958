// src/memory/mod.rs
//! Project memory: the on-disk feature store and the summaries built from it.
//!
//! - `store`: locate and read `.claude/memory/features.json`
//! - `feature`: typed views over raw feature records
//! - `summary`: the one-paragraph SessionStart context
//! - `report`: the multi-line `/memory-status` listing

pub mod feature;
pub mod report;
pub mod store;
pub mod summary;

pub use feature::{Feature, FeatureStatus, StatusGroups};
pub use report::status_report;
pub use store::{StoreLoad, features_path, load_store, read_store};
pub use summary::build_context;
