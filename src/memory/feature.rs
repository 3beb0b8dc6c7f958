// src/memory/feature.rs
// Typed views over raw feature records

use serde_json::Value;

/// Statuses the summaries know about. Anything else counts as "other".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum FeatureStatus {
    Implemented,
    InProgress,
}

/// One ticket in the store, borrowed from the parsed document
#[derive(Debug, Clone, Copy)]
pub struct Feature<'a> {
    pub id: &'a str,
    pub record: &'a Value,
}

impl<'a> Feature<'a> {
    /// Raw `status` string, if the record has one
    pub fn raw_status(&self) -> Option<&'a str> {
        self.str_field("status")
    }

    /// Parsed status; `None` for missing or unrecognized values
    pub fn status(&self) -> Option<FeatureStatus> {
        self.raw_status().and_then(|s| s.parse().ok())
    }

    pub fn summary(&self) -> Option<&'a str> {
        self.str_field("summary")
    }

    pub fn dev(&self) -> Option<&'a str> {
        self.str_field("dev")
    }

    pub fn date(&self) -> Option<&'a str> {
        self.str_field("date")
    }

    fn str_field(&self, key: &str) -> Option<&'a str> {
        self.record.get(key).and_then(Value::as_str)
    }
}

/// Iterate the `features` mapping of a store document in document order.
///
/// A missing, null, or non-object `features` (or a non-object document)
/// yields nothing.
pub fn features(store: &Value) -> impl Iterator<Item = Feature<'_>> {
    store
        .get("features")
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|map| map.iter())
        .map(|(id, record)| Feature {
            id: id.as_str(),
            record,
        })
}

/// Features split by status, each group in document order
#[derive(Debug, Default)]
pub struct StatusGroups<'a> {
    pub implemented: Vec<Feature<'a>>,
    pub in_progress: Vec<Feature<'a>>,
    pub other: Vec<Feature<'a>>,
}

impl<'a> StatusGroups<'a> {
    pub fn partition(features: impl IntoIterator<Item = Feature<'a>>) -> Self {
        let mut groups = Self::default();
        for feature in features {
            match feature.status() {
                Some(FeatureStatus::Implemented) => groups.implemented.push(feature),
                Some(FeatureStatus::InProgress) => groups.in_progress.push(feature),
                None => groups.other.push(feature),
            }
        }
        groups
    }

    pub fn total(&self) -> usize {
        self.implemented.len() + self.in_progress.len() + self.other.len()
    }
}
