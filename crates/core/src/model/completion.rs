use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::ids::LessonId;

/// Which lessons have been checked off.
///
/// Serialized as a flat JSON object of lesson id to boolean. Ids that are not
/// present read as "not completed".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionMap {
    entries: BTreeMap<LessonId, bool>,
}

impl CompletionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_completed(&self, id: &LessonId) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Flip the value for `id` and return the new value. A missing entry
    /// counts as `false`, so the first toggle marks the lesson completed.
    pub fn toggle(&mut self, id: &LessonId) -> bool {
        let next = !self.is_completed(id);
        self.entries.insert(id.clone(), next);
        next
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries whose value is `true`.
    #[must_use]
    pub fn completion_count(&self) -> usize {
        self.entries.values().filter(|done| **done).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode as the persisted JSON record.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a persisted JSON record.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the text is not an object of
    /// lesson id to boolean.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}

impl FromIterator<(LessonId, bool)> for CompletionMap {
    fn from_iter<T: IntoIterator<Item = (LessonId, bool)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
