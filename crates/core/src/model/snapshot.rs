use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::completion::CompletionMap;

/// File name prefix shared by every exported snapshot.
pub const EXPORT_FILE_PREFIX: &str = "learn-ai-progress";

/// Point-in-time export of the user's progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub progress: CompletionMap,
    #[serde(alias = "completed")]
    pub completed_count: usize,
    pub total_lessons: u32,
    pub percentage: u8,
    pub export_date: DateTime<Utc>,
}

impl ProgressSnapshot {
    /// `learn-ai-progress-<YYYY-MM-DD>.json`, dated by the export timestamp.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{EXPORT_FILE_PREFIX}-{}.json",
            self.export_date.format("%Y-%m-%d")
        )
    }

    /// Pretty-printed JSON document offered for download.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
