use std::path::{Path, PathBuf};
use std::sync::Arc;

use learn_core::model::{CompletionMap, Course, LessonTotal, ProgressSnapshot};
use learn_core::ProgressState;
use storage::repository::KeyValueStore;
use tokio::sync::Mutex;

use crate::error::{ExportError, ProgressServiceError};
use crate::Clock;

/// Key of the single persisted completion record.
pub const PROGRESS_STORAGE_KEY: &str = "learn-ai-progress";

/// Result of a revision-ordered save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    Saved,
    /// A newer revision was already written; this one was dropped.
    Stale,
}

/// Loads, saves and exports the completion map.
///
/// Reads fail soft: anything unreadable is logged and treated as empty.
/// Writes report errors to the caller but never touch in-memory state.
pub struct ProgressService {
    clock: Clock,
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    last_persisted: Mutex<u64>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            clock,
            store,
            key: PROGRESS_STORAGE_KEY,
            last_persisted: Mutex::new(0),
        }
    }

    /// Read the persisted map. Missing or malformed records yield an empty map.
    pub async fn load(&self) -> CompletionMap {
        let raw = match self.store.get_item(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return CompletionMap::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to read progress; starting empty");
                return CompletionMap::new();
            }
        };

        match CompletionMap::from_json(&raw) {
            Ok(map) => {
                tracing::debug!(key = %self.key, entries = map.len(), "progress loaded");
                map
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "persisted progress is malformed; starting empty");
                CompletionMap::new()
            }
        }
    }

    /// Load the map and wrap it with the course and totals policy.
    pub async fn open(&self, course: Course, total: LessonTotal) -> ProgressState {
        let completions = self.load().await;
        ProgressState::new(course, total, completions)
    }

    /// Serialize and write the map unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if encoding or the store write fails.
    /// The failure is already logged.
    pub async fn save(&self, map: &CompletionMap) -> Result<(), ProgressServiceError> {
        let _guard = self.last_persisted.lock().await;
        self.write(map).await
    }

    /// Write the state's map unless a newer revision has already been saved.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if encoding or the store write fails.
    pub async fn persist(&self, state: &ProgressState) -> Result<PersistOutcome, ProgressServiceError> {
        self.persist_revision(state.revision(), state.completions()).await
    }

    /// Revision-ordered save for callers that hand off a cloned map.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if encoding or the store write fails.
    pub async fn persist_revision(
        &self,
        revision: u64,
        map: &CompletionMap,
    ) -> Result<PersistOutcome, ProgressServiceError> {
        let mut last = self.last_persisted.lock().await;
        if revision < *last {
            tracing::debug!(revision, last = *last, "skipping stale progress save");
            return Ok(PersistOutcome::Stale);
        }
        self.write(map).await?;
        *last = revision;
        Ok(PersistOutcome::Saved)
    }

    async fn write(&self, map: &CompletionMap) -> Result<(), ProgressServiceError> {
        let encoded = map.to_json().map_err(|err| {
            tracing::error!(error = %err, "failed to encode progress");
            ProgressServiceError::Encode(err)
        })?;

        self.store
            .set_item(&self.key, &encoded)
            .await
            .map_err(|err| {
                tracing::error!(key = %self.key, error = %err, "failed to save progress");
                ProgressServiceError::Storage(err)
            })?;

        tracing::debug!(key = %self.key, completed = map.completion_count(), "progress saved");
        Ok(())
    }

    /// Snapshot of the state stamped with the service clock.
    #[must_use]
    pub fn snapshot(&self, state: &ProgressState) -> ProgressSnapshot {
        state.snapshot(self.clock.now())
    }

    /// Write a snapshot into `dir` as `learn-ai-progress-<date>.json`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if encoding fails or the file cannot be written.
    pub async fn export_to(
        &self,
        state: &ProgressState,
        dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        let snapshot = self.snapshot(state);
        let json = snapshot.to_json_pretty()?;
        let path = dir.join(snapshot.file_name());

        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| ExportError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        tokio::fs::write(&path, json.as_bytes())
            .await
            .map_err(|source| ExportError::Io {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), completed = snapshot.completed_count, "progress exported");
        Ok(path)
    }
}
