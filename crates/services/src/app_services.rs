use std::path::Path;
use std::sync::Arc;

use learn_core::model::LessonTotal;
use learn_core::ProgressState;
use storage::repository::Storage;

use crate::course_loader::load_course;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::Clock;

/// Services and initial state assembled once at startup.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    initial_state: ProgressState,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or course loading fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        course_path: Option<&Path>,
        total: LessonTotal,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, clock, course_path, total).await
    }

    /// Build services over an existing storage handle.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the course cannot be loaded.
    pub async fn from_storage(
        storage: &Storage,
        clock: Clock,
        course_path: Option<&Path>,
        total: LessonTotal,
    ) -> Result<Self, AppServicesError> {
        let course = load_course(course_path).await?;
        let progress = Arc::new(ProgressService::new(clock, Arc::clone(&storage.kv)));
        let initial_state = progress.open(course, total).await;

        tracing::info!(
            total_lessons = initial_state.total_lessons(),
            completed = initial_state.summary().completed,
            "progress tracker ready"
        );

        Ok(Self {
            progress,
            initial_state,
        })
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn initial_state(&self) -> &ProgressState {
        &self.initial_state
    }
}
