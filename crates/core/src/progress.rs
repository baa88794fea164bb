use chrono::{DateTime, Utc};

use crate::model::{CompletionMap, Course, LessonId, LessonTotal, ProgressSnapshot};
use crate::stats::{ProgressSummary, WeekProgress, per_week_counts};

/// In-memory progress for one course: the completion map plus the totals
/// used to compute aggregates.
///
/// Every mutation bumps `revision` so persistence can discard stale writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    course: Course,
    total_lessons: u32,
    completions: CompletionMap,
    revision: u64,
}

impl ProgressState {
    #[must_use]
    pub fn new(course: Course, total: LessonTotal, completions: CompletionMap) -> Self {
        let total_lessons = total.resolve(&course);
        Self {
            course,
            total_lessons,
            completions,
            revision: 0,
        }
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    #[must_use]
    pub fn completions(&self) -> &CompletionMap {
        &self.completions
    }

    #[must_use]
    pub fn total_lessons(&self) -> u32 {
        self.total_lessons
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn is_completed(&self, id: &LessonId) -> bool {
        self.completions.is_completed(id)
    }

    /// Flip one lesson and return its new value.
    pub fn toggle(&mut self, id: &LessonId) -> bool {
        self.revision += 1;
        self.completions.toggle(id)
    }

    /// Drop every entry. Confirmation is the caller's responsibility.
    pub fn reset(&mut self) {
        self.revision += 1;
        self.completions.clear();
    }

    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::compute(&self.completions, self.total_lessons)
    }

    #[must_use]
    pub fn week_progress(&self) -> Vec<WeekProgress> {
        per_week_counts(&self.completions, &self.course)
    }

    #[must_use]
    pub fn snapshot(&self, now: DateTime<Utc>) -> ProgressSnapshot {
        let summary = self.summary();
        ProgressSnapshot {
            progress: self.completions.clone(),
            completed_count: summary.completed,
            total_lessons: summary.total,
            percentage: summary.percentage,
            export_date: now,
        }
    }
}
