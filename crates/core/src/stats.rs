//! Completion statistics derived from a `CompletionMap` and a `Course`.

use crate::model::{CompletionMap, Course};

/// `round(100 * count / total)`, clamped to `0..=100`. A zero total yields 0.
#[must_use]
pub fn completion_percentage(count: usize, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = count as f64 / f64::from(total);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = (ratio * 100.0).round().clamp(0.0, 100.0) as u8;
    pct
}

/// Overall progress across the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: u32,
    pub percentage: u8,
}

impl ProgressSummary {
    #[must_use]
    pub fn compute(map: &CompletionMap, total: u32) -> Self {
        let completed = map.completion_count();
        Self {
            completed,
            total,
            percentage: completion_percentage(completed, total),
        }
    }

    /// e.g. "2 of 66 lessons completed".
    #[must_use]
    pub fn progress_text(&self) -> String {
        format!("{} of {} lessons completed", self.completed, self.total)
    }
}

/// Completion inside one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekProgress {
    pub label: String,
    pub completed: usize,
    pub total: usize,
}

impl WeekProgress {
    #[must_use]
    pub fn percentage(&self) -> u8 {
        completion_percentage(self.completed, u32::try_from(self.total).unwrap_or(u32::MAX))
    }
}

/// Walk the course in order and count completed lessons per week.
#[must_use]
pub fn per_week_counts(map: &CompletionMap, course: &Course) -> Vec<WeekProgress> {
    course
        .weeks()
        .iter()
        .map(|week| WeekProgress {
            label: week.label().to_string(),
            completed: week
                .lessons()
                .iter()
                .filter(|lesson| map.is_completed(lesson.id()))
                .count(),
            total: week.lessons().len(),
        })
        .collect()
}
