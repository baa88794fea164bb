use learn_core::model::LessonId;
use learn_core::ProgressState;

use crate::vm::markdown_vm::markdown_to_html;
use crate::vm::progress_vm::WeekProgressVm;

/// One lesson card with its checkbox state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: LessonId,
    pub title: String,
    pub icon: Option<String>,
    pub completed: bool,
    /// Set right after the lesson was toggled.
    pub pulsing: bool,
}

impl LessonCardVm {
    #[must_use]
    pub fn card_class(&self) -> &'static str {
        if self.completed {
            "lesson-card completed"
        } else {
            "lesson-card"
        }
    }

    #[must_use]
    pub fn checkbox_class(&self) -> &'static str {
        match (self.completed, self.pulsing) {
            (true, true) => "lesson-checkbox checked pulse",
            (true, false) => "lesson-checkbox checked",
            (false, true) => "lesson-checkbox pulse",
            (false, false) => "lesson-checkbox",
        }
    }

    #[must_use]
    pub fn aria_checked(&self) -> &'static str {
        if self.completed { "true" } else { "false" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekCardVm {
    pub label: String,
    pub title: Option<String>,
    pub description_html: Option<String>,
    pub lessons: Vec<LessonCardVm>,
    /// Absent for weeks without lessons.
    pub progress: Option<WeekProgressVm>,
}

#[must_use]
pub fn map_week_cards(state: &ProgressState, pulsing: Option<&LessonId>) -> Vec<WeekCardVm> {
    state
        .course()
        .weeks()
        .iter()
        .zip(state.week_progress())
        .map(|(week, progress)| WeekCardVm {
            label: week.label().to_string(),
            title: week.title().map(str::to_owned),
            description_html: week.description().map(markdown_to_html),
            lessons: week
                .lessons()
                .iter()
                .map(|lesson| LessonCardVm {
                    id: lesson.id().clone(),
                    title: lesson.title().to_string(),
                    icon: lesson.icon().map(str::to_owned),
                    completed: state.is_completed(lesson.id()),
                    pulsing: pulsing == Some(lesson.id()),
                })
                .collect(),
            progress: (progress.total > 0).then(|| WeekProgressVm::from(&progress)),
        })
        .collect()
}
