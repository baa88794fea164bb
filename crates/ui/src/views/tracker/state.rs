use std::path::PathBuf;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use learn_core::ProgressState;
use learn_core::model::LessonId;

use crate::vm::NoticeBoard;

/// How long the overall bar stays stretched after a toggle.
pub const PULSE_DURATION: Duration = Duration::from_millis(100);

/// How long a clicked checkbox stays enlarged.
pub const LESSON_PULSE_DURATION: Duration = Duration::from_millis(200);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportState {
    Idle,
    Exporting,
    Exported(PathBuf),
    Failed,
}

/// Live tracker state shared by every view through context.
#[derive(Clone, Copy, PartialEq)]
pub struct TrackerState {
    pub progress: Signal<ProgressState>,
    pub notices: Signal<NoticeBoard>,
    pub pulsing: Signal<bool>,
    pub pulsing_lesson: Signal<Option<LessonId>>,
    pub show_reset_modal: Signal<bool>,
    pub export_state: Signal<ExportState>,
    pub(crate) notice_task: Signal<Option<Task>>,
    pub(crate) pulse_task: Signal<Option<Task>>,
    pub(crate) lesson_pulse_task: Signal<Option<Task>>,
}

pub fn use_tracker_state(initial: &ProgressState) -> TrackerState {
    let progress = use_signal(|| initial.clone());
    let notices = use_signal(NoticeBoard::default);
    let pulsing = use_signal(|| false);
    let pulsing_lesson = use_signal(|| None);
    let show_reset_modal = use_signal(|| false);
    let export_state = use_signal(|| ExportState::Idle);
    let notice_task = use_signal(|| None);
    let pulse_task = use_signal(|| None);
    let lesson_pulse_task = use_signal(|| None);

    TrackerState {
        progress,
        notices,
        pulsing,
        pulsing_lesson,
        show_reset_modal,
        export_state,
        notice_task,
        pulse_task,
        lesson_pulse_task,
    }
}
