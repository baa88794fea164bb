use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use learn_core::model::LessonId;
use services::{PersistOutcome, ProgressService};

use crate::context::AppContext;
use crate::vm::{NOTICE_DURATION, NoticeKind};

use super::state::{ExportState, LESSON_PULSE_DURATION, PULSE_DURATION, TrackerState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackerIntent {
    Toggle(LessonId),
    RequestReset,
    CancelReset,
    ConfirmReset,
    Export,
}

#[derive(Clone, Copy, PartialEq)]
pub struct TrackerDispatcher {
    pub dispatch: Callback<TrackerIntent>,
}

pub fn use_tracker_dispatcher(state: TrackerState, ctx: &AppContext) -> TrackerDispatcher {
    let service = ctx.progress_service();
    let export_dir = ctx.export_dir();

    let dispatch = use_callback(move |intent: TrackerIntent| match intent {
        TrackerIntent::Toggle(id) => toggle_lesson(state, &service, &id),
        TrackerIntent::RequestReset => {
            let mut show_reset_modal = state.show_reset_modal;
            show_reset_modal.set(true);
        }
        TrackerIntent::CancelReset => {
            let mut show_reset_modal = state.show_reset_modal;
            show_reset_modal.set(false);
        }
        TrackerIntent::ConfirmReset => confirm_reset(state, &service),
        TrackerIntent::Export => export_progress(state, &service, export_dir.clone()),
    });

    TrackerDispatcher { dispatch }
}

fn toggle_lesson(state: TrackerState, service: &Arc<ProgressService>, id: &LessonId) {
    let mut progress = state.progress;
    let completed = progress.write().toggle(id);
    tracing::debug!(lesson = %id, completed, "lesson toggled");

    persist(state, service);
    pulse(state);
    pulse_lesson(state, id.clone());
    let message = if completed {
        "Lesson marked as complete"
    } else {
        "Lesson marked as incomplete"
    };
    notify(state, message, NoticeKind::Info);
}

fn confirm_reset(state: TrackerState, service: &Arc<ProgressService>) {
    let mut show_reset_modal = state.show_reset_modal;
    if !*show_reset_modal.peek() {
        tracing::warn!("reset requested without confirmation; ignoring");
        return;
    }
    show_reset_modal.set(false);

    let mut progress = state.progress;
    progress.write().reset();
    tracing::info!("progress reset");

    persist(state, service);
    notify(state, "Progress reset successfully!", NoticeKind::Success);
}

fn export_progress(state: TrackerState, service: &Arc<ProgressService>, dir: PathBuf) {
    let mut export_state = state.export_state;
    if *export_state.peek() == ExportState::Exporting {
        return;
    }
    export_state.set(ExportState::Exporting);

    let snapshot_state = state.progress.peek().clone();
    let service = Arc::clone(service);
    spawn(async move {
        match service.export_to(&snapshot_state, &dir).await {
            Ok(path) => {
                export_state.set(ExportState::Exported(path));
                notify(state, "Progress exported successfully!", NoticeKind::Success);
            }
            Err(err) => {
                tracing::error!(error = %err, "export failed");
                export_state.set(ExportState::Failed);
                notify(state, format!("Export failed: {err}"), NoticeKind::Error);
            }
        }
    });
}

/// Hand the current map to the service. Later revisions win, so saves that
/// finish out of order cannot roll the record back.
fn persist(state: TrackerState, service: &Arc<ProgressService>) {
    let (revision, map) = {
        let progress = state.progress.peek();
        (progress.revision(), progress.completions().clone())
    };
    let service = Arc::clone(service);
    spawn(async move {
        match service.persist_revision(revision, &map).await {
            Ok(PersistOutcome::Saved | PersistOutcome::Stale) => {}
            Err(err) => {
                notify(
                    state,
                    format!("Could not save progress: {err}"),
                    NoticeKind::Error,
                );
            }
        }
    });
}

/// Stretch the overall bar briefly. A new pulse cancels the pending reset.
fn pulse(state: TrackerState) {
    let mut pulsing = state.pulsing;
    let mut pulse_task = state.pulse_task;
    if let Some(previous) = *pulse_task.peek() {
        previous.cancel();
    }

    pulsing.set(true);
    let task = spawn(async move {
        tokio::time::sleep(PULSE_DURATION).await;
        pulsing.set(false);
    });
    pulse_task.set(Some(task));
}

/// Enlarge the toggled checkbox briefly. Toggling another lesson moves the
/// pulse there and cancels the pending reset.
fn pulse_lesson(state: TrackerState, id: LessonId) {
    let mut pulsing_lesson = state.pulsing_lesson;
    let mut lesson_pulse_task = state.lesson_pulse_task;
    if let Some(previous) = *lesson_pulse_task.peek() {
        previous.cancel();
    }

    pulsing_lesson.set(Some(id));
    let task = spawn(async move {
        tokio::time::sleep(LESSON_PULSE_DURATION).await;
        pulsing_lesson.set(None);
    });
    lesson_pulse_task.set(Some(task));
}

/// Show a notice, replacing any visible one and cancelling its dismissal.
pub(crate) fn notify(state: TrackerState, message: impl Into<String>, kind: NoticeKind) {
    let mut notices = state.notices;
    let mut notice_task = state.notice_task;
    if let Some(previous) = *notice_task.peek() {
        previous.cancel();
    }

    let ticket = notices.write().show(message, kind);
    let task = spawn(async move {
        tokio::time::sleep(NOTICE_DURATION).await;
        notices.write().dismiss(ticket);
    });
    notice_task.set(Some(task));
}
