use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{ProgressVm, map_week_progress};

use super::components::{ResetConfirmModal, WeekProgressBar};
use super::tracker::{ExportState, TrackerDispatcher, TrackerIntent, TrackerState};

/// Dashboard with the overall bar, counters, per-week breakdown and the
/// reset and export actions. Displays switched off in the layout are not
/// rendered at all.
#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let tracker = use_context::<TrackerState>();
    let dispatch = use_context::<TrackerDispatcher>().dispatch;
    let layout = ctx.layout();

    let (overall, weeks) = {
        let progress = tracker.progress.read();
        (ProgressVm::from_state(&progress), map_week_progress(&progress))
    };
    let bar_style = overall.bar_style((tracker.pulsing)());
    let percentage_text = overall.percentage_text();
    let show_reset_modal = (tracker.show_reset_modal)();
    let (exporting, exported_to) = match &*tracker.export_state.read() {
        ExportState::Exporting => (true, None),
        ExportState::Exported(path) => (false, Some(path.display().to_string())),
        ExportState::Idle | ExportState::Failed => (false, None),
    };

    rsx! {
        div { class: "page page--progress",
            h2 { "Your Progress" }
            section { class: "progress-overview",
                if layout.progress_bar {
                    div { class: "progress-track",
                        div { id: "progress-bar", class: "progress-bar", style: "{bar_style}" }
                    }
                }
                if layout.progress_text {
                    p { id: "progress-text", class: "progress-text", "{overall.progress_text}" }
                }
                div { class: "progress-stats",
                    if layout.completed_count {
                        div { class: "stat",
                            span { id: "completed-count", class: "stat-value", "{overall.completed}" }
                            span { class: "stat-label", "Completed" }
                        }
                    }
                    if layout.total_count {
                        div { class: "stat",
                            span { id: "total-count", class: "stat-value", "{overall.total}" }
                            span { class: "stat-label", "Total" }
                        }
                    }
                    if layout.percentage_text {
                        div { class: "stat",
                            span { id: "percentage-text", class: "stat-value", "{percentage_text}" }
                            span { class: "stat-label", "Progress" }
                        }
                    }
                }
            }
            if layout.week_progress && !weeks.is_empty() {
                section { class: "week-breakdown",
                    h3 { "By week" }
                    for (index, week) in weeks.iter().enumerate() {
                        WeekProgressBar { key: "{index}", week: week.clone() }
                    }
                }
            }
            div { class: "progress-actions",
                if layout.reset_action {
                    button {
                        id: "reset-progress",
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| dispatch.call(TrackerIntent::RequestReset),
                        "Reset Progress"
                    }
                }
                if layout.export_action {
                    button {
                        id: "export-progress",
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: exporting,
                        onclick: move |_| dispatch.call(TrackerIntent::Export),
                        "Export Progress"
                    }
                }
            }
            {exported_to.map(|path| rsx! {
                p { id: "export-path", class: "export-path", "Saved to {path}" }
            })}
            if show_reset_modal {
                ResetConfirmModal {
                    on_cancel: move |_| dispatch.call(TrackerIntent::CancelReset),
                    on_confirm: move |_| dispatch.call(TrackerIntent::ConfirmReset),
                }
            }
        }
    }
}
