use dioxus::prelude::*;

use crate::vm::WeekProgressVm;

use super::tracker::TrackerState;

/// Compact per-week bar with a "done/total" counter.
#[component]
pub fn WeekProgressBar(week: WeekProgressVm) -> Element {
    let fill_style = week.fill_style();
    let count_text = week.count_text();
    let percentage_text = week.percentage_text();

    rsx! {
        div { class: "week-progress",
            span { class: "week-progress-label", "{week.label}" }
            div { class: "week-progress-track",
                div { class: "week-progress-fill", style: "{fill_style}" }
            }
            span { class: "week-progress-count", "{count_text}" }
            span { class: "week-progress-percentage", "{percentage_text}" }
        }
    }
}

/// Shows the current notice, if any.
#[component]
pub fn ToastHost() -> Element {
    let tracker = use_context::<TrackerState>();
    let notice = tracker.notices.read().current().cloned();

    rsx! {
        {notice.map(|notice| rsx! {
            div {
                class: notice.kind.css_class(),
                role: "status",
                "{notice.message}"
            }
        })}
    }
}

#[component]
pub fn ResetConfirmModal(on_cancel: Callback<()>, on_confirm: Callback<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Reset progress?" }
                p { class: "modal-body",
                    "Are you sure you want to reset all progress? This cannot be undone."
                }
                div { class: "modal-actions",
                    button {
                        id: "reset-cancel",
                        class: "btn modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        id: "reset-confirm",
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "Reset"
                    }
                }
            }
        }
    }
}
