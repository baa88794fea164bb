use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{LessonCardVm, WeekCardVm, map_week_cards};

use super::components::WeekProgressBar;
use super::tracker::{TrackerDispatcher, TrackerIntent, TrackerState};

/// Every week of the course with a checkbox per lesson.
#[component]
pub fn CourseView() -> Element {
    let ctx = use_context::<AppContext>();
    let tracker = use_context::<TrackerState>();
    let dispatcher = use_context::<TrackerDispatcher>();
    let show_week_progress = ctx.layout().week_progress;

    let (title, weeks) = {
        let progress = tracker.progress.read();
        let pulsing = tracker.pulsing_lesson.read();
        (
            progress.course().title().to_string(),
            map_week_cards(&progress, pulsing.as_ref()),
        )
    };

    rsx! {
        div { class: "page page--course",
            h2 { class: "course-title", "{title}" }
            if weeks.is_empty() {
                p { class: "empty-state", "This course has no lessons yet." }
            }
            for (index, week) in weeks.iter().enumerate() {
                WeekCard {
                    key: "{index}",
                    week: week.clone(),
                    show_progress: show_week_progress,
                    dispatch: dispatcher.dispatch,
                }
            }
        }
    }
}

#[component]
fn WeekCard(week: WeekCardVm, show_progress: bool, dispatch: Callback<TrackerIntent>) -> Element {
    let progress = week.progress.clone().filter(|_| show_progress);

    rsx! {
        section { class: "week-card",
            header { class: "week-header",
                span { class: "week-label", "{week.label}" }
                {week.title.as_ref().map(|title| rsx! {
                    h3 { class: "week-title", "{title}" }
                })}
            }
            {week.description_html.as_ref().map(|html| rsx! {
                div { class: "week-description", dangerous_inner_html: "{html}" }
            })}
            {progress.map(|week_progress| rsx! {
                WeekProgressBar { week: week_progress }
            })}
            div { class: "lesson-list",
                for lesson in week.lessons.iter() {
                    LessonCard {
                        key: "{lesson.id}",
                        lesson: lesson.clone(),
                        dispatch,
                    }
                }
            }
        }
    }
}

#[component]
fn LessonCard(lesson: LessonCardVm, dispatch: Callback<TrackerIntent>) -> Element {
    let click_id = lesson.id.clone();
    let key_id = lesson.id.clone();

    rsx! {
        div {
            class: lesson.card_class(),
            "data-lesson-id": "{lesson.id}",
            div {
                class: lesson.checkbox_class(),
                role: "checkbox",
                tabindex: "0",
                "aria-checked": lesson.aria_checked(),
                "aria-label": "{lesson.title}",
                onclick: move |evt| {
                    evt.stop_propagation();
                    dispatch.call(TrackerIntent::Toggle(click_id.clone()));
                },
                onkeydown: move |evt| {
                    if is_toggle_key(&evt.data.key()) {
                        evt.prevent_default();
                        dispatch.call(TrackerIntent::Toggle(key_id.clone()));
                    }
                },
            }
            {lesson.icon.as_ref().map(|icon| rsx! {
                span { class: "lesson-icon", "{icon}" }
            })}
            span { class: "lesson-title", "{lesson.title}" }
        }
    }
}

/// Enter and Space toggle a focused checkbox.
fn is_toggle_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(value) => value == " ",
        _ => false,
    }
}
